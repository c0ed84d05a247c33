//! Tests for weighted stratified resampling.
//!
//! ## Test Organization
//!
//! 1. **Bin Weights** - Width-proportional weights
//! 2. **Sampling** - Frequencies, ranges, reproducibility
//! 3. **Validation** - Malformed specifications

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use regulus::internals::algorithms::resample::{
    DimensionBins, ResampleSpec, resample, resample_with,
};
use regulus::internals::primitives::errors::RegulusError;

fn two_bin_spec() -> ResampleSpec<&'static str> {
    ResampleSpec::new(
        vec![DimensionBins::new("x", vec![0.0, 1.0], vec![1.0, 4.0])],
        vec!["low", "high"],
    )
}

// ============================================================================
// Bin Weight Tests
// ============================================================================

/// Weights sum per-dimension width fractions.
#[test]
fn test_bin_weights_two_dims() {
    let spec = ResampleSpec::new(
        vec![
            DimensionBins::new("a", vec![0.0, 2.0], vec![1.0, 3.0]),
            DimensionBins::new("b", vec![0.0, 0.0], vec![1.0, 3.0]),
        ],
        vec![1.0, 2.0],
    );
    let w = spec.bin_weights().unwrap();

    assert_eq!(spec.bin_count(), 2);
    assert_relative_eq!(w[0], 0.75);
    assert_relative_eq!(w[1], 1.25);
}

#[test]
fn test_total_width() {
    let d = DimensionBins::new("x", vec![0.0, 1.0], vec![1.0, 4.0]);
    assert_relative_eq!(d.total_width(), 4.0);
}

// ============================================================================
// Sampling Tests
// ============================================================================

/// Bins are drawn in proportion to their width.
#[test]
fn test_frequencies_follow_widths() {
    let mut rng = StdRng::seed_from_u64(42);
    let samples = resample_with(&two_bin_spec(), 4000, &mut rng).unwrap();

    assert_eq!(samples.len(), 4000);
    let low = samples.iter().filter(|(l, _)| *l == "low").count() as f64 / 4000.0;
    assert!((low - 0.25).abs() < 0.03, "low fraction {low}");
}

/// Values stay inside the interval of their bin.
#[test]
fn test_values_in_bin_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for (label, values) in resample_with(&two_bin_spec(), 500, &mut rng).unwrap() {
        assert_eq!(values.len(), 1);
        let (lo, hi) = if label == "low" { (0.0, 1.0) } else { (1.0, 4.0) };
        assert!(values[0] >= lo && values[0] <= hi, "{label}: {}", values[0]);
    }
}

/// A zero-width bin still yields its single value when selected through another dimension.
#[test]
fn test_point_bin_in_one_dimension() {
    let spec = ResampleSpec::new(
        vec![
            DimensionBins::new("a", vec![2.0, 0.0], vec![2.0, 1.0]),
            DimensionBins::new("b", vec![0.0, 0.0], vec![1.0, 1.0]),
        ],
        vec![0, 1],
    );
    let mut rng = StdRng::seed_from_u64(3);
    for (label, values) in resample_with(&spec, 200, &mut rng).unwrap() {
        if label == 0 {
            assert_eq!(values[0], 2.0);
        }
    }
}

/// Equal seeds give equal draws.
#[test]
fn test_seeded_reproducibility() {
    let spec = two_bin_spec();
    let a = resample_with(&spec, 50, &mut StdRng::seed_from_u64(11)).unwrap();
    let b = resample_with(&spec, 50, &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_samples() {
    assert!(resample(&two_bin_spec(), 0).unwrap().is_empty());
}

#[test]
fn test_thread_rng_entry_point() {
    let samples = resample(&two_bin_spec(), 10).unwrap();
    assert_eq!(samples.len(), 10);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_no_dimensions() {
    let spec: ResampleSpec<i32> = ResampleSpec::new(vec![], vec![1]);
    assert!(matches!(spec.bin_weights(), Err(RegulusError::InvalidInput(_))));
}

#[test]
fn test_no_bins() {
    let spec: ResampleSpec<i32> =
        ResampleSpec::new(vec![DimensionBins::new("x", vec![], vec![])], vec![]);
    assert!(matches!(spec.bin_weights(), Err(RegulusError::InvalidInput(_))));
}

#[test]
fn test_length_mismatch() {
    let spec = ResampleSpec::new(
        vec![DimensionBins::new("x", vec![0.0], vec![1.0, 2.0])],
        vec![1, 2],
    );
    assert!(matches!(
        resample(&spec, 5),
        Err(RegulusError::InvalidInput(_))
    ));
}

#[test]
fn test_non_finite_bound() {
    let spec = ResampleSpec::new(
        vec![DimensionBins::new("x", vec![0.0], vec![f64::INFINITY])],
        vec![1],
    );
    assert!(matches!(
        spec.bin_weights(),
        Err(RegulusError::InvalidNumericValue(_))
    ));
}

#[test]
fn test_reversed_bin() {
    let spec = ResampleSpec::new(
        vec![DimensionBins::new("x", vec![0.0, 3.0], vec![1.0, 2.0])],
        vec![1, 2],
    );
    assert!(matches!(spec.bin_weights(), Err(RegulusError::InvalidInput(_))));
}

#[test]
fn test_zero_width_dimension() {
    let spec = ResampleSpec::new(
        vec![
            DimensionBins::new("x", vec![0.0], vec![1.0]),
            DimensionBins::new("flat", vec![2.0], vec![2.0]),
        ],
        vec![1],
    );
    assert_eq!(
        spec.bin_weights(),
        Err(RegulusError::ZeroWidthDimension {
            dimension: "flat".to_string()
        })
    );
}
