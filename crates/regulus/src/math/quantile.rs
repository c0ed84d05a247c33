//! Sample quantiles with linear interpolation.
//!
//! Implements the "type 7" definition (the default of R and d3): for sorted
//! values `x[0..n]` and probability `p`, let `h = (n - 1) p`; the quantile is
//! `x[floor(h)] + (h - floor(h)) (x[floor(h) + 1] - x[floor(h)])`.

// External dependencies
use num_traits::Float;

/// Quantile of ascending-sorted `sorted` at probability `p`.
///
/// Returns `None` for empty input. `p` is clamped to [0, 1].
pub fn quantile_sorted<T: Float>(sorted: &[T], p: T) -> Option<T> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let p = p.max(T::zero()).min(T::one());
    let h = T::from(n - 1)? * p;
    let lo = h.floor();
    let i = lo.to_usize()?;
    if i + 1 >= n {
        return Some(sorted[n - 1]);
    }

    let frac = h - lo;
    Some(sorted[i] + frac * (sorted[i + 1] - sorted[i]))
}

/// Quantiles of ascending-sorted `sorted` at each probability in `probs`.
pub fn quantiles_sorted<T: Float>(sorted: &[T], probs: &[T]) -> Option<Vec<T>> {
    probs.iter().map(|&p| quantile_sorted(sorted, p)).collect()
}
