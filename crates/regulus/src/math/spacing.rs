//! Query point spacing for regression curves.
//!
//! ## Purpose
//!
//! This module generates the monotone sequences of measure values at which
//! regression curves are sampled.
//!
//! ## Key concepts
//!
//! * **Linear space**: `n` evenly spaced values including both endpoints.
//! * **Sub-linear space**: Concentrates samples on an inner range (the
//!   partition's own measure range) and thins them out toward an outer range
//!   (the dataset-wide extent).
//!
//! ### Sub-linear allocation
//!
//! With the outer range split into `below | within | above` and each segment
//! expressed as a fraction `f` of the whole, the segments receive points in
//! proportion to `sqrt(f_within)`, `f_below` and `f_above`. Since
//! `sqrt(f) >= f` on [0, 1], the inner range is always over-sampled relative
//! to a uniform linspace. Inside the outer segments the spacing grows
//! quadratically with the distance from the inner range.
//!
//! ## Invariants
//!
//! * Output length equals the requested count.
//! * Output is non-decreasing; strictly increasing whenever the ranges have width.
//! * With two or more points, the outer bounds are hit exactly.
//! * The inner bounds are hit too once there are enough points for every
//!   distinct bound (at most four).

// External dependencies
use num_traits::Float;

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let steps = T::from(n - 1).unwrap_or_else(T::one);
            let step = (end - start) / steps;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + step * T::from(i).unwrap_or_else(T::zero)
                    }
                })
                .collect()
        }
    }
}

/// `n` values over `outer`, concentrated on `inner`.
///
/// `inner` is reordered if reversed, and `outer` is widened to contain it.
pub fn sub_linear_space<T: Float>(inner: (T, T), outer: (T, T), n: usize) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }

    let (lo_in, hi_in) = if inner.0 <= inner.1 {
        inner
    } else {
        (inner.1, inner.0)
    };
    let lo_out = outer.0.min(lo_in);
    let hi_out = outer.1.max(hi_in);

    let below = lo_in - lo_out;
    let within = hi_in - lo_in;
    let above = hi_out - hi_in;
    let total = below + within + above;

    if n == 1 {
        let two = T::one() + T::one();
        return vec![lo_in + within / two];
    }
    if total.is_nan() || total <= T::zero() {
        return vec![lo_in; n];
    }

    // Outer segments with width keep their bound, the inner range its endpoints
    let min_below = usize::from(below > T::zero());
    let min_above = usize::from(above > T::zero());
    let min_inner = if within > T::zero() { 2 } else { 1 };
    let reserved = min_below + min_inner + min_above;

    if n < reserved {
        // Too few points for every bound: the extent wins, then the inner range
        let mut out = Vec::with_capacity(n);
        out.push(lo_out);
        for v in [lo_in, hi_in] {
            let fresh = v > lo_out && v < hi_out && out.last().is_some_and(|&last| v > last);
            if fresh && out.len() + 1 < n {
                out.push(v);
            }
        }
        out.push(hi_out);
        return out;
    }

    let shares = [(within / total).sqrt(), below / total, above / total];
    let extra = allocate(n - reserved, &shares);

    let k_in = min_inner + extra[0];
    let k_below = min_below + extra[1];
    let k_above = min_above + extra[2];

    let mut out = Vec::with_capacity(n);

    // Below: farthest first, spacing shrinking toward lo_in
    for j in (1..=k_below).rev() {
        if j == k_below {
            out.push(lo_out);
        } else {
            let t = T::from(j).unwrap_or_else(T::zero) / T::from(k_below).unwrap_or_else(T::one);
            out.push(lo_in - below * t * t);
        }
    }

    out.extend(linspace(lo_in, hi_in, k_in));

    // Above: nearest first, spacing growing toward hi_out
    for j in 1..=k_above {
        if j == k_above {
            out.push(hi_out);
        } else {
            let t = T::from(j).unwrap_or_else(T::zero) / T::from(k_above).unwrap_or_else(T::one);
            out.push(hi_in + above * t * t);
        }
    }

    out
}

/// Split `m` items over `shares` by largest remainder.
fn allocate<T: Float>(m: usize, shares: &[T; 3]) -> [usize; 3] {
    let mut counts = [0usize; 3];
    let sum = shares[0] + shares[1] + shares[2];
    if m == 0 || sum <= T::zero() {
        counts[0] = m;
        return counts;
    }

    let m_t = T::from(m).unwrap_or_else(T::zero);
    let mut remainders = [(0usize, T::zero()); 3];
    let mut assigned = 0;
    for (i, &share) in shares.iter().enumerate() {
        let raw = m_t * share / sum;
        let floor = raw.floor();
        counts[i] = floor.to_usize().unwrap_or(0);
        assigned += counts[i];
        remainders[i] = (i, raw - floor);
    }

    // Ties go to the earlier segment (inner first)
    remainders.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(core::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    let mut r = 0;
    while assigned < m {
        let (i, _) = remainders[r % 3];
        if shares[i] > T::zero() {
            counts[i] += 1;
            assigned += 1;
        }
        r += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_preserves_total() {
        let counts = allocate(97, &[0.5_f64, 0.2, 0.3]);
        assert_eq!(counts.iter().sum::<usize>(), 97);
    }

    #[test]
    fn allocate_skips_empty_segments() {
        let counts = allocate(10, &[1.0_f64, 0.0, 0.0]);
        assert_eq!(counts, [10, 0, 0]);
    }
}
