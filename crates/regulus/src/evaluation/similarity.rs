//! Cosine similarity between coefficient vectors.
//!
//! Used to compare a partition's linear model with its parent's or a
//! sibling's. A zero-norm vector has no direction and scores 0.

// External dependencies
use num_traits::Float;

/// Cosine of the angle between `a` and `b` (over their common prefix).
pub fn cosine_similarity<T: Float>(a: &[T], b: &[T]) -> T {
    let (dot, na, nb) = a
        .iter()
        .zip(b.iter())
        .fold((T::zero(), T::zero(), T::zero()), |(d, na, nb), (&x, &y)| {
            (d + x * y, na + x * x, nb + y * y)
        });

    if na == T::zero() || nb == T::zero() {
        return T::zero();
    }
    dot / (na.sqrt() * nb.sqrt())
}
