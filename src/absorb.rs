/// Trait for k-means centroid computation via incremental aggregation.
///
/// The "absorb" pattern generalizes mean computation: we can incrementally
/// combine samples without tracking the count externally. Each value carries
/// its own weight, so folding a set of points produces their weighted mean
/// in a single pass.
///
/// # Required Methods
///
/// - `identity()` — Returns the neutral element for absorption
/// - `absorb()` — Combines two values into one (associative, commutative)
///
/// # Invariant
///
/// After absorbing N unit-weight points, the result is the arithmetic mean
/// of those points.
pub trait Absorb {
    /// Returns the identity element (zero vector, zero weight).
    fn identity(&self) -> Self;
    /// Combines this value with another, producing a merged result.
    fn absorb(self, other: &Self) -> Self;
}
