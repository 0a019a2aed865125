use crate::math::Real;

/// Sorts a pair of values in increasing order.
#[inline]
pub fn sort2(a: Real, b: Real) -> (Real, Real) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Sorts a set of three values in increasing order.
#[inline]
pub fn sort3(a: Real, b: Real, c: Real) -> (Real, Real, Real) {
    let (lo, hi) = sort2(a, b);

    if c < lo {
        (c, lo, hi)
    } else if c > hi {
        (lo, hi, c)
    } else {
        (lo, c, hi)
    }
}

/// The extremal values of the projection of a set of points on an axis.
///
/// Returns `(min, max)`.
#[inline]
pub fn projected_interval3(projections: [Real; 3]) -> (Real, Real) {
    let (min, _, max) = sort3(projections[0], projections[1], projections[2]);
    (min, max)
}
