use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

/// Parameters locating the closest points between two lines.
///
/// The closest points are `orig1 + dir1 * param1` and `orig2 + dir2 * param2`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineLineParameters {
    /// The parameter of the closest point along the first line.
    pub param1: Real,
    /// The parameter of the closest point along the second line.
    pub param2: Real,
    /// `true` if the lines were found to be parallel (or degenerate).
    ///
    /// In that case there is no unique pair of closest points: `param1` is zero
    /// and `param2` locates the projection of `orig1` on the second line.
    pub parallel: bool,
}

/// Closest points between two lines.
#[inline]
pub fn closest_points_line_line_parameters(
    orig1: &Point<Real>,
    dir1: &Vector<Real>,
    orig2: &Point<Real>,
    dir2: &Vector<Real>,
) -> LineLineParameters {
    closest_points_line_line_parameters_eps(orig1, dir1, orig2, dir2, DEFAULT_EPSILON)
}

/// Closest points between two lines with a custom tolerance epsilon.
///
/// The directions do not need to be normalized. A direction with a squared
/// length smaller than `eps` is treated as a single point.
#[inline]
pub fn closest_points_line_line_parameters_eps(
    orig1: &Point<Real>,
    dir1: &Vector<Real>,
    orig2: &Point<Real>,
    dir2: &Vector<Real>,
    eps: Real,
) -> LineLineParameters {
    // Inspired by Real-time collision detection by Christer Ericson.
    let r = orig1 - orig2;

    let a = dir1.norm_squared();
    let e = dir2.norm_squared();
    let f = dir2.dot(&r);

    let (param1, param2, parallel) = if a <= eps && e <= eps {
        (0.0, 0.0, true)
    } else if a <= eps {
        (0.0, f / e, true)
    } else {
        let c = dir1.dot(&r);
        if e <= eps {
            (-c / a, 0.0, true)
        } else {
            let b = dir1.dot(dir2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            let parallel = denom <= eps || ulps_eq!(ae, bb);

            let s = if !parallel {
                (b * f - c * e) / denom
            } else {
                0.0
            };

            (s, (b * s + f) / e, parallel)
        }
    };

    LineLineParameters {
        param1,
        param2,
        parallel,
    }
}

/// Closest points between two lines.
#[inline]
pub fn closest_points_line_line(
    orig1: &Point<Real>,
    dir1: &Vector<Real>,
    orig2: &Point<Real>,
    dir2: &Vector<Real>,
) -> (Point<Real>, Point<Real>) {
    let params = closest_points_line_line_parameters(orig1, dir1, orig2, dir2);
    (
        *orig1 + *dir1 * params.param1,
        *orig2 + *dir2 * params.param2,
    )
}
