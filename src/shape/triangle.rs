//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

use na::Unit;

/// A triangle shape, with its vertices expressed in world-space.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<(Point<Real>, Point<Real>, Point<Real>)> for Triangle {
    fn from(pts: (Point<Real>, Point<Real>, Point<Real>)) -> Self {
        Self::new(pts.0, pts.1, pts.2)
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The edge vectors `[e0, e1, e2]` of this triangle.
    ///
    /// They are `e0 = b - a`, `e1 = c - a` and `e2 = e1 - e0 = c - b`.
    /// Note that `e1` does not follow the `a -> b -> c` cycle.
    #[inline]
    pub fn edges(&self) -> [Vector<Real>; 3] {
        let e0 = self.b - self.a;
        let e1 = self.c - self.a;
        [e0, e1, e1 - e0]
    }

    /// The normal of this triangle, not normalized.
    ///
    /// This is `e0 × e1`. Its length is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let [e0, e1, _] = self.edges();
        e0.cross(&e1)
    }

    /// The unit normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// This triangle with its winding (and thus its normal) reversed.
    #[inline]
    pub fn reversed(&self) -> Triangle {
        Triangle::new(self.a, self.c, self.b)
    }

    /// Is this triangle degenerate, i.e., does it have a zero area?
    #[inline]
    pub fn is_degenerate(&self, eps: Real) -> bool {
        self.scaled_normal().norm() <= eps
    }
}
