/*!
boxmesh3d
========

**boxmesh3d** computes contact points between an oriented box and the
triangles of a triangle mesh, for consumption by a rigid-body solver.

The narrow phase runs the Separating Axis Theorem over the 13 candidate axes
of a box/triangle pair, keeps the axis of minimum penetration, and turns it
into a contact manifold by clipping (triangle face or box face as the
reference) or by an edge-edge closest-point computation. Contacts are merged
into a capacity-bounded [`ContactBuffer`](query::ContactBuffer).

```
# #[cfg(feature = "f32")] {
use boxmesh3d::math::{Matrix, Point, Vector};
use boxmesh3d::query::collide_box_vs_triangles;
use boxmesh3d::shape::{OrientedBox, Triangle};

let obb = OrientedBox::new(Point::origin(), Vector::repeat(0.5), Matrix::identity());
let ground = Triangle::new(
    Point::new(-10.0, -0.4, 10.0),
    Point::new(10.0, -0.4, 10.0),
    Point::new(0.0, -0.4, -10.0),
);

let contacts = collide_box_vs_triangles(&obb, &|_: u32| ground, &[0], 4);
assert!(!contacts.is_empty());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![deny(unused_qualifications)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
