//! Application of the Separating Axis Theorem (SAT) to a box/triangle pair.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For an oriented box and a triangle, it is sufficient
//! to test 13 candidate axes:
//!
//! 1. the triangle normal,
//! 2. to 4. the three face normals (local axes) of the box,
//! 5. to 13. the nine cross products between a box axis and a triangle edge.
//!
//! The axes are always tested in that order, so that the numeric code reported by
//! [`SeparatingAxis::index`] is reproducible. The first axis that separates the shapes stops
//! the search. If none does, the axis with the smallest penetration depth (edge-edge depths
//! being penalized, see [`ContactOptions::edge_axis_penalty`]) is kept to generate contacts.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use boxmesh3d::math::{Matrix, Point, Vector};
//! use boxmesh3d::query::sat::{box_triangle_test_separating_axes, AxisTestContext, SeparatingAxis};
//! use boxmesh3d::query::ContactOptions;
//! use boxmesh3d::shape::{OrientedBox, Triangle};
//!
//! let obb = OrientedBox::new(Point::new(0.0, 10.0, 0.0), Vector::repeat(0.5), Matrix::identity());
//! let triangle = Triangle::new(
//!     Point::new(-10.0, -0.4, 10.0),
//!     Point::new(10.0, -0.4, 10.0),
//!     Point::new(0.0, -0.4, -10.0),
//! );
//!
//! let mut ctx = AxisTestContext::new(&ContactOptions::default());
//! assert!(!box_triangle_test_separating_axes(&obb, &triangle, &mut ctx));
//! assert_eq!(ctx.exit_axis, Some(SeparatingAxis::TriangleNormal));
//! # }
//! ```
//!
//! [`ContactOptions::edge_axis_penalty`]: crate::query::ContactOptions::edge_axis_penalty

pub use self::axis_test::AxisTestContext;
pub use self::sat_box_triangle::box_triangle_test_separating_axes;
pub use self::separating_axis::SeparatingAxis;

mod sat_box_triangle;
mod separating_axis;
