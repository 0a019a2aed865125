//! Non-persistent geometric queries between an oriented box and triangles.
//!
//! The entry point is [`collide_box_vs_triangles`] (or
//! [`collide_box_vs_triangles_with_hooks`] for full control). The building blocks it relies
//! on are exposed as well:
//!
//! * [`sat`] contains the separating-axis test of one box/triangle pair.
//! * [`details`] contains the polygon clipper, the line/line closest points and the
//!   per-triangle manifold builder.
//! * [`ContactBuffer`] is the capacity-bounded contact list that deduplicates contacts as
//!   they are emitted.

pub use self::contact_manifolds::{
    collide_box_vs_triangles, collide_box_vs_triangles_with_hooks, CollisionHooks, Contact,
    ContactBuffer, EmitStatus, GeometryTag, TriangleSource,
};
pub use self::contact_options::{ContactFlags, ContactOptions};

mod clip;
mod closest_points;
mod contact_manifolds;
mod contact_options;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::closest_points::*;
    pub use super::contact_manifolds::box_triangle_clip_manifold;
}
