//! Contact generation between an oriented box and triangles.
//!
//! A box/triangle pair is first tested with the [separating axis test](crate::query::sat).
//! If the shapes overlap, the axis of minimum penetration decides how contacts are built:
//!
//! - **Triangle normal**: the box face the most aligned with the triangle normal is clipped
//!   against the triangle, generating up to 8 contacts.
//! - **Box face**: the triangle is clipped against the side planes of the box face.
//! - **Edge-edge**: a single contact is generated halfway between the closest points of a box
//!   edge and a triangle edge.
//!
//! All contacts end up in a [`ContactBuffer`] which merges near-duplicates and never grows
//! past its capacity.

pub use self::collide_box_triangles::{
    collide_box_vs_triangles, collide_box_vs_triangles_with_hooks, CollisionHooks, TriangleSource,
};
pub use self::contact::{Contact, GeometryTag};
pub use self::contact_buffer::{ContactBuffer, EmitStatus};
pub use self::contact_manifolds_box_triangle::box_triangle_clip_manifold;

mod collide_box_triangles;
mod contact;
mod contact_buffer;
mod contact_manifolds_box_triangle;
