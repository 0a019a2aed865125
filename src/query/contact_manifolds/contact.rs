use crate::math::{Point, Real, Vector};
use na::ComplexField;

/// An opaque handle identifying one of the two geometries involved in a contact.
///
/// The collision pipeline never interprets it: it is copied as-is into every
/// contact so the caller can map contacts back to its own objects.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryTag(pub u64);

/// A contact point between a box and a triangle.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// The world-space position of the contact.
    pub position: Point<Real>,
    /// The unit contact normal, pointing from the triangle (second geometry)
    /// toward the box (first geometry).
    pub normal: Vector<Real>,
    /// The penetration depth along `normal`. Never negative.
    pub depth: Real,
    /// The tag of the first geometry (the box).
    pub geom1: GeometryTag,
    /// The tag of the second geometry (the triangle mesh).
    pub geom2: GeometryTag,
    /// The index of the mesh triangle that generated this contact.
    pub triangle_index: u32,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        position: Point<Real>,
        normal: Vector<Real>,
        depth: Real,
        geom1: GeometryTag,
        geom2: GeometryTag,
        triangle_index: u32,
    ) -> Self {
        Self {
            position,
            normal,
            depth,
            geom1,
            geom2,
            triangle_index,
        }
    }

    /// Is `other` close enough to this contact, with a parallel enough normal,
    /// to be considered the same contact?
    #[inline]
    pub fn is_duplicate_of(
        &self,
        other: &Contact,
        merge_distance_squared: Real,
        merge_normal_tolerance: Real,
    ) -> bool {
        na::distance_squared(&self.position, &other.position) < merge_distance_squared
            && ComplexField::abs(self.normal.dot(&other.normal)) > 1.0 - merge_normal_tolerance
    }
}
