//! Definition of the oriented box shape.

use crate::math::{Isometry, Matrix, Point, Real, Vector, DIM};
use na::ComplexField;

/// Tolerance used when checking that a box rotation is orthonormal.
const ORTHONORMALITY_TOLERANCE: Real = 1.0e-4;

/// Error returned when an [`OrientedBox`] cannot be built from its parts.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum OrientedBoxError {
    /// One of the half-extents is zero, negative, or not finite.
    #[error("the half-extent {value} along the box axis {axis} must be finite and strictly positive.")]
    InvalidHalfExtent {
        /// The index of the offending axis.
        axis: usize,
        /// The offending half-extent.
        value: Real,
    },
    /// The rotation matrix columns do not form an orthonormal basis.
    #[error("the box rotation matrix is not orthonormal.")]
    NonOrthonormalRotation,
}

/// A box with an arbitrary position and orientation in world-space.
///
/// The columns of `rotation` are the local axes of the box expressed in
/// world-space; `half_extents[i]` is the half-width of the box along
/// its `i`-th local axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedBox {
    /// The world-space center of the box.
    pub center: Point<Real>,
    /// The half-extents of the box along each of its local axes.
    pub half_extents: Vector<Real>,
    /// The orthonormal matrix whose columns are the local axes of the box.
    pub rotation: Matrix<Real>,
}

impl OrientedBox {
    /// Creates a new box without checking the validity of its parts.
    ///
    /// Each half-extent must be positive and `rotation` must be orthonormal.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation: Matrix<Real>) -> Self {
        Self {
            center,
            half_extents,
            rotation,
        }
    }

    /// Creates a new box, checking that its half-extents are positive and its
    /// rotation is orthonormal.
    pub fn try_new(
        center: Point<Real>,
        half_extents: Vector<Real>,
        rotation: Matrix<Real>,
    ) -> Result<Self, OrientedBoxError> {
        for (axis, value) in half_extents.iter().copied().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(OrientedBoxError::InvalidHalfExtent { axis, value });
            }
        }

        let gram = rotation.transpose() * rotation;
        if !relative_eq!(
            gram,
            Matrix::identity(),
            epsilon = ORTHONORMALITY_TOLERANCE
        ) {
            return Err(OrientedBoxError::NonOrthonormalRotation);
        }

        Ok(Self::new(center, half_extents, rotation))
    }

    /// Creates a box with the given half-extents placed at the given pose.
    #[inline]
    pub fn from_isometry(pos: &Isometry<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(
            Point::from(pos.translation.vector),
            half_extents,
            pos.rotation.to_rotation_matrix().into_inner(),
        )
    }

    /// The `i`-th local axis of this box, in world-space.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.rotation.column(i).into_owned()
    }

    /// The three local axes of this box, in world-space.
    #[inline]
    pub fn axes(&self) -> [Vector<Real>; DIM] {
        [self.axis(0), self.axis(1), self.axis(2)]
    }

    /// Expresses a world-space point in the local frame of this box.
    #[inline]
    pub fn local_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation.tr_mul(&(pt - self.center)))
    }

    /// Expresses a world-space vector in the local frame of this box.
    #[inline]
    pub fn local_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.tr_mul(v)
    }

    /// Maps a point from the local frame of this box to world-space.
    #[inline]
    pub fn world_point(&self, local_pt: &Point<Real>) -> Point<Real> {
        self.center + self.rotation * local_pt.coords
    }

    /// Half of the length of the projection of this box on `dir`, scaled by `|dir|`.
    #[inline]
    pub fn projected_radius(&self, dir: &Vector<Real>) -> Real {
        self.half_extents.x * ComplexField::abs(self.axis(0).dot(dir))
            + self.half_extents.y * ComplexField::abs(self.axis(1).dot(dir))
            + self.half_extents.z * ComplexField::abs(self.axis(2).dot(dir))
    }

    /// The vertex of this box that is the furthest along `dir`.
    #[inline]
    pub fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.local_vector(dir);
        let mut pt = self.center;

        for i in 0..DIM {
            let sign = if local_dir[i] < 0.0 { -1.0 } else { 1.0 };
            pt += self.axis(i) * (self.half_extents[i] * sign);
        }

        pt
    }

    /// The eight vertices of this box.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let mut res = [self.center; 8];

        for (vid, pt) in res.iter_mut().enumerate() {
            let mut local = self.half_extents;

            for i in 0..DIM {
                if vid & (1 << i) != 0 {
                    local[i] = -local[i];
                }
            }

            *pt = self.world_point(&Point::from(local));
        }

        res
    }
}
