use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;

/// The maximum number of vertices a clipped polygon can hold.
pub const MAX_CLIP_VERTICES: usize = 9;

/// A convex polygon stored inline, as produced by [`clip_polygon_to_plane`].
pub type ClipPolygon = ArrayVec<Point<Real>, MAX_CLIP_VERTICES>;

/// A plane used for clipping.
///
/// A point `pt` is kept by the clipping if its signed distance
/// `normal.dot(pt) + bias` is non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipPlane {
    /// The normal of the plane, pointing toward the kept half-space.
    pub normal: Vector<Real>,
    /// The offset of the plane.
    pub bias: Real,
}

impl ClipPlane {
    /// Creates a clipping plane from its normal and offset.
    #[inline]
    pub fn new(normal: Vector<Real>, bias: Real) -> Self {
        Self { normal, bias }
    }

    /// The clipping plane with the given normal passing through `pt`.
    #[inline]
    pub fn through_point(normal: Vector<Real>, pt: &Point<Real>) -> Self {
        Self::new(normal, -normal.dot(&pt.coords))
    }

    /// The signed distance between `pt` and this plane, scaled by the normal length.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.bias
    }
}

/// Cuts a convex polygon with the given plane.
///
/// This is one step of the Sutherland–Hodgman algorithm: `result` is overwritten
/// with the part of `polygon` lying on the positive side of `plane`, in the same
/// winding order. The polygon is processed cyclically so its last edge joins its
/// last vertex to its first one.
///
/// An empty result is valid and means the polygon lies entirely on the negative
/// side. Vertices that would not fit in `result` are dropped.
pub fn clip_polygon_to_plane(polygon: &[Point<Real>], plane: &ClipPlane, result: &mut ClipPolygon) {
    result.clear();

    for (i, prev_pt) in polygon.iter().enumerate() {
        let pt = &polygon[(i + 1) % polygon.len()];
        let prev_dist = plane.signed_distance(prev_pt);
        let dist = plane.signed_distance(pt);

        if prev_dist >= 0.0 {
            push_clipped_vertex(result, *prev_pt);
        }

        if (prev_dist > 0.0 && dist < 0.0) || (prev_dist < 0.0 && dist > 0.0) {
            // We crossed the plane, so we need
            // to cut the edge.
            let toi = prev_dist / (prev_dist - dist);
            push_clipped_vertex(result, prev_pt + (pt - prev_pt) * toi);
        }
    }
}

/// Cuts a convex polygon successively with each of the given planes.
///
/// The result is left in `result`; `workspace` is scratch space.
pub fn clip_polygon_to_planes(
    polygon: &[Point<Real>],
    planes: &[ClipPlane],
    result: &mut ClipPolygon,
    workspace: &mut ClipPolygon,
) {
    result.clear();
    for pt in polygon.iter().take(MAX_CLIP_VERTICES) {
        result.push(*pt);
    }

    for plane in planes {
        clip_polygon_to_plane(result, plane, workspace);
        core::mem::swap(result, workspace);

        if result.is_empty() {
            break;
        }
    }
}

#[inline]
fn push_clipped_vertex(result: &mut ClipPolygon, pt: Point<Real>) {
    if result.try_push(pt).is_err() {
        log::debug!("Polygon clipping overflowed its {MAX_CLIP_VERTICES} vertices capacity; dropping a vertex.");
    }
}
