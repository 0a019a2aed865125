use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::clip::{clip_polygon_to_planes, ClipPlane, ClipPolygon};
use crate::query::closest_points::closest_points_line_line_parameters;
use crate::query::contact_manifolds::ContactBuffer;
use crate::query::sat::{AxisTestContext, SeparatingAxis};
use crate::query::ContactOptions;
use crate::shape::{OrientedBox, Triangle};

/// Generates the contacts between a box and a triangle, given the result of their
/// separating axis test.
///
/// `ctx` must come from a call to
/// [`box_triangle_test_separating_axes`](crate::query::sat::box_triangle_test_separating_axes)
/// that found the shapes overlapping. The contacts are emitted into `buffer` and tagged with
/// `triangle_index`. Returns the number of candidate contacts generated, including those
/// merged into existing contacts or dropped because `buffer` is full.
pub fn box_triangle_clip_manifold(
    obb: &OrientedBox,
    triangle: &Triangle,
    ctx: &AxisTestContext,
    triangle_index: u32,
    options: &ContactOptions,
    buffer: &mut ContactBuffer,
) -> usize {
    let Some(best_axis) = ctx.best_axis else {
        return 0;
    };

    match best_axis {
        SeparatingAxis::TriangleNormal => {
            clip_box_face_against_triangle(obb, triangle, ctx, triangle_index, options, buffer)
        }
        SeparatingAxis::BoxFace { axis } => {
            clip_triangle_against_box_face(obb, triangle, axis, ctx, triangle_index, options, buffer)
        }
        SeparatingAxis::EdgeEdge { box_axis, tri_edge } => edge_edge_contact(
            obb,
            triangle,
            box_axis,
            tri_edge,
            ctx,
            triangle_index,
            options,
            buffer,
        ),
    }
}

/// The triangle face is the reference: the box face most aligned with the triangle normal
/// is clipped by the prism extruded from the triangle below its plane.
fn clip_box_face_against_triangle(
    obb: &OrientedBox,
    triangle: &Triangle,
    ctx: &AxisTestContext,
    triangle_index: u32,
    options: &ContactOptions,
    buffer: &mut ContactBuffer,
) -> usize {
    let normal = ctx.best_normal;
    let local_normal = obb.local_vector(&normal);
    let k = local_normal.iamax();
    let k1 = (k + 1) % 3;
    let k2 = (k + 2) % 3;

    // The normal points toward the box so the incident face is on its opposite side.
    let sign = if local_normal[k] < 0.0 { -1.0 } else { 1.0 };
    let face_center =
        obb.center - obb.axis(k) * (obb.half_extents[k] * sign) - triangle.a.coords;
    let u = obb.axis(k1) * obb.half_extents[k1];
    let v = obb.axis(k2) * obb.half_extents[k2];

    // Everything is expressed relative to the first triangle vertex.
    let face = [
        Point::from(face_center.coords + u - v),
        Point::from(face_center.coords - u - v),
        Point::from(face_center.coords - u + v),
        Point::from(face_center.coords + u + v),
    ];

    let ab = triangle.b - triangle.a;
    let bc = triangle.c - triangle.b;
    let ca = triangle.a - triangle.c;
    let planes = [
        ClipPlane::new(-normal, 0.0),
        ClipPlane::new(normal.cross(&ab), 0.0),
        ClipPlane::through_point(normal.cross(&bc), &Point::from(ab)),
        ClipPlane::new(normal.cross(&ca), 0.0),
    ];

    let mut clipped = ClipPolygon::new();
    let mut workspace = ClipPolygon::new();
    clip_polygon_to_planes(&face, &planes, &mut clipped, &mut workspace);

    for pt in &clipped {
        let depth = -normal.dot(&pt.coords);
        let _ = buffer.emit_contact(
            pt + triangle.a.coords,
            normal,
            depth,
            triangle_index,
            options,
        );
    }

    clipped.len()
}

/// A box face is the reference: the triangle is clipped, in the local frame of the
/// box, by the slab of the reference face.
fn clip_triangle_against_box_face(
    obb: &OrientedBox,
    triangle: &Triangle,
    axis: usize,
    ctx: &AxisTestContext,
    triangle_index: u32,
    options: &ContactOptions,
    buffer: &mut ContactBuffer,
) -> usize {
    let normal = ctx.best_normal;
    let local_normal = obb.local_vector(&normal);
    // The reference face is the one facing the triangle.
    let face_sign = if local_normal[axis] < 0.0 { 1.0 } else { -1.0 };
    let half_extents = obb.half_extents;
    let axis1 = (axis + 1) % 3;
    let axis2 = (axis + 2) % 3;

    let local_triangle = triangle.vertices().map(|pt| obb.local_point(&pt));
    let planes = [
        ClipPlane::new(Vector::ith(axis, -face_sign), half_extents[axis]),
        ClipPlane::new(Vector::ith(axis1, 1.0), half_extents[axis1]),
        ClipPlane::new(Vector::ith(axis1, -1.0), half_extents[axis1]),
        ClipPlane::new(Vector::ith(axis2, 1.0), half_extents[axis2]),
        ClipPlane::new(Vector::ith(axis2, -1.0), half_extents[axis2]),
    ];

    let mut clipped = ClipPolygon::new();
    let mut workspace = ClipPolygon::new();
    clip_polygon_to_planes(&local_triangle, &planes, &mut clipped, &mut workspace);

    for pt in &clipped {
        let depth = half_extents[axis] - face_sign * pt[axis];
        let _ = buffer.emit_contact(
            obb.world_point(pt),
            normal,
            depth,
            triangle_index,
            options,
        );
    }

    clipped.len()
}

/// A box edge crosses a triangle edge: a single contact is generated halfway between
/// the closest points of both edge lines.
fn edge_edge_contact(
    obb: &OrientedBox,
    triangle: &Triangle,
    box_axis: usize,
    tri_edge: usize,
    ctx: &AxisTestContext,
    triangle_index: u32,
    options: &ContactOptions,
    buffer: &mut ContactBuffer,
) -> usize {
    let normal = ctx.best_normal;
    let local_normal = obb.local_vector(&normal);

    // The box corner the closest to the triangle.
    let mut corner = obb.center;
    for i in 0..3 {
        let sign = if local_normal[i] < 0.0 { 1.0 } else { -1.0 };
        corner += obb.axis(i) * (obb.half_extents[i] * sign);
    }

    let box_dir = obb.axis(box_axis);
    let (tri_orig, tri_edge_vec) = triangle_edge_line(triangle, tri_edge);
    let Some(tri_dir) = tri_edge_vec.try_normalize(DEFAULT_EPSILON) else {
        return 0;
    };

    let params = closest_points_line_line_parameters(&corner, &box_dir, &tri_orig, &tri_dir);

    if params.parallel {
        log::debug!(
            "Parallel edges between the box axis {box_axis} and the edge {tri_edge} of the triangle {triangle_index}."
        );
    }

    let pt1 = corner + box_dir * params.param1;
    let pt2 = tri_orig + tri_dir * params.param2;
    let _ = buffer.emit_contact(
        na::center(&pt1, &pt2),
        normal,
        ctx.best_depth,
        triangle_index,
        options,
    );

    1
}

/// A point and the direction of the line supporting the `i`-th edge of
/// [`Triangle::edges`].
#[inline]
fn triangle_edge_line(triangle: &Triangle, i: usize) -> (Point<Real>, Vector<Real>) {
    match i {
        0 => (triangle.a, triangle.b - triangle.a),
        1 => (triangle.c, triangle.c - triangle.a),
        _ => (triangle.b, triangle.c - triangle.b),
    }
}
