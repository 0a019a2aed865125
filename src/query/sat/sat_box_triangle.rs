use crate::math::{Real, Vector};
use crate::query::sat::{AxisTestContext, SeparatingAxis};
use crate::shape::{OrientedBox, Triangle};

/// The indices of the vertices lying on each edge of [`Triangle::edges`], followed by
/// the index of the opposite vertex.
const EDGE_VERTICES: [(usize, usize); 3] = [(0, 2), (0, 1), (1, 0)];

/// Tests the 13 candidate separating axes of a box and a triangle.
///
/// Returns `false` as soon as one axis separates the shapes, in which case
/// `ctx.exit_axis` identifies it. Returns `true` if the shapes overlap, in which case
/// `ctx.best_axis` is the axis of minimum (penalized) penetration, or `None` if every
/// axis was degenerate.
///
/// The context is reset before the first test.
pub fn box_triangle_test_separating_axes(
    obb: &OrientedBox,
    triangle: &Triangle,
    ctx: &mut AxisTestContext,
) -> bool {
    ctx.reset();

    let edges = triangle.edges();
    let normal = edges[0].cross(&edges[1]);
    let dpts = triangle.vertices().map(|pt| pt - obb.center);
    let axes = obb.axes();

    let normal_length = normal.norm();
    let inv_normal_length = if normal_length > 0.0 {
        1.0 / normal_length
    } else {
        0.0
    };

    /*
     * Triangle normal.
     */
    if !ctx.test_normal_axis(
        normal.dot(&dpts[0]),
        obb.projected_radius(&normal),
        &normal,
    ) {
        ctx.exit_axis = Some(SeparatingAxis::TriangleNormal);
        return false;
    }

    /*
     * Box faces.
     */
    for (k, box_axis) in axes.iter().enumerate() {
        let axis = SeparatingAxis::BoxFace { axis: k };
        let projections = dpts.map(|dpt| box_axis.dot(&dpt));
        let facing = box_axis.dot(&normal) * inv_normal_length;

        if !ctx.test_face_axis(projections, obb.half_extents[k], facing, box_axis, axis) {
            ctx.exit_axis = Some(axis);
            return false;
        }
    }

    /*
     * Box axes × triangle edges.
     */
    for (k, box_axis) in axes.iter().enumerate() {
        for (j, edge) in edges.iter().enumerate() {
            let axis = SeparatingAxis::EdgeEdge {
                box_axis: k,
                tri_edge: j,
            };
            let dir = box_axis.cross(edge);
            let (on_edge, opposite) = EDGE_VERTICES[j];

            if !ctx.test_edge_axis(
                dir.dot(&dpts[on_edge]),
                dir.dot(&dpts[opposite]),
                obb.projected_radius(&dir),
                edge_axis_facing(&dir, &normal, inv_normal_length),
                &dir,
                axis,
            ) {
                ctx.exit_axis = Some(axis);
                return false;
            }
        }
    }

    true
}

#[inline]
fn edge_axis_facing(dir: &Vector<Real>, normal: &Vector<Real>, inv_normal_length: Real) -> Real {
    let length = dir.norm();

    if length > 0.0 {
        dir.dot(normal) * inv_normal_length / length
    } else {
        0.0
    }
}
