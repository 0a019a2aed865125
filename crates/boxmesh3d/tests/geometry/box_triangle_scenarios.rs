use approx::assert_relative_eq;
use boxmesh3d::math::{Matrix, Point, Real, Rotation, Vector};
use boxmesh3d::query::sat::{box_triangle_test_separating_axes, AxisTestContext, SeparatingAxis};
use boxmesh3d::query::{collide_box_vs_triangles, ContactOptions};
use boxmesh3d::shape::{OrientedBox, Triangle};

fn ground() -> Triangle {
    Triangle::new(
        Point::new(-10.0, -0.4, 10.0),
        Point::new(10.0, -0.4, 10.0),
        Point::new(0.0, -0.4, -10.0),
    )
}

fn unit_box_at(center: Point<Real>) -> OrientedBox {
    OrientedBox::new(center, Vector::repeat(0.5), Matrix::identity())
}

#[test]
fn box_resting_on_large_triangle() {
    let obb = unit_box_at(Point::origin());
    let contacts = collide_box_vs_triangles(&obb, &|_: u32| ground(), &[0], 4);

    assert!(!contacts.is_empty());
    assert!(contacts.len() <= 4);

    for contact in &contacts {
        assert!(contact.position.y >= -0.5 - 1.0e-4);
        assert!(contact.position.y <= -0.4 + 1.0e-4);
        assert_relative_eq!(contact.depth, 0.1, epsilon = 1.0e-4);
        assert_relative_eq!(contact.normal, Vector::y(), epsilon = 1.0e-4);
        assert_eq!(contact.triangle_index, 0);
    }
}

#[test]
fn box_resting_on_large_triangle_single_contact() {
    let obb = unit_box_at(Point::origin());
    let contacts = collide_box_vs_triangles(&obb, &|_: u32| ground(), &[0], 1);

    assert_eq!(contacts.len(), 1);
    assert_relative_eq!(contacts[0].depth, 0.1, epsilon = 1.0e-4);
}

#[test]
fn box_resting_on_large_triangle_unbounded_capacity() {
    let obb = unit_box_at(Point::origin());
    let contacts = collide_box_vs_triangles(&obb, &|_: u32| ground(), &[0], usize::MAX);

    assert_eq!(contacts.capacity(), usize::MAX);
    assert!(!contacts.is_empty());
    assert!(contacts.len() <= 8);
    for contact in &contacts {
        assert_relative_eq!(contact.depth, 0.1, epsilon = 1.0e-4);
    }
}

#[test]
fn box_far_above_triangle() {
    let obb = unit_box_at(Point::new(0.0, 10.0, 0.0));
    let contacts = collide_box_vs_triangles(&obb, &|_: u32| ground(), &[0], 4);
    assert!(contacts.is_empty());

    let mut ctx = AxisTestContext::new(&ContactOptions::default());
    assert!(!box_triangle_test_separating_axes(&obb, &ground(), &mut ctx));
    assert_eq!(ctx.exit_axis, Some(SeparatingAxis::TriangleNormal));
    assert_eq!(ctx.exit_axis.map(SeparatingAxis::index), Some(1));
}

#[test]
fn box_edge_grazing_triangle_edge() {
    // A box rotated by 45 degrees around z stands on its lowest edge, which sinks
    // by `depth` below the top edge of a vertical triangle.
    let depth = 0.05;
    let angle = core::f32::consts::FRAC_PI_4;
    let rotation = Rotation::from_axis_angle(&Vector::z_axis(), angle);
    let obb = OrientedBox::new(
        Point::new(0.0, 0.5 * core::f32::consts::SQRT_2, 0.0),
        Vector::repeat(0.5),
        rotation.to_rotation_matrix().into_inner(),
    );
    let triangle = Triangle::new(
        Point::new(-1.0, depth, 0.0),
        Point::new(1.0, depth, 0.0),
        Point::new(0.0, -2.0, 0.0),
    );

    let mut ctx = AxisTestContext::new(&ContactOptions::default());
    assert!(box_triangle_test_separating_axes(&obb, &triangle, &mut ctx));
    assert_eq!(
        ctx.best_axis,
        Some(SeparatingAxis::EdgeEdge {
            box_axis: 2,
            tri_edge: 0
        })
    );

    let contacts = collide_box_vs_triangles(&obb, &|_: u32| triangle, &[7], 4);
    assert_eq!(contacts.len(), 1);

    let contact = contacts[0];
    assert_relative_eq!(
        contact.position,
        Point::new(0.0, depth / 2.0, 0.0),
        epsilon = 1.0e-4
    );
    assert_relative_eq!(contact.depth, depth, epsilon = 1.0e-4);
    assert_relative_eq!(contact.normal, Vector::y(), epsilon = 1.0e-4);
    assert_eq!(contact.triangle_index, 7);
}

#[test]
fn box_edge_grazing_each_triangle_edge() {
    let depth = 0.05;
    let angle = core::f32::consts::FRAC_PI_4;
    let rotation = Rotation::from_axis_angle(&Vector::z_axis(), angle);
    let obb = OrientedBox::new(
        Point::new(0.0, 0.5 * core::f32::consts::SQRT_2, 0.0),
        Vector::repeat(0.5),
        rotation.to_rotation_matrix().into_inner(),
    );
    let left = Point::new(-1.0, depth, 0.0);
    let right = Point::new(1.0, depth, 0.0);
    let bottom = Point::new(0.0, -2.0, 0.0);
    // The top edge of the triangle is its edge 0, 1, then 2.
    let triangles = [
        Triangle::new(left, right, bottom),
        Triangle::new(left, bottom, right),
        Triangle::new(bottom, left, right),
    ];

    for (tri_edge, triangle) in triangles.into_iter().enumerate() {
        let mut ctx = AxisTestContext::new(&ContactOptions::default());
        assert!(box_triangle_test_separating_axes(&obb, &triangle, &mut ctx));
        assert_eq!(
            ctx.best_axis,
            Some(SeparatingAxis::EdgeEdge {
                box_axis: 2,
                tri_edge
            })
        );

        let contacts = collide_box_vs_triangles(&obb, &|_: u32| triangle, &[0], 4);
        assert_eq!(contacts.len(), 1);
        assert_relative_eq!(
            contacts[0].position,
            Point::new(0.0, depth / 2.0, 0.0),
            epsilon = 1.0e-4
        );
        assert_relative_eq!(contacts[0].depth, depth, epsilon = 1.0e-4);
        assert_relative_eq!(contacts[0].normal, Vector::y(), epsilon = 1.0e-4);
    }
}

#[test]
fn box_behind_triangle_is_not_separated_by_its_normal() {
    // The triangle is one-sided: a box sinking through it from behind still
    // touches it.
    let obb = unit_box_at(Point::new(0.0, -0.7, 0.0));
    let mut ctx = AxisTestContext::new(&ContactOptions::default());

    assert!(box_triangle_test_separating_axes(&obb, &ground(), &mut ctx));
    assert!(ctx.best_depth >= 0.0);
}
