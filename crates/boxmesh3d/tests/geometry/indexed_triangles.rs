use approx::assert_relative_eq;
use boxmesh3d::math::{Isometry, Matrix, Point, Real, Vector};
use boxmesh3d::query::{collide_box_vs_triangles, collide_box_vs_triangles_with_hooks};
use boxmesh3d::query::{CollisionHooks, ContactBuffer, ContactOptions, GeometryTag};
use boxmesh3d::shape::{IndexedTriangles, IndexedTrianglesError, OrientedBox};

fn quad_vertices() -> Vec<Point<Real>> {
    vec![
        Point::new(-2.0, 0.0, -2.0),
        Point::new(2.0, 0.0, -2.0),
        Point::new(2.0, 0.0, 2.0),
        Point::new(-2.0, 0.0, 2.0),
    ]
}

// Both triangles face +y.
const QUAD_INDICES: [[u32; 3]; 2] = [[0, 2, 1], [0, 3, 2]];

fn unit_box() -> OrientedBox {
    OrientedBox::new(Point::origin(), Vector::repeat(0.5), Matrix::identity())
}

#[test]
fn box_on_quad_shares_corner_contacts() {
    let vertices = quad_vertices();
    let pos = Isometry::translation(0.0, -0.4, 0.0);
    let mesh = IndexedTriangles::new(pos, &vertices, &QUAD_INDICES).unwrap();
    let candidates: Vec<u32> = mesh.all_triangle_indices().collect();

    let contacts = collide_box_vs_triangles(&unit_box(), &mesh, &candidates, 8);

    // The contacts found at the shared diagonal are merged.
    assert_eq!(contacts.len(), 4);
    for contact in &contacts {
        assert_relative_eq!(contact.depth, 0.1, epsilon = 1.0e-4);
        assert_relative_eq!(contact.position.x.abs(), 0.5, epsilon = 1.0e-4);
        assert_relative_eq!(contact.position.z.abs(), 0.5, epsilon = 1.0e-4);
    }
}

#[test]
fn contacts_carry_the_buffer_tags() {
    let vertices = quad_vertices();
    let pos = Isometry::translation(0.0, -0.4, 0.0);
    let mesh = IndexedTriangles::new(pos, &vertices, &QUAD_INDICES).unwrap();
    let mut buffer = ContactBuffer::with_tags(8, GeometryTag(1), GeometryTag(2));

    let added = collide_box_vs_triangles_with_hooks(
        &unit_box(),
        &mesh,
        &[1],
        &ContactOptions::default(),
        &mut (),
        &mut buffer,
    );

    assert!(added > 0);
    for contact in &buffer {
        assert_eq!(contact.geom1, GeometryTag(1));
        assert_eq!(contact.geom2, GeometryTag(2));
        assert_eq!(contact.triangle_index, 1);
    }
}

#[test]
fn hooks_see_every_candidate() {
    struct SkipAll {
        touched: usize,
    }

    impl CollisionHooks for SkipAll {
        fn should_test_triangle(&mut self, _: u32) -> bool {
            false
        }

        fn report_touched_triangles(&mut self, triangle_indices: &[u32]) {
            self.touched += triangle_indices.len();
        }
    }

    let vertices = quad_vertices();
    let mesh = IndexedTriangles::new(Isometry::identity(), &vertices, &QUAD_INDICES).unwrap();
    let mut hooks = SkipAll { touched: 0 };
    let mut buffer = ContactBuffer::new(8);

    let added = collide_box_vs_triangles_with_hooks(
        &unit_box(),
        &mesh,
        &[0, 1],
        &ContactOptions::default(),
        &mut hooks,
        &mut buffer,
    );

    assert_eq!(added, 0);
    assert_eq!(hooks.touched, 2);
}

#[test]
fn invalid_indices_are_rejected() {
    let vertices = quad_vertices();
    let indices = [[0, 1, 2], [0, 2, 4]];

    assert_eq!(
        IndexedTriangles::new(Isometry::identity(), &vertices, &indices).unwrap_err(),
        IndexedTrianglesError::VertexIndexOutOfBounds {
            triangle: 1,
            vertex: 4,
            num_vertices: 4,
        }
    );
}
