//! Shapes supported by boxmesh3d.

pub use self::indexed_triangles::{IndexedTriangles, IndexedTrianglesError};
pub use self::oriented_box::{OrientedBox, OrientedBoxError};
pub use self::triangle::Triangle;

mod indexed_triangles;
mod oriented_box;
mod triangle;
