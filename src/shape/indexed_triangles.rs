use crate::math::{Isometry, Point, Real};
use crate::query::TriangleSource;
use crate::shape::Triangle;

/// Error returned when building [`IndexedTriangles`] from inconsistent buffers.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexedTrianglesError {
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {vertex}, but only {num_vertices} vertices exist.")]
    VertexIndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        vertex: u32,
        /// The number of vertices available.
        num_vertices: usize,
    },
}

/// A borrowed view of an indexed triangle mesh placed at some pose.
///
/// This is the simplest [`TriangleSource`]: each fetched triangle is read
/// from the index buffer and its vertices are transformed by `pos` into
/// world-space.
#[derive(Copy, Clone, Debug)]
pub struct IndexedTriangles<'a> {
    pos: Isometry<Real>,
    vertices: &'a [Point<Real>],
    indices: &'a [[u32; 3]],
}

impl<'a> IndexedTriangles<'a> {
    /// Creates a triangle source from a vertex buffer and an index buffer.
    ///
    /// Fails if any index is out of the bounds of `vertices`.
    pub fn new(
        pos: Isometry<Real>,
        vertices: &'a [Point<Real>],
        indices: &'a [[u32; 3]],
    ) -> Result<Self, IndexedTrianglesError> {
        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(vertex) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(IndexedTrianglesError::VertexIndexOutOfBounds {
                    triangle: triangle as u32,
                    vertex: *vertex,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self {
            pos,
            vertices,
            indices,
        })
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The indices of every triangle of this mesh, to be used as a candidate list.
    pub fn all_triangle_indices(&self) -> impl Iterator<Item = u32> + '_ {
        0..self.indices.len() as u32
    }

    /// The world-space triangle with the given index.
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.pos * self.vertices[idx[0] as usize],
            self.pos * self.vertices[idx[1] as usize],
            self.pos * self.vertices[idx[2] as usize],
        )
    }
}

impl TriangleSource for IndexedTriangles<'_> {
    #[inline]
    fn fetch_triangle(&self, index: u32) -> Triangle {
        self.triangle(index)
    }
}
