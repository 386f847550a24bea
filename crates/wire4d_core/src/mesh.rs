//! Wireframe mesh: vertices plus index-pair edges
//!
//! A mesh is pure connectivity and geometry - no colors, materials, or
//! rendering info. The vertex type is generic over the dimension, so the
//! same structure carries a polytope through every stage of the projection
//! pipeline.

use wire4d_math::PlaneRotate;

use crate::error::GeometryError;

/// A connectivity record between two vertices, by index into the owning
/// mesh's vertex list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Index of the first endpoint
    pub start: usize,
    /// Index of the second endpoint
    pub end: usize,
}

impl Edge {
    /// Create a new edge between two vertex indices
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A wireframe polytope in a fixed dimension
///
/// Owns an ordered vertex list (index = identity) and an ordered edge list.
/// Every edge index is valid for the lifetime of the mesh; topology is
/// fixed after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<V> {
    vertices: Vec<V>,
    edges: Vec<Edge>,
}

impl<V: Copy> Mesh<V> {
    /// Create a mesh, validating that every edge references a vertex that
    /// exists
    pub fn new(vertices: Vec<V>, edges: Vec<Edge>) -> Result<Self, GeometryError> {
        let vertex_count = vertices.len();
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.start, edge.end] {
                if index >= vertex_count {
                    return Err(GeometryError::InvalidIndex {
                        edge: i,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self { vertices, edges })
    }

    /// Construct without validation. Callers guarantee every edge index is
    /// in range.
    pub(crate) fn from_parts(vertices: Vec<V>, edges: Vec<Edge>) -> Self {
        debug_assert!(edges
            .iter()
            .all(|e| e.start < vertices.len() && e.end < vertices.len()));
        Self { vertices, edges }
    }

    /// Get the vertices of this mesh
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Get the edges of this mesh
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V: PlaneRotate> Mesh<V> {
    /// Rotate every vertex in the given plane, leaving the edge list
    /// untouched
    ///
    /// Returns the rotated mesh so rotations chain fluently. Plane
    /// rotations do not commute in general; the application order is the
    /// caller's contract.
    #[must_use]
    pub fn rotated(mut self, plane: V::Plane, theta: f64) -> Self {
        for vertex in &mut self.vertices {
            *vertex = vertex.rotated_in(plane, theta);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use wire4d_math::{Plane4, Vec4};

    const EPSILON: f64 = 1e-12;

    fn square4() -> Mesh<Vec4> {
        Mesh::new(
            vec![
                Vec4::new(0.0, 0.0, 0.0, 0.0),
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(1.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
            ],
            vec![
                Edge::new(0, 1),
                Edge::new(1, 2),
                Edge::new(2, 3),
                Edge::new(3, 0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_accepts_valid_edges() {
        let mesh = square4();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.edge_count(), 4);
    }

    #[test]
    fn test_new_rejects_out_of_range_edge() {
        let result = Mesh::new(
            vec![Vec4::ZERO, Vec4::X],
            vec![Edge::new(0, 1), Edge::new(1, 2)],
        );
        assert_eq!(
            result.unwrap_err(),
            GeometryError::InvalidIndex {
                edge: 1,
                index: 2,
                vertex_count: 2,
            }
        );
    }

    #[test]
    fn test_new_accepts_self_loop() {
        // Self-loops are not produced by the generators but the type does
        // not reject them.
        let mesh = Mesh::new(vec![Vec4::ZERO], vec![Edge::new(0, 0)]);
        assert!(mesh.is_ok());
    }

    #[test]
    fn test_rotated_preserves_edges() {
        let mesh = square4();
        let edges_before = mesh.edges().to_vec();
        let rotated = mesh.rotated(Plane4::XW, 1.3).rotated(Plane4::YZ, -0.4);
        assert_eq!(rotated.edges(), edges_before.as_slice());
    }

    #[test]
    fn test_rotated_moves_vertices() {
        let mesh = square4().rotated(Plane4::XW, FRAC_PI_2);
        let v = mesh.vertices()[1];
        assert!(v.x.abs() < EPSILON);
        assert!((v.w - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotated_3d_mesh() {
        use wire4d_math::Axis3;

        let tetra = crate::simplex::simplex3();
        let edges_before = tetra.edges().to_vec();
        let rotated = tetra.rotated(Axis3::Z, FRAC_PI_2);
        assert_eq!(rotated.edges(), edges_before.as_slice());
        // Vertex 1 is the translated X basis point (0.5, -0.5, -0.5).
        let v = rotated.vertices()[1];
        assert!((v.x - 0.5).abs() < EPSILON);
        assert!((v.y - 0.5).abs() < EPSILON);
        assert!((v.z + 0.5).abs() < EPSILON);
    }
}
