//! Simplex factories
//!
//! A D-simplex is the minimal polytope in D dimensions: D+1 vertices, all
//! pairwise connected. The factories build the canonical simplex used as
//! the pipeline's test polytope: the origin plus the D unit basis points,
//! translated by -1/2 in every coordinate. The centroid ends up at
//! 1/(D+1) - 1/2 per coordinate, slightly off the origin.
//!
//! Edge order is canonical and fixed: for n = 0..D, for m = n+1..D, edge
//! (n, m). Downstream diagrams index nodes by this order.

use wire4d_math::{Vec3, Vec4};

use crate::mesh::{Edge, Mesh};

/// All pairwise edges over `count` vertices, in canonical order
fn complete_edges(count: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(count * (count - 1) / 2);
    for n in 0..count {
        for m in (n + 1)..count {
            edges.push(Edge::new(n, m));
        }
    }
    edges
}

/// The canonical 3-simplex (tetrahedron): 4 vertices, 6 edges
pub fn simplex3() -> Mesh<Vec3> {
    let center = Vec3::new(-0.5, -0.5, -0.5);
    let vertices = vec![
        Vec3::ZERO + center,
        Vec3::X + center,
        Vec3::Y + center,
        Vec3::Z + center,
    ];
    Mesh::from_parts(vertices, complete_edges(4))
}

/// The canonical 4-simplex (5-cell): 5 vertices, 10 edges
pub fn simplex4() -> Mesh<Vec4> {
    let center = Vec4::new(-0.5, -0.5, -0.5, -0.5);
    let vertices = vec![
        Vec4::ZERO + center,
        Vec4::X + center,
        Vec4::Y + center,
        Vec4::Z + center,
        Vec4::W + center,
    ];
    Mesh::from_parts(vertices, complete_edges(5))
}
