//! wire4d - perspective projection of 4D polytopes to TikZ wireframes
//!
//! A 4D polytope is projected down through successive dimensions
//! (4D -> 3D -> 2D) by intersecting camera rays with fixed hyperplanes,
//! and the resulting 2D wireframe is emitted as a standalone TikZ
//! document.

pub mod config;
pub mod pipeline;

pub use wire4d_core::{
    project, project_to_2d, project_to_3d, simplex3, simplex4, Edge, GeometryError, Mesh,
};
pub use wire4d_math::{Axis3, MathError, Plane2, Plane4, Vec2, Vec3, Vec4};
pub use wire4d_tikz::TikzDiagram;
