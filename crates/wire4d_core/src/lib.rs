//! Core types for the wire4d projection pipeline
//!
//! This crate provides the wireframe polytope abstraction and the
//! perspective projector that walks it down through the dimensions:
//!
//! - [`Edge`] - connectivity between two vertices, by index
//! - [`Mesh`] - vertex list + edge list, generic over the vertex dimension
//! - [`simplex3`] / [`simplex4`] - canonical test polytopes
//! - [`project`] - camera-ray/hyperplane perspective projection, one
//!   dimension down
//! - [`GeometryError`] - construction and projection failures

mod error;
mod mesh;
mod projector;
mod simplex;

pub use error::GeometryError;
pub use mesh::{Edge, Mesh};
pub use projector::{project, project_to_2d, project_to_3d, Projectable};
pub use simplex::{simplex3, simplex4};

// Re-export commonly used types from wire4d_math for convenience
pub use wire4d_math::{Axis3, MathError, Plane2, Plane4, PlaneRotate, Vec2, Vec3, Vec4};
