//! Geometry error types
//!
//! All failures here are deterministic consequences of the input geometry.
//! A failed vertex makes the whole projection meaningless, so errors abort
//! the operation rather than skipping the vertex.

use std::fmt;

use wire4d_math::MathError;

/// Error type for mesh construction and projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A division by zero in projection math; the message names the vertex
    /// and the stage that failed
    DivisionByZero(String),
    /// An edge references a vertex index outside the mesh's vertex list
    InvalidIndex {
        /// Position of the offending edge in the edge list
        edge: usize,
        /// The out-of-range vertex index
        index: usize,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DivisionByZero(context) => {
                write!(f, "division by zero: {}", context)
            }
            GeometryError::InvalidIndex {
                edge,
                index,
                vertex_count,
            } => write!(
                f,
                "edge {} references vertex {} but the mesh has {} vertices",
                edge, index, vertex_count
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

impl From<MathError> for GeometryError {
    fn from(e: MathError) -> Self {
        GeometryError::DivisionByZero(e.to_string())
    }
}
