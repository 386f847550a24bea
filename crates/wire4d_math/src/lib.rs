//! Dimensional vector algebra for the wire4d projection pipeline
//!
//! This crate provides the 2D, 3D, and 4D vector types used by the
//! projection pipeline, together with their axis-plane rotations.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - immutable f64 vectors
//! - [`Plane2`], [`Axis3`], [`Plane4`] - named rotation planes per dimension
//! - [`PlaneRotate`] - rotation dispatch trait used by mesh transforms
//! - [`MathError`] - division-by-zero reporting for `divided`/`normalized`

mod error;
mod rotation;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use rotation::{Axis3, Plane2, Plane4, PlaneRotate};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
