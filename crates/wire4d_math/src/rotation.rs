//! Axis-plane rotations
//!
//! Every rotation in this crate acts on exactly two coordinates of a vector
//! and leaves the others fixed. The single primitive [`rotate_pair`] applies
//! the standard 2D rotation matrix to one coordinate pair; the named
//! per-dimension rotations are all generated from it.
//!
//! In 3D the three plane rotations are named by the axis they leave fixed
//! (X, Y, Z). In 4D there is no fixed axis, so the six rotations are named
//! by the pair of axes they act on (XY, XZ, XW, YZ, YW, ZW).
//!
//! Plane rotations do not commute in general: the order in which a caller
//! applies them is part of the observable contract.

use serde::{Deserialize, Serialize};

/// Rotate the coordinate pair `(a, b)` by `theta` radians.
///
/// Standard counter-clockwise rotation: `a' = a cosθ − b sinθ`,
/// `b' = a sinθ + b cosθ`.
#[inline]
pub(crate) fn rotate_pair(a: f64, b: f64, theta: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}

/// The single rotation plane in 2D
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane2 {
    /// XY plane - the whole of 2D space
    XY,
}

/// The three rotation planes in 3D, named by the axis each leaves fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis3 {
    /// Rotation in the YZ plane (X axis fixed)
    X,
    /// Rotation in the XZ plane (Y axis fixed)
    Y,
    /// Rotation in the XY plane (Z axis fixed)
    Z,
}

/// The six rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plane4 {
    /// XY plane
    XY,
    /// XZ plane
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

/// Dispatch from a named rotation plane to the matching vector rotation.
///
/// Implemented by [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3), and
/// [`Vec4`](crate::Vec4); meshes rotate their vertices through this seam
/// without knowing the concrete dimension.
pub trait PlaneRotate: Copy {
    /// The rotation-plane type for this dimension
    type Plane: Copy;

    /// Rotate by `theta` radians in the given plane
    fn rotated_in(self, plane: Self::Plane, theta: f64) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_rotate_pair_quarter_turn() {
        let (a, b) = rotate_pair(1.0, 0.0, FRAC_PI_2);
        assert!(a.abs() < EPSILON);
        assert!((b - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_pair_half_turn() {
        let (a, b) = rotate_pair(3.0, -4.0, PI);
        assert!((a + 3.0).abs() < EPSILON);
        assert!((b - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_pair_preserves_norm() {
        let (a, b) = rotate_pair(0.6, 0.8, 1.234);
        assert!((a * a + b * b - 1.0).abs() < EPSILON);
    }
}
