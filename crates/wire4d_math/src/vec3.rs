//! 3D Vector type

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::rotation::{rotate_pair, Axis3, PlaneRotate};
use crate::vec2::Vec2;

/// 3D Vector with x, y, z components
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Componentwise division by a scalar; errors when `k` is zero
    pub fn divided(self, k: f64) -> Result<Self, MathError> {
        if k == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::new(self.x / k, self.y / k, self.z / k))
    }

    /// Scale to unit length; errors for the zero vector
    pub fn normalized(self) -> Result<Self, MathError> {
        self.divided(self.length())
    }

    /// Drop the z component
    #[inline]
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Rotate in the YZ plane (X axis fixed)
    #[inline]
    pub fn rotated_x(self, theta: f64) -> Self {
        let (y, z) = rotate_pair(self.y, self.z, theta);
        Self::new(self.x, y, z)
    }

    /// Rotate in the XZ plane (Y axis fixed)
    #[inline]
    pub fn rotated_y(self, theta: f64) -> Self {
        let (x, z) = rotate_pair(self.x, self.z, theta);
        Self::new(x, self.y, z)
    }

    /// Rotate in the XY plane (Z axis fixed)
    #[inline]
    pub fn rotated_z(self, theta: f64) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, theta);
        Self::new(x, y, self.z)
    }
}

impl PlaneRotate for Vec3 {
    type Plane = Axis3;

    #[inline]
    fn rotated_in(self, plane: Axis3, theta: f64) -> Self {
        match plane {
            Axis3::X => self.rotated_x(theta),
            Axis3::Y => self.rotated_y(theta),
            Axis3::Z => self.rotated_z(theta),
        }
    }
}

// Operator overloads

impl std::ops::Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, TAU};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_length() {
        assert_eq!(Vec3::X.length(), 1.0);
        let v = Vec3::new(1.0, 2.0, 2.0);
        assert_eq!(v.length(), 3.0);
    }

    #[test]
    fn test_add_sub_inverse() {
        let a = Vec3::new(1.5, -2.5, 0.75);
        let b = Vec3::new(-0.25, 4.0, 1.0);
        let back = (a + b) - b;
        assert!((back.x - a.x).abs() < EPSILON);
        assert!((back.y - a.y).abs() < EPSILON);
        assert!((back.z - a.z).abs() < EPSILON);
    }

    #[test]
    fn test_divided() {
        let v = Vec3::new(2.0, 4.0, 6.0);
        let half = v.divided(2.0).unwrap();
        assert_eq!(half, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.divided(0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_normalized_zero_vector() {
        assert_eq!(Vec3::ZERO.normalized(), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_normalize_idempotent() {
        let v = Vec3::new(3.0, -1.0, 2.0);
        let once = v.normalized().unwrap();
        let twice = once.normalized().unwrap();
        assert!((once.x - twice.x).abs() < EPSILON);
        assert!((once.y - twice.y).abs() < EPSILON);
        assert!((once.z - twice.z).abs() < EPSILON);
    }

    #[test]
    fn test_rotated_x_quarter_turn() {
        let v = Vec3::Y.rotated_x(FRAC_PI_2);
        assert!(v.x.abs() < EPSILON);
        assert!(v.y.abs() < EPSILON);
        assert!((v.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotated_z_quarter_turn() {
        let v = Vec3::X.rotated_z(FRAC_PI_2);
        assert!(v.x.abs() < EPSILON);
        assert!((v.y - 1.0).abs() < EPSILON);
        assert!(v.z.abs() < EPSILON);
    }

    #[test]
    fn test_rotation_isometry_all_planes() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        for plane in [Axis3::X, Axis3::Y, Axis3::Z] {
            for i in 0..8 {
                let theta = i as f64 * 0.9;
                let r = v.rotated_in(plane, theta);
                assert!((r.length() - v.length()).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_rotation_periodicity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let a = v.rotated_y(0.4);
        let b = v.rotated_y(0.4 + TAU);
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.z - b.z).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_order_matters() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let xy = v.rotated_x(0.5).rotated_y(0.5);
        let yx = v.rotated_y(0.5).rotated_x(0.5);
        assert!((xy.x - yx.x).abs() > 1e-3);
    }

    #[test]
    fn test_xy_drops_z() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
    }
}
