//! 4D Vector type

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::rotation::{rotate_pair, Plane4, PlaneRotate};
use crate::vec3::Vec3;

/// 4D Vector with x, y, z, w components
///
/// The w component represents the 4th spatial dimension (ana/kata).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
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
        Ok(Self::new(self.x / k, self.y / k, self.z / k, self.w / k))
    }

    /// Scale to unit length; errors for the zero vector
    pub fn normalized(self) -> Result<Self, MathError> {
        self.divided(self.length())
    }

    /// Drop the w component
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotate in the XY plane
    #[inline]
    pub fn rotated_xy(self, theta: f64) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, theta);
        Self::new(x, y, self.z, self.w)
    }

    /// Rotate in the XZ plane
    #[inline]
    pub fn rotated_xz(self, theta: f64) -> Self {
        let (x, z) = rotate_pair(self.x, self.z, theta);
        Self::new(x, self.y, z, self.w)
    }

    /// Rotate in the XW plane
    #[inline]
    pub fn rotated_xw(self, theta: f64) -> Self {
        let (x, w) = rotate_pair(self.x, self.w, theta);
        Self::new(x, self.y, self.z, w)
    }

    /// Rotate in the YZ plane
    #[inline]
    pub fn rotated_yz(self, theta: f64) -> Self {
        let (y, z) = rotate_pair(self.y, self.z, theta);
        Self::new(self.x, y, z, self.w)
    }

    /// Rotate in the YW plane
    #[inline]
    pub fn rotated_yw(self, theta: f64) -> Self {
        let (y, w) = rotate_pair(self.y, self.w, theta);
        Self::new(self.x, y, self.z, w)
    }

    /// Rotate in the ZW plane
    #[inline]
    pub fn rotated_zw(self, theta: f64) -> Self {
        let (z, w) = rotate_pair(self.z, self.w, theta);
        Self::new(self.x, self.y, z, w)
    }
}

impl PlaneRotate for Vec4 {
    type Plane = Plane4;

    #[inline]
    fn rotated_in(self, plane: Plane4, theta: f64) -> Self {
        match plane {
            Plane4::XY => self.rotated_xy(theta),
            Plane4::XZ => self.rotated_xz(theta),
            Plane4::XW => self.rotated_xw(theta),
            Plane4::YZ => self.rotated_yz(theta),
            Plane4::YW => self.rotated_yw(theta),
            Plane4::ZW => self.rotated_zw(theta),
        }
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::Mul<f64> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, TAU};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec4::W.length(), 1.0);
        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v.length() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_add_sub_inverse() {
        let a = Vec4::new(1.5, -2.5, 0.75, 3.0);
        let b = Vec4::new(-0.25, 4.0, 1.0, -1.5);
        let back = (a + b) - b;
        assert!((back.x - a.x).abs() < EPSILON);
        assert!((back.y - a.y).abs() < EPSILON);
        assert!((back.z - a.z).abs() < EPSILON);
        assert!((back.w - a.w).abs() < EPSILON);
    }

    #[test]
    fn test_divided_by_zero() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.divided(0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_normalized() {
        let v = Vec4::new(2.0, 0.0, 0.0, 0.0);
        let n = v.normalized().unwrap();
        assert!((n.length() - 1.0).abs() < EPSILON);
        assert!((n.x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalized_zero_vector() {
        assert_eq!(Vec4::ZERO.normalized(), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_normalize_idempotent() {
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        let once = v.normalized().unwrap();
        let twice = once.normalized().unwrap();
        assert!((once.x - twice.x).abs() < EPSILON);
        assert!((once.w - twice.w).abs() < EPSILON);
    }

    #[test]
    fn test_rotated_xw_quarter_turn() {
        let v = Vec4::X.rotated_xw(FRAC_PI_2);
        assert!(v.x.abs() < EPSILON);
        assert!(v.y.abs() < EPSILON);
        assert!(v.z.abs() < EPSILON);
        assert!((v.w - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_isometry_all_planes() {
        let planes = [
            Plane4::XY,
            Plane4::XZ,
            Plane4::XW,
            Plane4::YZ,
            Plane4::YW,
            Plane4::ZW,
        ];
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        for plane in planes {
            for i in 0..8 {
                let theta = i as f64 * 0.77;
                let r = v.rotated_in(plane, theta);
                assert!((r.length() - v.length()).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_rotation_periodicity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let a = v.rotated_zw(1.1);
        let b = v.rotated_zw(1.1 + TAU);
        assert!((a.z - b.z).abs() < 1e-9);
        assert!((a.w - b.w).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_order_matters() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let ab = v.rotated_xw(0.5).rotated_yw(0.5);
        let ba = v.rotated_yw(0.5).rotated_xw(0.5);
        assert!((ab.x - ba.x).abs() > 1e-3);
    }

    #[test]
    fn test_xyz_drops_w() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
    }
}
