//! 2D Vector type

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::rotation::{rotate_pair, Plane2, PlaneRotate};

/// 2D Vector with x, y components
///
/// The final projection target: a point on the drawing plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
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
        Ok(Self::new(self.x / k, self.y / k))
    }

    /// Scale to unit length; errors for the zero vector, which has no
    /// direction
    pub fn normalized(self) -> Result<Self, MathError> {
        self.divided(self.length())
    }

    /// Rotate by `theta` radians (counter-clockwise)
    #[inline]
    pub fn rotated(self, theta: f64) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, theta);
        Self::new(x, y)
    }
}

impl PlaneRotate for Vec2 {
    type Plane = Plane2;

    #[inline]
    fn rotated_in(self, plane: Plane2, theta: f64) -> Self {
        match plane {
            Plane2::XY => self.rotated(theta),
        }
    }
}

// Operator overloads

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
