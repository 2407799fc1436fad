//! 2D vector type for positions, velocities and forces.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector.
///
/// Arithmetic comes in two flavours: the operator traits and [`Vec2::scale`]
/// return new vectors, while the `*_self` methods mutate the receiver and
/// hand it back so force accumulation can be chained without temporaries.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn set(&mut self, x: F, y: F) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn add_self(&mut self, other: Self) -> &mut Self {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self
    }

    pub fn sub_self(&mut self, other: Self) -> &mut Self {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self
    }

    pub fn scale_self(&mut self, s: F) -> &mut Self {
        self.x = self.x * s;
        self.y = self.y * s;
        self
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Length (magnitude).
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F { (self - other).length_sq() }

    /// Exact test: both components equal zero, no epsilon.
    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero()
    }

    /// Normalize to unit length. A zero-length vector normalizes to zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == F::zero() {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { self.add_self(rhs); }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { self.sub_self(rhs); }
}
