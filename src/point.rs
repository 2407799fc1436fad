//! Point masses: the particles every force acts on.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Index of a point inside its [`PointSystem`](crate::PointSystem).
pub type PointId = usize;

/// Default speed (and spring stretch / attraction force) below which an
/// entity counts as resting.
pub const REST_TOLERANCE: f64 = 1e-3;

/// A mass-bearing particle with explicit velocity and a force accumulator.
///
/// Forces add up in `force` until the integrator consumes them. A fixed point
/// still accumulates force but never moves.
#[derive(Clone, Debug)]
pub struct Point<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub force: Vec2<F>,
    mass: F,
    fixed: bool,
    age: F,
}

fn check_mass<F: Float>(mass: F) -> Result<F, PhysicsError> {
    if mass.is_finite() && mass > F::zero() {
        Ok(mass)
    } else {
        Err(PhysicsError::InvalidMass)
    }
}

impl<F: Float> Point<F> {
    /// Create a free point at rest at `(x, y)`.
    pub fn new(mass: F, x: F, y: F) -> Result<Self, PhysicsError> {
        Ok(Point {
            position: Vec2::new(x, y),
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            mass: check_mass(mass)?,
            fixed: false,
            age: F::zero(),
        })
    }

    /// Create a unit-mass point pinned at `(x, y)`.
    pub fn fixed(x: F, y: F) -> Self {
        Point {
            position: Vec2::new(x, y),
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            mass: F::one(),
            fixed: true,
            age: F::zero(),
        }
    }

    pub fn mass(&self) -> F { self.mass }

    pub fn set_mass(&mut self, mass: F) -> Result<(), PhysicsError> {
        self.mass = check_mass(mass)?;
        Ok(())
    }

    /// Inverse mass as seen by the integrator; zero for fixed points.
    pub fn inv_mass(&self) -> F {
        if self.fixed {
            F::zero()
        } else {
            F::one() / self.mass
        }
    }

    pub fn is_fixed(&self) -> bool { self.fixed }

    pub fn is_free(&self) -> bool { !self.fixed }

    /// Pin the point where it is. Its velocity is dropped.
    pub fn make_fixed(&mut self) {
        self.fixed = true;
        self.velocity = Vec2::zero();
    }

    pub fn make_free(&mut self) {
        self.fixed = false;
    }

    /// Simulated time this point has been stepped through.
    pub fn age(&self) -> F { self.age }

    pub(crate) fn grow_older(&mut self, dt: F) {
        self.age = self.age + dt;
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.force.add_self(force);
    }

    /// Reset the force accumulator.
    pub fn clear(&mut self) {
        self.force = Vec2::zero();
    }

    pub fn resting(&self) -> bool {
        self.resting_within(F::from_f64(REST_TOLERANCE))
    }

    pub fn resting_within(&self, eps: F) -> bool {
        self.velocity.length_sq() < eps * eps
    }
}
