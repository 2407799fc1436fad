//! Inverse-square attraction and repulsion between pairs of points.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::{endpoints, Force};
use crate::point::{Point, PointId, REST_TOLERANCE};
use crate::vec::Vec2;

/// Index of an attraction inside its [`PointSystem`](crate::PointSystem).
pub type AttractionId = usize;

/// Attraction (positive strength) or repulsion (negative strength) between
/// points `a` and `b`.
///
/// Magnitude is `k * m_a * m_b / d²` with `d` floored at `min_distance`, so
/// points closer than the minimum feel the maximum force instead of a
/// singular one.
#[derive(Clone, Debug)]
pub struct Attraction<F: Float> {
    pub a: PointId,
    pub b: PointId,
    strength: F,
    min_distance: F,
    min_distance_sq: F,
    on: bool,
}

fn check_min_distance<F: Float>(d: F) -> Result<F, PhysicsError> {
    if d.is_finite() && d > F::zero() {
        Ok(d)
    } else {
        Err(PhysicsError::InvalidMinDistance)
    }
}

impl<F: Float> Attraction<F> {
    pub fn new(a: PointId, b: PointId, strength: F, min_distance: F) -> Result<Self, PhysicsError> {
        let min_distance = check_min_distance(min_distance)?;
        Ok(Attraction {
            a,
            b,
            strength,
            min_distance,
            min_distance_sq: min_distance * min_distance,
            on: true,
        })
    }

    pub fn strength(&self) -> F { self.strength }
    pub fn set_strength(&mut self, k: F) { self.strength = k; }
    pub fn min_distance(&self) -> F { self.min_distance }

    pub fn set_min_distance(&mut self, d: F) -> Result<(), PhysicsError> {
        self.min_distance = check_min_distance(d)?;
        self.min_distance_sq = self.min_distance * self.min_distance;
        Ok(())
    }

    pub fn is_on(&self) -> bool { self.on }
    pub fn turn_on(&mut self) { self.on = true; }
    pub fn turn_off(&mut self) { self.on = false; }

    pub fn connects(&self, point: PointId) -> bool {
        self.a == point || self.b == point
    }

    /// Signed force magnitude at the current distance (positive attracts).
    pub fn force_magnitude(&self, points: &[Point<F>]) -> Option<F> {
        let (pa, pb) = endpoints(points, self.a, self.b)?;
        let dist_sq = pa.position.distance_sq(pb.position).max(self.min_distance_sq);
        Some(self.strength * pa.mass() * pb.mass() / dist_sq)
    }

    /// Force this attraction currently exerts on point `a` (`b` gets the negation).
    pub fn force_on_a(&self, points: &[Point<F>]) -> Option<Vec2<F>> {
        let magnitude = self.force_magnitude(points)?;
        let (pa, pb) = endpoints(points, self.a, self.b)?;
        // normalize() yields zero for coincident points, so they feel nothing.
        Some((pb.position - pa.position).normalize().scale(magnitude))
    }

    pub fn update(&self, points: &mut [Point<F>]) {
        if !self.on {
            return;
        }
        if let Some(f) = self.force_on_a(points) {
            points[self.a].apply_force(f);
            points[self.b].apply_force(-f);
        }
    }

    pub fn resting(&self, points: &[Point<F>]) -> bool {
        self.resting_within(points, F::from_f64(REST_TOLERANCE))
    }

    /// Applied force under `eps`. Coincident points feel no force, so they
    /// count as resting whatever the clamped magnitude says.
    pub fn resting_within(&self, points: &[Point<F>], eps: F) -> bool {
        if !self.on {
            return true;
        }
        self.force_on_a(points).map_or(true, |f| f.length_sq() < eps * eps)
    }
}

impl<F: Float> Force<F> for Attraction<F> {
    fn update(&self, points: &mut [Point<F>]) {
        Attraction::update(self, points);
    }
}
