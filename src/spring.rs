//! Damped springs between pairs of points.

use crate::float::Float;
use crate::force::{endpoints, Force};
use crate::point::{Point, PointId, REST_TOLERANCE};
use crate::vec::Vec2;

/// Index of a spring inside its [`PointSystem`](crate::PointSystem).
pub type SpringId = usize;

/// Damped elastic connector between points `a` and `b`.
///
/// Hooke force `k * (length - rest_length)` along the axis between the
/// points, plus a damping term `d` times the relative velocity projected on
/// that axis. A stretched spring pulls both ends together, a compressed one
/// pushes them apart.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    pub a: PointId,
    pub b: PointId,
    strength: F,
    damping: F,
    rest_length: F,
    on: bool,
}

impl<F: Float> Spring<F> {
    pub fn new(a: PointId, b: PointId, strength: F, damping: F, rest_length: F) -> Self {
        Spring { a, b, strength, damping, rest_length, on: true }
    }

    pub fn strength(&self) -> F { self.strength }
    pub fn set_strength(&mut self, k: F) { self.strength = k; }
    pub fn damping(&self) -> F { self.damping }
    pub fn set_damping(&mut self, d: F) { self.damping = d; }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn set_rest_length(&mut self, l: F) { self.rest_length = l; }

    pub fn is_on(&self) -> bool { self.on }
    pub fn turn_on(&mut self) { self.on = true; }
    /// A switched-off spring adds no force and always counts as resting.
    pub fn turn_off(&mut self) { self.on = false; }

    pub fn connects(&self, point: PointId) -> bool {
        self.a == point || self.b == point
    }

    /// Distance between the endpoints, `None` if either is missing.
    pub fn current_length(&self, points: &[Point<F>]) -> Option<F> {
        let (pa, pb) = endpoints(points, self.a, self.b)?;
        Some(pa.position.distance(pb.position))
    }

    /// Signed deviation from the rest length; positive when stretched.
    pub fn stretch(&self, points: &[Point<F>]) -> Option<F> {
        Some(self.current_length(points)? - self.rest_length)
    }

    /// Force this spring currently exerts on point `a` (`b` gets the negation).
    pub fn force_on_a(&self, points: &[Point<F>]) -> Option<Vec2<F>> {
        let (pa, pb) = endpoints(points, self.a, self.b)?;
        let delta = pb.position - pa.position;
        let length = delta.length();
        // Coincident points have no axis to push along.
        if length == F::zero() {
            return None;
        }
        let axis = delta.scale(F::one() / length);
        let stretch = length - self.rest_length;
        let closing_speed = (pb.velocity - pa.velocity).dot(axis);
        Some(axis.scale(self.strength * stretch + self.damping * closing_speed))
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

    /// Stretch and relative speed both under `eps`.
    pub fn resting_within(&self, points: &[Point<F>], eps: F) -> bool {
        if !self.on {
            return true;
        }
        match endpoints(points, self.a, self.b) {
            Some((pa, pb)) => {
                let stretch = pa.position.distance(pb.position) - self.rest_length;
                let relative = pb.velocity - pa.velocity;
                stretch.abs() < eps && relative.length_sq() < eps * eps
            }
            None => true,
        }
    }
}

impl<F: Float> Force<F> for Spring<F> {
    fn update(&self, points: &mut [Point<F>]) {
        Spring::update(self, points);
    }
}
