//! The force-contributor seam shared by springs, attractions and custom forces.

use crate::float::Float;
use crate::point::Point;

/// Something that adds force to points each time forces are evaluated.
///
/// The integrator may evaluate forces several times per tick (four times
/// under Runge–Kutta), so `update` must only read the current point state
/// and add to the accumulators. It must not move points.
///
/// Implementations that refer to points by index should treat indices past
/// the end of `points` as inert.
pub trait Force<F: Float> {
    fn update(&self, points: &mut [Point<F>]);
}

/// Read two endpoints, skipping the evaluation if either is missing.
pub(crate) fn endpoints<F: Float>(
    points: &[Point<F>],
    a: usize,
    b: usize,
) -> Option<(&Point<F>, &Point<F>)> {
    Some((points.get(a)?, points.get(b)?))
}
