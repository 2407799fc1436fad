//! The point system: owns every entity, applies global forces and ticks.

use crate::attraction::{Attraction, AttractionId};
use crate::config::{EquilibriumCriteria, SystemConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::Force;
use crate::integrator::{IntegrationMethod, Integrator};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::{Point, PointId};
use crate::spring::{Spring, SpringId};
use crate::vec::Vec2;
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;

/// Gravity, drag and every force contributor, added into `points` in order.
/// `drag_forces` holds one precomputed drag force per point.
fn accumulate<F: Float>(
    points: &mut [Point<F>],
    gravity: Vec2<F>,
    drag_forces: &[Vec2<F>],
    springs: &[Spring<F>],
    attractions: &[Attraction<F>],
    forces: &[Box<dyn Force<F>>],
) {
    if !gravity.is_zero() {
        for p in points.iter_mut() {
            p.force.add_self(gravity);
        }
    }
    for (p, resistance) in points.iter_mut().zip(drag_forces) {
        p.force.add_self(*resistance);
    }
    for s in springs {
        s.update(points);
    }
    for a in attractions {
        a.update(points);
    }
    for f in forces {
        f.update(points);
    }
}

/// A collection of points, springs, attractions and custom forces advanced
/// together in time.
///
/// # Per-tick protocol
///
/// [`tick`](Self::tick) applies forces itself: at every integrator stage the
/// accumulators are cleared and refilled the same way
/// [`apply_forces`](Self::apply_forces) fills them. Calling `apply_forces`
/// before `tick` is harmless since its result is discarded; on its own it
/// lets callers inspect forces without stepping. Drag is sampled once per
/// tick from the velocities at its start and held constant across stages. Forces written straight
/// into [`Point::force`] do not survive a tick, so register a [`Force`]
/// instead.
///
/// # Example
/// ```
/// use pointmass::PointSystem;
///
/// let mut system: PointSystem<f64> = PointSystem::new(0.0, -1.0, 0.0);
/// let anchor = system.create_point(1.0, 0.0, 0.0).unwrap();
/// let bob = system.create_point(1.0, 0.0, -2.0).unwrap();
/// system.point_mut(anchor).unwrap().make_fixed();
/// system.create_spring(anchor, bob, 0.5, 0.1, 2.0).unwrap();
///
/// for _ in 0..10 {
///     system.tick(0.1);
/// }
/// assert!(system.point(bob).unwrap().position.y < -2.0);
/// ```
pub struct PointSystem<F: Float = f64> {
    points: AllocVec<Point<F>>,
    springs: AllocVec<Spring<F>>,
    attractions: AllocVec<Attraction<F>>,
    forces: AllocVec<Box<dyn Force<F>>>,
    gravity: Vec2<F>,
    drag: F,
    drag_forces: AllocVec<Vec2<F>>,
    integrator: Integrator<F>,
    optimized: bool,
    criteria: EquilibriumCriteria,
    rest_tolerance: F,
    equilibrium: bool,
}

impl<F: Float> PointSystem<F> {
    pub fn new(gravity_x: F, gravity_y: F, drag: F) -> Self {
        Self::with_config(SystemConfig::new().with_gravity(Vec2::new(gravity_x, gravity_y)).with_drag(drag))
    }

    pub fn with_config(config: SystemConfig<F>) -> Self {
        PointSystem {
            points: AllocVec::new(),
            springs: AllocVec::new(),
            attractions: AllocVec::new(),
            forces: AllocVec::new(),
            gravity: config.gravity,
            drag: config.drag,
            drag_forces: AllocVec::new(),
            integrator: Integrator::new(config.method),
            optimized: config.optimized,
            criteria: config.criteria,
            rest_tolerance: config.rest_tolerance,
            equilibrium: false,
        }
    }

    // ---- configuration ----

    pub fn gravity(&self) -> Vec2<F> { self.gravity }

    pub fn set_gravity(&mut self, x: F, y: F) -> &mut Self {
        self.gravity.set(x, y);
        self
    }

    pub fn drag(&self) -> F { self.drag }

    /// Negative drag is accepted as is.
    pub fn set_drag(&mut self, drag: F) -> &mut Self {
        self.drag = drag;
        self
    }

    /// Toggle equilibrium tracking after each tick.
    pub fn optimize(&mut self, enabled: bool) -> &mut Self {
        self.optimized = enabled;
        self
    }

    pub fn is_optimized(&self) -> bool { self.optimized }

    pub fn set_equilibrium_criteria(&mut self, points: bool, springs: bool, attractions: bool) -> &mut Self {
        self.criteria = EquilibriumCriteria::new(points, springs, attractions);
        self
    }

    pub fn equilibrium_criteria(&self) -> EquilibriumCriteria { self.criteria }

    pub fn rest_tolerance(&self) -> F { self.rest_tolerance }

    pub fn set_rest_tolerance(&mut self, tolerance: F) -> &mut Self {
        self.rest_tolerance = tolerance.abs();
        self
    }

    pub fn integration_method(&self) -> IntegrationMethod { self.integrator.method() }

    pub fn set_integrator(&mut self, method: IntegrationMethod) -> &mut Self {
        self.integrator.set_method(method);
        self
    }

    // ---- entities ----

    fn check_point(&self, index: PointId) -> Result<(), PhysicsError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(PhysicsError::PointOutOfBounds { index, count: self.points.len() })
        }
    }

    fn check_pair(&self, a: PointId, b: PointId) -> Result<(), PhysicsError> {
        self.check_point(a)?;
        self.check_point(b)?;
        if a == b {
            return Err(PhysicsError::SelfConnection { index: a });
        }
        Ok(())
    }

    pub fn add_point(&mut self, point: Point<F>) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Add a spring between two distinct points of this system.
    pub fn add_spring(&mut self, spring: Spring<F>) -> Result<&mut Self, PhysicsError> {
        self.check_pair(spring.a, spring.b)?;
        self.springs.push(spring);
        Ok(self)
    }

    /// Add an attraction between two distinct points of this system.
    pub fn add_attraction(&mut self, attraction: Attraction<F>) -> Result<&mut Self, PhysicsError> {
        self.check_pair(attraction.a, attraction.b)?;
        self.attractions.push(attraction);
        Ok(self)
    }

    /// Register a custom force, evaluated after springs and attractions.
    pub fn add_force<T: Force<F> + 'static>(&mut self, force: T) -> &mut Self {
        self.forces.push(Box::new(force));
        self
    }

    pub fn create_point(&mut self, mass: F, x: F, y: F) -> Result<PointId, PhysicsError> {
        let point = Point::new(mass, x, y)?;
        self.add_point(point);
        Ok(self.points.len() - 1)
    }

    pub fn create_spring(
        &mut self,
        a: PointId,
        b: PointId,
        strength: F,
        damping: F,
        rest_length: F,
    ) -> Result<SpringId, PhysicsError> {
        self.add_spring(Spring::new(a, b, strength, damping, rest_length))?;
        Ok(self.springs.len() - 1)
    }

    pub fn create_attraction(
        &mut self,
        a: PointId,
        b: PointId,
        strength: F,
        min_distance: F,
    ) -> Result<AttractionId, PhysicsError> {
        self.add_attraction(Attraction::new(a, b, strength, min_distance)?)?;
        Ok(self.attractions.len() - 1)
    }

    /// Remove a point together with every spring and attraction attached to
    /// it. Later points shift down by one and the remaining endpoints are
    /// renumbered to match. Custom forces are not renumbered.
    pub fn remove_point(&mut self, index: PointId) -> Result<Point<F>, PhysicsError> {
        self.check_point(index)?;
        let point = self.points.remove(index);
        self.springs.retain(|s| !s.connects(index));
        self.attractions.retain(|a| !a.connects(index));

        let renumber = |i: &mut PointId| {
            if *i > index {
                *i -= 1;
            }
        };
        for s in self.springs.iter_mut() {
            renumber(&mut s.a);
            renumber(&mut s.b);
        }
        for a in self.attractions.iter_mut() {
            renumber(&mut a.a);
            renumber(&mut a.b);
        }
        Ok(point)
    }

    pub fn remove_spring(&mut self, index: SpringId) -> Result<Spring<F>, PhysicsError> {
        if index >= self.springs.len() {
            return Err(PhysicsError::SpringOutOfBounds { index, count: self.springs.len() });
        }
        Ok(self.springs.remove(index))
    }

    pub fn remove_attraction(&mut self, index: AttractionId) -> Result<Attraction<F>, PhysicsError> {
        if index >= self.attractions.len() {
            return Err(PhysicsError::AttractionOutOfBounds { index, count: self.attractions.len() });
        }
        Ok(self.attractions.remove(index))
    }

    pub fn remove_force(&mut self, index: usize) -> Result<Box<dyn Force<F>>, PhysicsError> {
        if index >= self.forces.len() {
            return Err(PhysicsError::ForceOutOfBounds { index, count: self.forces.len() });
        }
        Ok(self.forces.remove(index))
    }

    /// Drop every point, spring and attraction. Gravity, drag, the
    /// integrator, custom forces and flags stay as they are.
    pub fn clear(&mut self) {
        self.points.clear();
        self.springs.clear();
        self.attractions.clear();
    }

    // ---- stepping ----

    /// Refill the drag buffer with `-velocity * drag` for every point.
    fn sample_drag(&mut self) {
        let drag = self.drag;
        self.drag_forces.clear();
        self.drag_forces.extend(self.points.iter().map(|p| p.velocity.scale(-drag)));
    }

    /// Add gravity, drag, springs, attractions and custom forces into the
    /// point accumulators, on top of whatever is already there.
    pub fn apply_forces(&mut self) -> &mut Self {
        self.sample_drag();
        accumulate(
            &mut self.points,
            self.gravity,
            &self.drag_forces,
            &self.springs,
            &self.attractions,
            &self.forces,
        );
        self
    }

    /// Zero every point's force accumulator.
    pub fn clear_forces(&mut self) -> &mut Self {
        for p in self.points.iter_mut() {
            p.clear();
        }
        self
    }

    /// Advance the simulation by `dt`.
    pub fn tick(&mut self, dt: F) -> &mut Self {
        self.tick_observed(dt, &mut NoOpStepObserver)
    }

    pub fn tick_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) -> &mut Self {
        self.sample_drag();
        let gravity = self.gravity;
        let drag_forces = &self.drag_forces;
        let springs = &self.springs;
        let attractions = &self.attractions;
        let forces = &self.forces;
        self.integrator.step(
            &mut self.points,
            dt,
            |points| accumulate(points, gravity, drag_forces, springs, attractions, forces),
            observer,
        );

        let equilibrium = if self.optimized {
            self.equilibrium = !self.needs_update();
            Some(self.equilibrium)
        } else {
            None
        };
        observer.on_step_complete(equilibrium);
        self
    }

    /// True while any tracked entity is still moving.
    pub fn needs_update(&self) -> bool {
        let eps = self.rest_tolerance;
        let points = &self.points;
        (self.criteria.points && points.iter().any(|p| !p.resting_within(eps)))
            || (self.criteria.springs && self.springs.iter().any(|s| !s.resting_within(points, eps)))
            || (self.criteria.attractions && self.attractions.iter().any(|a| !a.resting_within(points, eps)))
    }

    /// Equilibrium as of the last optimized tick. Never set while
    /// optimization is off.
    pub fn is_at_equilibrium(&self) -> bool { self.equilibrium }

    // ---- read surface ----

    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn point(&self, index: PointId) -> Option<&Point<F>> { self.points.get(index) }
    pub fn point_mut(&mut self, index: PointId) -> Option<&mut Point<F>> { self.points.get_mut(index) }
    pub fn point_count(&self) -> usize { self.points.len() }

    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn spring(&self, index: SpringId) -> Option<&Spring<F>> { self.springs.get(index) }
    pub fn spring_mut(&mut self, index: SpringId) -> Option<&mut Spring<F>> { self.springs.get_mut(index) }
    pub fn spring_count(&self) -> usize { self.springs.len() }

    pub fn attractions(&self) -> &[Attraction<F>] { &self.attractions }
    pub fn attraction(&self, index: AttractionId) -> Option<&Attraction<F>> { self.attractions.get(index) }
    pub fn attraction_mut(&mut self, index: AttractionId) -> Option<&mut Attraction<F>> {
        self.attractions.get_mut(index)
    }
    pub fn attraction_count(&self) -> usize { self.attractions.len() }

    pub fn force_count(&self) -> usize { self.forces.len() }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.position).collect()
    }
}

impl<F: Float> Default for PointSystem<F> {
    fn default() -> Self {
        Self::with_config(SystemConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_configuration() {
        let mut system: PointSystem<f32> = PointSystem::default();
        system
            .set_gravity(0.0, -9.8)
            .set_drag(0.5)
            .optimize(true)
            .set_equilibrium_criteria(true, false, true)
            .set_integrator(IntegrationMethod::ModifiedEuler);
        assert_eq!(system.gravity(), Vec2::new(0.0, -9.8));
        assert_eq!(system.drag(), 0.5);
        assert!(system.is_optimized());
        assert_eq!(system.equilibrium_criteria(), EquilibriumCriteria::new(true, false, true));
        assert_eq!(system.integration_method(), IntegrationMethod::ModifiedEuler);
    }

    #[test]
    fn add_point_chains() {
        let mut system: PointSystem<f32> = PointSystem::default();
        system
            .add_point(Point::new(1.0, 0.0, 0.0).unwrap())
            .add_point(Point::new(1.0, 1.0, 0.0).unwrap());
        assert_eq!(system.point_count(), 2);
    }

    #[test]
    fn springs_must_reference_known_points() {
        let mut system: PointSystem<f32> = PointSystem::default();
        let a = system.create_point(1.0, 0.0, 0.0).unwrap();
        assert_eq!(
            system.create_spring(a, 3, 1.0, 0.0, 1.0),
            Err(PhysicsError::PointOutOfBounds { index: 3, count: 1 })
        );
        assert_eq!(
            system.create_attraction(5, a, 1.0, 1.0),
            Err(PhysicsError::PointOutOfBounds { index: 5, count: 1 })
        );
        assert_eq!(system.spring_count(), 0);
        assert_eq!(system.attraction_count(), 0);
    }

    #[test]
    fn connections_need_two_distinct_points() {
        let mut system: PointSystem<f64> = PointSystem::default();
        let a = system.create_point(1.0, 0.0, 0.0).unwrap();
        assert_eq!(
            system.create_spring(a, a, 1.0, 0.0, 1.0),
            Err(PhysicsError::SelfConnection { index: a })
        );
        assert_eq!(
            system.create_attraction(a, a, 1.0, 1.0),
            Err(PhysicsError::SelfConnection { index: a })
        );
        assert!(system.add_attraction(Attraction::new(a, a, 1.0, 1.0).unwrap()).is_err());
        assert_eq!(system.spring_count(), 0);
        assert_eq!(system.attraction_count(), 0);
    }

    #[test]
    fn default_drag_is_exact_in_double_precision() {
        let system: PointSystem<f64> = PointSystem::default();
        assert_eq!(system.drag(), 0.001);
    }

    #[test]
    fn create_point_rejects_bad_mass() {
        let mut system: PointSystem<f64> = PointSystem::default();
        assert_eq!(system.create_point(0.0, 0.0, 0.0), Err(PhysicsError::InvalidMass));
        assert_eq!(system.point_count(), 0);
    }

    #[test]
    fn drag_opposes_velocity() {
        let mut system: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.5);
        let p = system.create_point(1.0, 0.0, 0.0).unwrap();
        system.point_mut(p).unwrap().velocity = Vec2::new(4.0, -2.0);
        system.apply_forces();
        assert_eq!(system.point(p).unwrap().force, Vec2::new(-2.0, 1.0));
        system.clear_forces();
        assert!(system.point(p).unwrap().force.is_zero());
    }

    #[test]
    fn drag_is_held_for_the_whole_tick() {
        let mut system: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.5);
        let p = system.create_point(1.0, 0.0, 0.0).unwrap();
        system.point_mut(p).unwrap().velocity = Vec2::new(1.0, 0.0);
        system.tick(1.0);
        let point = system.point(p).unwrap();
        // Constant force -0.5 over one unit of time.
        assert!((point.velocity.x - 0.5).abs() < 1e-12, "vx = {}", point.velocity.x);
        assert!((point.position.x - 0.75).abs() < 1e-12, "x = {}", point.position.x);
    }
}
