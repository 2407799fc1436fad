//! Fixed-step integrators that advance free points from accumulated forces.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Numerical scheme used by [`Integrator::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum IntegrationMethod {
    /// Classic fourth-order Runge–Kutta: four force evaluations per step,
    /// combined with weights 1, 2, 2, 1 over 6.
    #[default]
    RungeKutta4,
    /// One force evaluation per step: `x += v·dt + ½·a·dt²`, `v += a·dt`.
    ModifiedEuler,
}

impl IntegrationMethod {
    /// Force evaluations per step.
    pub fn stages(self) -> usize {
        match self {
            IntegrationMethod::RungeKutta4 => 4,
            IntegrationMethod::ModifiedEuler => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct State<F: Float> {
    position: Vec2<F>,
    velocity: Vec2<F>,
}

/// dx/dt and dv/dt sampled at one stage.
#[derive(Copy, Clone, Debug, Default)]
struct Derivative<F: Float> {
    velocity: Vec2<F>,
    acceleration: Vec2<F>,
}

/// Advances points by one time step.
///
/// Holds no simulation data of its own, only scratch buffers that are
/// resized to the point count and reused across steps.
#[derive(Clone, Debug)]
pub struct Integrator<F: Float> {
    method: IntegrationMethod,
    start: AllocVec<State<F>>,
    samples: [AllocVec<Derivative<F>>; 4],
}

fn evaluate<F, A, O>(points: &mut [Point<F>], apply_forces: &mut A, observer: &mut O, stage: usize)
where
    F: Float,
    A: FnMut(&mut [Point<F>]),
    O: StepObserver,
{
    for p in points.iter_mut() {
        p.clear();
    }
    apply_forces(points);
    observer.on_forces_applied(stage);
}

impl<F: Float> Integrator<F> {
    pub fn new(method: IntegrationMethod) -> Self {
        Integrator {
            method,
            start: AllocVec::new(),
            samples: [AllocVec::new(), AllocVec::new(), AllocVec::new(), AllocVec::new()],
        }
    }

    pub fn method(&self) -> IntegrationMethod { self.method }

    pub fn set_method(&mut self, method: IntegrationMethod) {
        self.method = method;
    }

    /// Advance every free point by `dt`.
    ///
    /// `apply_forces` is called once per stage on freshly cleared
    /// accumulators and must add every force acting on the points at their
    /// current (possibly provisional) state. Fixed points are never moved.
    /// On return every point has aged by `dt` and every accumulator is zero.
    pub fn step<A, O>(&mut self, points: &mut [Point<F>], dt: F, mut apply_forces: A, observer: &mut O)
    where
        A: FnMut(&mut [Point<F>]),
        O: StepObserver,
    {
        match self.method {
            IntegrationMethod::RungeKutta4 => self.runge_kutta(points, dt, &mut apply_forces, observer),
            IntegrationMethod::ModifiedEuler => Self::modified_euler(points, dt, &mut apply_forces, observer),
        }
        observer.on_integrate();

        for p in points.iter_mut() {
            p.grow_older(dt);
            p.clear();
        }
    }

    fn modified_euler<A, O>(points: &mut [Point<F>], dt: F, apply_forces: &mut A, observer: &mut O)
    where
        A: FnMut(&mut [Point<F>]),
        O: StepObserver,
    {
        evaluate(points, apply_forces, observer, 0);
        let half_dt_sq = F::half() * dt * dt;
        for p in points.iter_mut().filter(|p| p.is_free()) {
            let acceleration = p.force.scale(p.inv_mass());
            let displacement = p.velocity.scale(dt) + acceleration.scale(half_dt_sq);
            p.position += displacement;
            p.velocity += acceleration.scale(dt);
        }
    }

    fn runge_kutta<A, O>(&mut self, points: &mut [Point<F>], dt: F, apply_forces: &mut A, observer: &mut O)
    where
        A: FnMut(&mut [Point<F>]),
        O: StepObserver,
    {
        let n = points.len();
        self.start.clear();
        self.start.extend(points.iter().map(|p| State { position: p.position, velocity: p.velocity }));
        for samples in self.samples.iter_mut() {
            samples.clear();
            samples.resize(n, Derivative::default());
        }

        let half_dt = dt * F::half();
        // Offset from the start state at which the next stage is sampled.
        let offsets = [half_dt, half_dt, dt];

        for stage in 0..4 {
            evaluate(points, apply_forces, observer, stage);
            for (i, p) in points.iter_mut().enumerate() {
                if p.is_fixed() {
                    continue;
                }
                let k = Derivative { velocity: p.velocity, acceleration: p.force.scale(p.inv_mass()) };
                self.samples[stage][i] = k;
                if let Some(&h) = offsets.get(stage) {
                    let s = self.start[i];
                    p.position = s.position + k.velocity.scale(h);
                    p.velocity = s.velocity + k.acceleration.scale(h);
                }
            }
        }

        let two = F::two();
        let sixth_dt = dt / F::from_f32(6.0);
        let [k1, k2, k3, k4] = &self.samples;
        for (i, p) in points.iter_mut().enumerate() {
            if p.is_fixed() {
                continue;
            }
            let s = self.start[i];
            let velocity_sum = k1[i].velocity + (k2[i].velocity + k3[i].velocity).scale(two) + k4[i].velocity;
            let acceleration_sum =
                k1[i].acceleration + (k2[i].acceleration + k3[i].acceleration).scale(two) + k4[i].acceleration;
            p.position = s.position + velocity_sum.scale(sixth_dt);
            p.velocity = s.velocity + acceleration_sum.scale(sixth_dt);
        }
    }
}

impl<F: Float> Default for Integrator<F> {
    fn default() -> Self {
        Self::new(IntegrationMethod::default())
    }
}
