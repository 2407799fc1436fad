//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation ticks.
///
/// Implement this trait to monitor a tick (debugging, visualization,
/// profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after every force evaluation. `stage` counts from zero; a
    /// Runge–Kutta tick evaluates forces four times, modified Euler once.
    fn on_forces_applied(&mut self, _stage: usize) {}

    /// Called once points hold their new positions and velocities.
    fn on_integrate(&mut self) {}

    /// Called when a tick is complete. `equilibrium` is `Some` only when
    /// the system is tracking equilibrium.
    fn on_step_complete(&mut self, _equilibrium: Option<bool>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
