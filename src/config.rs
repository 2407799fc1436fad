//! Configuration types for a point system.

use crate::float::Float;
use crate::integrator::IntegrationMethod;
use crate::point::REST_TOLERANCE;
use crate::vec::Vec2;

/// Default gravity component on both axes.
pub const DEFAULT_GRAVITY: f64 = 0.0;
/// Default drag coefficient.
pub const DEFAULT_DRAG: f64 = 0.001;
/// Step size used by callers that have no clock of their own.
pub const DEFAULT_TIME_STEP: f64 = 1.0;

/// Which entity collections take part in the equilibrium decision.
///
/// An excluded collection never keeps the system out of equilibrium.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EquilibriumCriteria {
    pub points: bool,
    pub springs: bool,
    pub attractions: bool,
}

impl EquilibriumCriteria {
    pub fn new(points: bool, springs: bool, attractions: bool) -> Self {
        EquilibriumCriteria { points, springs, attractions }
    }
}

impl Default for EquilibriumCriteria {
    fn default() -> Self {
        EquilibriumCriteria { points: true, springs: true, attractions: true }
    }
}

/// Configuration for a [`PointSystem`](crate::PointSystem).
///
/// # Builder Pattern
/// ```
/// use pointmass::config::SystemConfig;
/// use pointmass::vec::Vec2;
/// use pointmass::IntegrationMethod;
///
/// let config: SystemConfig<f32> = SystemConfig::new()
///     .with_gravity(Vec2::new(0.0, -9.81))
///     .with_drag(0.05)
///     .with_method(IntegrationMethod::ModifiedEuler)
///     .with_optimization(true);
/// ```
#[derive(Clone, Debug)]
pub struct SystemConfig<F: Float> {
    /// Force added to every point each evaluation. Default: zero.
    pub gravity: Vec2<F>,
    /// Velocity drag coefficient; each point receives `-velocity * drag`.
    /// Not validated, so negative values inject energy. Default: 0.001.
    pub drag: F,
    /// Integration scheme. Default: Runge–Kutta 4.
    pub method: IntegrationMethod,
    /// Track equilibrium after every tick. Default: off.
    pub optimized: bool,
    /// Collections polled for equilibrium. Default: all.
    pub criteria: EquilibriumCriteria,
    /// Threshold under which speeds, stretches and forces count as resting.
    pub rest_tolerance: F,
}

impl<F: Float> SystemConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SystemConfig {
            gravity: Vec2::new(F::from_f64(DEFAULT_GRAVITY), F::from_f64(DEFAULT_GRAVITY)),
            drag: F::from_f64(DEFAULT_DRAG),
            method: IntegrationMethod::default(),
            optimized: false,
            criteria: EquilibriumCriteria::default(),
            rest_tolerance: F::from_f64(REST_TOLERANCE),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_drag(mut self, drag: F) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_optimization(mut self, optimized: bool) -> Self {
        self.optimized = optimized;
        self
    }

    pub fn with_criteria(mut self, criteria: EquilibriumCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Set the resting tolerance. Negative values are taken by magnitude.
    pub fn with_rest_tolerance(mut self, tolerance: F) -> Self {
        self.rest_tolerance = tolerance.abs();
        self
    }
}

impl<F: Float> Default for SystemConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
