//! Point masses, damped springs and attractions for procedural motion.
//!
//! `pointmass` advances a mutable graph of particles in time: springs pull
//! connected points toward a rest length, attractions pull (or push) pairs of
//! points with an inverse-square law, and gravity and drag act on everything.
//! A caller ticks the [`PointSystem`] once per frame and reads positions back.
//!
//! # Features
//!
//! - **Runge–Kutta 4 integration**: exact for constant forces, with a
//!   single-evaluation modified Euler scheme as an alternative
//! - **Index-based graph**: springs and attractions refer to points by index
//! - **Fixed points**: anchors that feel force but never move
//! - **Equilibrium tracking**: optional per-tick "is anything still moving" check
//! - **Custom forces**: plug extra contributors in through the [`Force`] trait
//! - **Observable**: Monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod spring;
pub mod attraction;
pub mod force;
pub mod integrator;
pub mod system;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::{Point, PointId, REST_TOLERANCE};
pub use spring::{Spring, SpringId};
pub use attraction::{Attraction, AttractionId};
pub use force::Force;
pub use integrator::{IntegrationMethod, Integrator};
pub use system::PointSystem;
pub use config::{EquilibriumCriteria, SystemConfig, DEFAULT_DRAG, DEFAULT_GRAVITY, DEFAULT_TIME_STEP};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
