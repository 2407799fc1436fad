//! Error types for physics operations.

use core::fmt;

/// Errors raised when building or editing a point system.
///
/// Stepping the simulation never fails; these only come back from
/// constructors and collection edits.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Attraction minimum distance must be positive and finite.
    InvalidMinDistance,
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
    /// Spring index is out of bounds.
    SpringOutOfBounds { index: usize, count: usize },
    /// Attraction index is out of bounds.
    AttractionOutOfBounds { index: usize, count: usize },
    /// Custom force index is out of bounds.
    ForceOutOfBounds { index: usize, count: usize },
    /// Spring or attraction with both ends on the same point.
    SelfConnection { index: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidMinDistance => {
                write!(f, "minimum distance must be positive and finite")
            }
            PhysicsError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SpringOutOfBounds { index, count } => {
                write!(f, "spring index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::AttractionOutOfBounds { index, count } => {
                write!(f, "attraction index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::ForceOutOfBounds { index, count } => {
                write!(f, "force index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SelfConnection { index } => {
                write!(f, "point {} cannot be connected to itself", index)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}
