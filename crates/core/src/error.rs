//! Error types for noise construction and sampling.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Which sample coordinate(s) fell outside the unit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainAxis {
    /// Only `x` is out of range.
    X,
    /// Only `y` is out of range.
    Y,
    /// Both coordinates are out of range.
    Both,
}

impl DomainAxis {
    /// Classify a coordinate pair, returning `None` when both lie in `[0, 1]`.
    ///
    /// NaN never lies in the domain.
    pub fn classify(x: f64, y: f64) -> Option<Self> {
        let x_ok = (0.0..=1.0).contains(&x);
        let y_ok = (0.0..=1.0).contains(&y);
        match (x_ok, y_ok) {
            (true, true) => None,
            (false, true) => Some(DomainAxis::X),
            (true, false) => Some(DomainAxis::Y),
            (false, false) => Some(DomainAxis::Both),
        }
    }
}

impl fmt::Display for DomainAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainAxis::X => write!(f, "x"),
            DomainAxis::Y => write!(f, "y"),
            DomainAxis::Both => write!(f, "x and y"),
        }
    }
}

/// Errors that can occur while building or sampling a noise engine.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A construction parameter would make sampling undefined.
    InvalidConfiguration {
        /// Name of the offending parameter (e.g. `"octaves"`).
        parameter: &'static str,
        /// Human-readable constraint description.
        reason: String,
    },
    /// A sample coordinate was outside `[0, 1]`.
    OutOfDomain {
        /// Requested x coordinate.
        x: f64,
        /// Requested y coordinate.
        y: f64,
        /// Coordinate(s) that violated the domain.
        axis: DomainAxis,
    },
}

impl NoiseError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        NoiseError::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::InvalidConfiguration { parameter, reason } => {
                write!(f, "Invalid configuration: {parameter} {reason}")
            }
            NoiseError::OutOfDomain { x, y, axis } => write!(
                f,
                "Coordinate {axis} outside [0, 1]: expected x/y between zero and one, got ({x}, {y})"
            ),
        }
    }
}

impl std::error::Error for NoiseError {}
