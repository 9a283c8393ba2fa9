//! Configuration error type.
//!
//! Construction is the only fallible surface of the engine: once a simulator
//! exists, every step resolves degenerate inputs to a no-effect outcome
//! instead of failing.

use thiserror::Error;

/// Rejection reasons for an invalid [`SimConfig`](crate::SimConfig).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("vehicle count must be at least 1, got {0}")]
    VehicleCount(usize),

    #[error("speed_min {min} exceeds speed_max {max}")]
    SpeedBounds { min: f64, max: f64 },

    #[error("speed_min must be non-negative, got {0}")]
    NegativeSpeed(f64),

    #[error("{name} radius must be positive, got {value}")]
    NonPositiveRadius { name: &'static str, value: f64 },
}
