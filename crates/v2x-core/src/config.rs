//! Simulator configuration.

use crate::ConfigError;

/// Immutable-per-instance configuration for a `WorldSimulator`.
///
/// Changing any of these (fleet size, speed bounds, radii) means rebuilding
/// the whole fleet: the engine deliberately reconstructs rather than merging
/// partial state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of vehicles to spawn.  Must be at least 1.
    pub vehicle_count: usize,

    /// Lower bound of the uniform spawn-speed range.  Non-negative.
    pub speed_min: f64,

    /// Upper bound of the uniform spawn-speed range.  Must be `>= speed_min`.
    pub speed_max: f64,

    /// Half-width of the square spawn field: positions are drawn uniformly
    /// from `[-field_radius, field_radius]²`.
    pub field_radius: f64,

    /// Maximum distance at which two vehicles hold a communication link.
    pub comm_radius: f64,

    /// Predicted closest-approach distance at or below which a pair is
    /// flagged as a collision risk.
    pub collision_radius: f64,

    /// Master RNG seed.  `None` draws one from OS entropy at construction;
    /// the resolved value is queryable on the simulator for replay.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    /// The original radar demo's defaults: 4 vehicles at speeds 5–15 on a
    /// 100-unit field with a 60-unit mesh range and 15-unit risk radius.
    fn default() -> Self {
        Self {
            vehicle_count:    4,
            speed_min:        5.0,
            speed_max:        15.0,
            field_radius:     100.0,
            comm_radius:      60.0,
            collision_radius: 15.0,
            seed:             None,
        }
    }
}

impl SimConfig {
    /// Reject configurations the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vehicle_count < 1 {
            return Err(ConfigError::VehicleCount(self.vehicle_count));
        }
        if self.speed_min < 0.0 {
            return Err(ConfigError::NegativeSpeed(self.speed_min));
        }
        if self.speed_min > self.speed_max {
            return Err(ConfigError::SpeedBounds {
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        for (name, value) in [
            ("field", self.field_radius),
            ("communication", self.comm_radius),
            ("collision", self.collision_radius),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveRadius { name, value });
            }
        }
        Ok(())
    }
}
