//! Reproducible fleet spawning.

use v2x_core::{SimConfig, SimRng, Vec2, VehicleId};

use crate::Vehicle;

/// Produce `config.vehicle_count` vehicles with ids `0..count` in spawn order.
///
/// Per vehicle: position uniform in `[-field_radius, field_radius]²`, speed
/// uniform in `[speed_min, speed_max]`, heading uniform in `[0, 360)`.  All
/// draws come from the one `rng`, so a fixed seed reproduces the fleet
/// exactly.  The caller is expected to have validated `config` first; the
/// ranges here are non-empty for any config that passes
/// [`SimConfig::validate`].
pub fn spawn_fleet(config: &SimConfig, rng: &mut SimRng) -> Vec<Vehicle> {
    (0..config.vehicle_count)
        .map(|i| {
            let x = rng.gen_range(-config.field_radius..=config.field_radius);
            let y = rng.gen_range(-config.field_radius..=config.field_radius);
            let speed = rng.gen_range(config.speed_min..=config.speed_max);
            let heading = rng.gen_range(0.0..360.0);
            Vehicle::new(VehicleId(i as u32), Vec2::new(x, y), heading, speed)
        })
        .collect()
}
