//! Per-vehicle, per-tick broadcast snapshot.

use std::fmt;

use v2x_core::{Vec2, VehicleId};

/// What one vehicle announces to the mesh each tick.
///
/// All values are rounded to two decimals at construction so snapshots
/// compare deterministically regardless of how they were produced.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BroadcastMessage {
    pub id: VehicleId,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub heading: f64,
}

impl BroadcastMessage {
    pub fn new(id: VehicleId, position: Vec2, speed: f64, heading_deg: f64) -> Self {
        Self {
            id,
            x:       round2(position.x),
            y:       round2(position.y),
            speed:   round2(speed),
            heading: round2(heading_deg),
        }
    }
}

impl fmt::Display for BroadcastMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: pos=({:.2}, {:.2}) speed={:.2} heading={:.2}",
            self.id, self.x, self.y, self.speed, self.heading
        )
    }
}

/// Round to two decimal places.
#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
