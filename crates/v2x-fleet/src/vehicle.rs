//! Vehicle state and the single-step kinematic advance.

use std::collections::VecDeque;

use v2x_core::{Vec2, VehicleId};

use crate::BroadcastMessage;

/// Maximum number of recent positions kept in a vehicle's trail.
pub const TRAIL_CAPACITY: usize = 20;

/// One point vehicle on the plane.
///
/// Heading and speed are fixed for the vehicle's lifetime (no acceleration,
/// no steering model); only `position` changes, via [`advance`](Self::advance).
/// The trail is a bounded history of recent positions kept purely for
/// rendering — it carries no simulation semantics.
#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id: VehicleId,
    pub position: Vec2,
    heading_deg: f64,
    speed: f64,
    trail: VecDeque<Vec2>,
}

impl Vehicle {
    /// Create a vehicle at `position`.  The heading is normalized into
    /// `[0, 360)` and the trail starts with the spawn position.
    pub fn new(id: VehicleId, position: Vec2, heading_deg: f64, speed: f64) -> Self {
        let mut trail = VecDeque::with_capacity(TRAIL_CAPACITY);
        trail.push_back(position);
        Self {
            id,
            position,
            heading_deg: heading_deg.rem_euclid(360.0),
            speed,
            trail,
        }
    }

    /// Heading in degrees, always within `[0, 360)`.
    #[inline]
    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    /// Scalar speed, fixed at spawn.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Constant velocity vector: `speed * (cos θ, sin θ)`.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::from_heading(self.heading_deg) * self.speed
    }

    /// Recent positions, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.trail.iter().copied()
    }

    /// Advance the position by `dt` seconds of constant-velocity motion and
    /// record it in the trail, evicting the oldest entry past capacity.
    ///
    /// Pure kinematics: heading and speed are untouched, and there is no
    /// failure mode.
    pub fn advance(&mut self, dt: f64) {
        self.position += self.velocity() * dt;
        if self.trail.len() == TRAIL_CAPACITY {
            self.trail.pop_front();
        }
        self.trail.push_back(self.position);
    }

    /// Snapshot of this vehicle's true state.
    pub fn broadcast(&self) -> BroadcastMessage {
        self.broadcast_from(self.position)
    }

    /// Snapshot reporting `observed` as the position — used when degradation
    /// modes perturb what the vehicle announces to the mesh.
    pub fn broadcast_from(&self, observed: Vec2) -> BroadcastMessage {
        BroadcastMessage::new(self.id, observed, self.speed, self.heading_deg)
    }
}
