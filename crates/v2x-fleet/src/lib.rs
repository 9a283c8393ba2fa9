//! `v2x-fleet` — per-vehicle state and fleet spawning.
//!
//! A [`Vehicle`] is a point agent with a fixed heading and speed; only its
//! position changes, one kinematic step at a time.  [`spawn_fleet`] produces
//! a reproducible initial fleet from a [`SimConfig`](v2x_core::SimConfig)
//! and the simulator's RNG.

pub mod broadcast;
pub mod spawner;
pub mod vehicle;


pub use broadcast::BroadcastMessage;
pub use spawner::spawn_fleet;
pub use vehicle::{TRAIL_CAPACITY, Vehicle};
