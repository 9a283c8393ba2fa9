//! `v2x-sim` — the step orchestrator of the v2x mesh simulation engine.
//!
//! # One step
//!
//! ```text
//! step(options):
//!   ① Advance   — if options.advance, move every vehicle (dt = 1) in
//!                 spawn order and bump the tick.
//!   ② Observe   — one observed position per vehicle (noisy iff
//!                 simulate_noise), reused for its broadcast and all of
//!                 its mesh tests this tick.
//!   ③ Broadcast — one BroadcastMessage per vehicle.
//!   ④ Pairs     — for each unordered pair in spawn order:
//!                   hazard test on true kinematic state → Warning
//!                   mesh test on observed positions    → CommLink
//!                   (dropped with loss_probability iff simulate_loss)
//!   ⑤ Return    — StepOutput { messages, warnings, comm_links }.
//! ```
//!
//! The simulator is the sole mutable core; everything it calls is a
//! stateless function of the data it owns.  It is single-threaded and
//! request/response — any periodic scheduling belongs to the caller.
//!
//! # Quick-start
//!
//! ```rust
//! use v2x_core::SimConfig;
//! use v2x_sim::{StepOptions, WorldSimulator};
//!
//! let config = SimConfig { seed: Some(42), ..SimConfig::default() };
//! let mut sim = WorldSimulator::new(config).unwrap();
//! let output = sim.step(&StepOptions::default());
//! assert_eq!(output.messages.len(), 4);
//! ```

pub mod error;
pub mod observer;
pub mod options;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use options::{StepOptions, StepOutput};
pub use sim::WorldSimulator;
