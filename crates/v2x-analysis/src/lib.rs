//! `v2x-analysis` — the pairwise analyses run over the fleet each tick.
//!
//! Two distinct tests with distinct roles:
//!
//! - [`hazard`] — the canonical collision predictor: constant-velocity
//!   closest-approach, flagging a pair when the predicted minimum distance
//!   falls within the collision-risk radius.
//! - [`proximity`] — the communication-mesh test: current Euclidean distance
//!   against the communication radius, velocity-independent, plus the
//!   optional degradation modes (position noise, packet loss).
//!
//! Both are stateless functions of the data the simulator owns, symmetric in
//! argument order, and resolve every degenerate input (zero relative
//! velocity, coincident positions, non-finite intermediates) to "no risk" /
//! "no link" rather than an error.

pub mod hazard;
pub mod proximity;


pub use hazard::{Warning, predict_collision};
pub use proximity::{CommLink, comm_link, perturb_position};
