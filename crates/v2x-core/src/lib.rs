//! `v2x-core` — foundational types for the v2x mesh simulation engine.
//!
//! This crate is a dependency of every other `v2x-*` crate.  It intentionally
//! has no `v2x-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`ids`]     | `VehicleId`                                     |
//! | [`vec2`]    | `Vec2` plane point/vector math                  |
//! | [`tick`]    | `Tick` step counter                             |
//! | [`rng`]     | `SimRng` (single seedable source per simulator) |
//! | [`config`]  | `SimConfig` and validation                      |
//! | [`error`]   | `ConfigError`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tick;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::ConfigError;
pub use ids::VehicleId;
pub use rng::SimRng;
pub use tick::Tick;
pub use vec2::Vec2;
