//! `reach-core` — foundational types for the reachmap intercept-field toolkit.
//!
//! This crate is a dependency of every other `reach-*` crate.  It has no
//! `reach-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                             |
//! | [`point`]   | `FieldPoint`, `Velocity`, Euclidean distance          |
//! | [`agent`]   | `Agent` record, uniform population sampling           |
//! | [`grid`]    | `GridConfig`: dimensions, scale, worker count         |
//! | [`rng`]     | `SimRng` (seeded, deterministic)                      |
//! | [`error`]   | `ConfigError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod agent;
pub mod error;
pub mod grid;
pub mod ids;
pub mod point;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, SampleBounds, sample_population};
pub use error::{ConfigError, CoreResult};
pub use grid::GridConfig;
pub use ids::AgentId;
pub use point::{FieldPoint, Velocity};
pub use rng::SimRng;
