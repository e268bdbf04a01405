//! `brain-core`: foundational types for the brain NPC scheduler.
//!
//! This crate is a dependency of every other `brain-*` crate.  It has no
//! `brain-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `bitflags`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `BrainId`                                               |
//! | [`geo`]      | `Vec3` / `Position`, distances, direction helpers       |
//! | [`time`]     | `SimTime`, `FrameTime`, `SimClock`                      |
//! | [`rng`]      | `BrainRng`: injectable deterministic random source     |
//! | [`status`]   | `StatusFlags` queried from an owner                     |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Position, Vec3};
pub use ids::BrainId;
pub use rng::BrainRng;
pub use status::StatusFlags;
pub use time::{FrameTime, SimClock, SimTime};
