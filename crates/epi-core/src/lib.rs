//! `epi-core` — foundational types for the `epi-sim` epidemic simulation
//! framework.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`ids`]   | `PersonId`, `PersonIdAllocator`                 |
//! | [`space`] | `Area`, `Position`, uniform in-bounds sampling  |
//! | [`rng`]   | `PersonRng` (per-person deterministic RNG)      |
//! | [`error`] | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod space;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{PersonId, PersonIdAllocator};
pub use rng::PersonRng;
pub use space::{Area, Position};
