//! `epi-health` — the per-person disease state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`status`] | `HealthStatus` (the closed six-state enum), `Color`       |
//! | [`rates`]  | `ProgressionRates` — per-tick probabilities and durations |
//! | [`state`]  | `HealthState` — flags, recovery clock, tick progression   |
//!
//! # Progression model
//!
//! `Healthy` people only ever change state through an external exposure call
//! (`set_infected`); everything after that is driven by
//! [`HealthState::advance`], one call per tick:
//!
//! 1. An active recovery clock ticks down; hitting exactly 0 forces
//!    `Recovered` regardless of severity.
//! 2. `Infected` may turn `Sick` (clock reset).
//! 3. `Infected`/`Sick` may turn `Critical` (clock extended, isolation
//!    forced).
//! 4. Any infectious person may die, with a per-state probability.
//!
//! Each roll is an independent uniform `f64` draw in `[0, 1)` compared with
//! strict `<` against its threshold.  All draws come from a caller-provided
//! `&mut impl Rng`, so the machine is fully deterministic under test.

pub mod rates;
pub mod state;
pub mod status;

#[cfg(test)]
mod tests;

pub use rates::ProgressionRates;
pub use state::{HealthState, NO_RECOVERY_CLOCK};
pub use status::{Color, HealthStatus};
