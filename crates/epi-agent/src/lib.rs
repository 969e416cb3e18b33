//! `epi-agent` — one simulated individual: identity, movement, health.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`motion`] | `Motion` — target-seeking movement inside a bounded area |
//! | [`person`] | `Person` — identity + motion + health, tick orchestration |
//! | [`error`]  | `AgentError`, `AgentResult<T>`                           |
//!
//! # Tick model
//!
//! The (external) driver calls [`Person::update`] once per tick for every
//! person.  A tick runs the health state machine to completion first and
//! only then evaluates movement — dead and critical people must not move,
//! and that decision reads the post-transition state.
//!
//! Movement is target-seeking: each tick the person steps up to `speed`
//! units toward its target, draws a fresh target when it gets within
//! [`RETARGET_DISTANCE`] of the current one or within
//! [`BOUNDARY_FRACTION`] of either axis limit, and freezes entirely while
//! isolating.  Every step is checked against the area bounds; a violation
//! is an internal consistency defect surfaced as
//! [`AgentError::OutOfBounds`], never silently clamped.

pub mod error;
pub mod motion;
pub mod person;


pub use error::{AgentError, AgentResult};
pub use motion::{BOUNDARY_FRACTION, Motion, RETARGET_DISTANCE};
pub use person::{DEFAULT_SPEED, Person};
