//! The `Person` — identity, movement, and health state for one individual.

use std::fmt;

use epi_core::{Area, PersonId, Position};
use epi_health::{HealthState, HealthStatus, ProgressionRates};
use log::debug;
use rand::Rng;

use crate::AgentResult;
use crate::motion::{Motion, RETARGET_DISTANCE};

/// Default per-tick movement speed.
pub const DEFAULT_SPEED: f32 = 2.0;

/// One simulated individual.
///
/// Construct with an ID from a
/// [`PersonIdAllocator`][epi_core::PersonIdAllocator], then call
/// [`update`][Person::update] once per tick.  Exposure is seeded by the
/// (out-of-scope) contact logic via [`set_infected`][Person::set_infected];
/// everything else is internal progression.
///
/// The `Area` is passed by shared reference into every operation that needs
/// it rather than stored, so one area value serves the whole population.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id: PersonId,
    motion: Motion,
    health: HealthState,
}

impl Person {
    /// Create a healthy person at `position` with a random initial target.
    pub fn new<R: Rng>(
        id: PersonId,
        position: Position,
        speed: f32,
        area: &Area,
        rng: &mut R,
    ) -> Self {
        Self {
            id,
            motion: Motion::new(position, speed, area, rng),
            health: HealthState::healthy(),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.motion.position
    }

    #[inline]
    pub fn target(&self) -> Position {
        self.motion.target
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.motion.speed
    }

    #[inline]
    pub fn health(&self) -> &HealthState {
        &self.health
    }

    /// Mutable health access for drivers and policy code (e.g. seeding a
    /// scenario or toggling quarantine).
    #[inline]
    pub fn health_mut(&mut self) -> &mut HealthState {
        &mut self.health
    }

    #[inline]
    pub fn status(&self) -> HealthStatus {
        self.health.status()
    }

    /// One-line report: id, position, health — for logs and debugging.
    pub fn summary(&self) -> String {
        format!(
            "{} at Position {} with health status: {}",
            self,
            self.position(),
            self.status()
        )
    }

    // ── Driver-facing hooks ───────────────────────────────────────────────

    /// Seed an infection.  Called by the (out-of-scope) contact logic.
    pub fn set_infected(&mut self, duration: i32) {
        debug!("{self} infected, recovery clock {duration}");
        self.health.set_infected(duration);
    }

    /// Quarantine policy hook: freeze or release movement.
    pub fn set_isolating(&mut self, isolating: bool) {
        self.health.set_isolating(isolating);
    }

    /// Replace the movement target (copy semantics).
    pub fn set_target(&mut self, target: Position) {
        self.motion.set_target(target);
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance this person by one tick.
    ///
    /// The health state machine runs to completion first, then the position
    /// update.  The order is load-bearing: movement suppression for dead and
    /// critical people reads the post-transition state, so a person who
    /// turns critical this tick must not move this tick.
    pub fn update<R: Rng>(
        &mut self,
        area: &Area,
        rates: &ProgressionRates,
        rng: &mut R,
    ) -> AgentResult<()> {
        let before = self.health.status();
        self.health.advance(rates, rng);
        let after = self.health.status();
        if before != after {
            debug!("{self} transitioned {before} -> {after}");
        }

        self.update_position(area, rng)
    }

    /// Movement half of the tick.
    ///
    /// Dead and critical people do not move at all.  Anyone else who has
    /// come within [`RETARGET_DISTANCE`] of their target draws a fresh
    /// random target first, then takes one step (which is a no-op while
    /// isolating).
    fn update_position<R: Rng>(&mut self, area: &Area, rng: &mut R) -> AgentResult<()> {
        if matches!(self.status(), HealthStatus::Dead | HealthStatus::Critical) {
            return Ok(());
        }
        if self.motion.distance_to_target() < RETARGET_DISTANCE {
            self.motion.set_target(area.random_position(rng));
        }
        self.motion.advance(area, self.health.is_isolating(), rng)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person {}", self.id.0)
    }
}
