//! Per-person health state and the per-tick progression rules.

use rand::Rng;

use crate::{HealthStatus, ProgressionRates};

/// Sentinel for "no active recovery clock".
pub const NO_RECOVERY_CLOCK: i32 = -1;

/// The complete health state of one person.
///
/// # Invariants
///
/// - `immune == true` exactly when `status != Healthy`, and once set it is
///   never cleared.
/// - `infectious == true` exactly when `status` is `Infected`, `Sick`, or
///   `Critical`.
/// - `days_until_recovered >= 0` only while a recovery clock is running;
///   otherwise it is [`NO_RECOVERY_CLOCK`].
/// - `isolating` is forced `true` on entering `Critical` and cleared on
///   recovery; policy code may toggle it independently before that.
///
/// The `set_*` methods are the only transition points and each restores the
/// invariants, so they hold after every [`advance`][HealthState::advance].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthState {
    status: HealthStatus,
    infectious: bool,
    immune: bool,
    isolating: bool,
    days_until_recovered: i32,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::healthy()
    }
}

impl HealthState {
    /// A never-exposed state: healthy, not immune, no recovery clock.
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            infectious: false,
            immune: false,
            isolating: false,
            days_until_recovered: NO_RECOVERY_CLOCK,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self) -> HealthStatus {
        self.status
    }

    /// `true` while this person can contribute to disease spread.
    #[inline]
    pub fn is_infectious(&self) -> bool {
        self.infectious
    }

    /// `true` once the person has ever left `Healthy`.
    #[inline]
    pub fn is_immune(&self) -> bool {
        self.immune
    }

    /// `true` while movement is suppressed.
    #[inline]
    pub fn is_isolating(&self) -> bool {
        self.isolating
    }

    /// Ticks left on the recovery clock, or [`NO_RECOVERY_CLOCK`].
    #[inline]
    pub fn days_until_recovered(&self) -> i32 {
        self.days_until_recovered
    }

    // ── Isolation policy ──────────────────────────────────────────────────

    /// Quarantine policy hook.  Entering `Critical` forces isolation
    /// regardless of this flag; recovery clears it.
    pub fn set_isolating(&mut self, isolating: bool) {
        self.isolating = isolating;
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Exposure: infectious, immune, recovery clock set to `duration` ticks.
    pub fn set_infected(&mut self, duration: i32) {
        self.status = HealthStatus::Infected;
        self.infectious = true;
        self.immune = true;
        self.days_until_recovered = duration;
    }

    /// Symptom onset: resets the recovery clock to `duration` ticks.
    pub fn set_sick(&mut self, duration: i32) {
        self.status = HealthStatus::Sick;
        self.infectious = true;
        self.immune = true;
        self.days_until_recovered = duration;
    }

    /// Hospitalization: forces isolation.  The recovery clock is not touched
    /// here — the progression rule extends the running clock additively.
    pub fn set_critical(&mut self) {
        self.status = HealthStatus::Critical;
        self.infectious = true;
        self.immune = true;
        self.isolating = true;
    }

    /// Terminal: no longer infectious, recovery clock cleared.
    pub fn set_dead(&mut self) {
        self.status = HealthStatus::Dead;
        self.infectious = false;
        self.immune = true;
        self.days_until_recovered = NO_RECOVERY_CLOCK;
    }

    /// Terminal with respect to infection: immune, not infectious, isolation
    /// released, recovery clock cleared.
    pub fn set_recovered(&mut self) {
        self.status = HealthStatus::Recovered;
        self.infectious = false;
        self.immune = true;
        self.days_until_recovered = NO_RECOVERY_CLOCK;
        self.isolating = false;
    }

    // ── Per-tick progression ──────────────────────────────────────────────

    /// Advance the state machine by one tick.
    ///
    /// Evaluation order is fixed:
    ///
    /// 1. An active recovery clock ticks down by one.
    /// 2. A clock at exactly 0 forces `Recovered` — an unconditional
    ///    promotion regardless of current severity.
    /// 3. Symptom onset roll: `Infected` may turn `Sick`, resetting the
    ///    clock.
    /// 4. Hospitalization roll: `Infected` or `Sick` may turn `Critical`,
    ///    extending the clock.
    /// 5. Death roll for any still-infectious state — overrides whatever the
    ///    earlier steps set this tick.
    ///
    /// Each roll is an independent uniform draw in `[0, 1)` compared with
    /// strict `<`.  `Healthy` and terminal states consume no draws.
    pub fn advance<R: Rng>(&mut self, rates: &ProgressionRates, rng: &mut R) {
        if self.days_until_recovered > 0 {
            self.days_until_recovered -= 1;
        }
        if self.days_until_recovered == 0 {
            self.set_recovered();
        }

        if self.status == HealthStatus::Infected && rng.r#gen::<f64>() < rates.sick_onset {
            self.set_sick(rates.recovery_days);
        }
        self.hospitalization_roll(rates, rng);
        self.death_roll(rates, rng);
    }

    fn hospitalization_roll<R: Rng>(&mut self, rates: &ProgressionRates, rng: &mut R) {
        let threshold = match self.status {
            HealthStatus::Infected => rates.critical_from_infected,
            HealthStatus::Sick => rates.critical_from_sick,
            _ => return,
        };
        if rng.r#gen::<f64>() < threshold {
            self.set_critical();
            // Additive: hospitalization extends whatever clock is running.
            self.days_until_recovered += rates.critical_extension_days;
        }
    }

    fn death_roll<R: Rng>(&mut self, rates: &ProgressionRates, rng: &mut R) {
        if !self.infectious {
            return;
        }
        let threshold = match self.status {
            HealthStatus::Infected => rates.death_infected,
            HealthStatus::Sick => rates.death_sick,
            // Only Critical remains: Healthy/Recovered/Dead are never
            // infectious.
            _ => rates.death_critical,
        };
        if rng.r#gen::<f64>() < threshold {
            self.set_dead();
        }
    }
}
