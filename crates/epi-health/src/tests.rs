//! Unit tests for the health state machine.

use rand::RngCore;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Test RNG yielding a fixed sequence of uniform draws.
///
/// `rand` 0.8 samples a `Standard` f64 from the top 53 bits of `next_u64`
/// (`(bits >> 11) as f64 * 2^-53`), so encoding a requested draw `p` as
/// `floor(p * 2^53) << 11` makes `gen::<f64>()` return `p` (to within one
/// ulp, always rounding down).  A draw of `1.0` saturates to the largest
/// representable value below 1.0.
///
/// Panics if more draws are requested than were queued, which doubles as an
/// assertion on how many rolls a state performs.
struct DrawRng {
    draws: Vec<u64>,
    next: usize,
}

impl DrawRng {
    fn new(draws: &[f64]) -> Self {
        const ONE: u64 = 1 << 53;
        let draws = draws
            .iter()
            .map(|p| ((p * ONE as f64) as u64).min(ONE - 1) << 11)
            .collect();
        Self { draws, next: 0 }
    }
}

impl RngCore for DrawRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let v = self.draws[self.next];
        self.next += 1;
        v
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// All rolls miss (every draw is just under 1.0).
fn never() -> DrawRng {
    DrawRng::new(&[1.0; 8])
}

// ── Status and colors ─────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use crate::{Color, HealthStatus};

    #[test]
    fn color_mapping_is_fixed() {
        assert_eq!(HealthStatus::Healthy.color(), Color::Green);
        assert_eq!(HealthStatus::Infected.color(), Color::Yellow);
        assert_eq!(HealthStatus::Sick.color(), Color::Orange);
        assert_eq!(HealthStatus::Critical.color(), Color::Red);
        assert_eq!(HealthStatus::Recovered.color(), Color::Blue);
        assert_eq!(HealthStatus::Dead.color(), Color::Gray);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(HealthStatus::Sick.to_string(), "sick");
        assert_eq!(HealthStatus::Dead.to_string(), "dead");
        assert_eq!(Color::Gray.to_string(), "gray");
    }

    #[test]
    fn terminal_states() {
        assert!(HealthStatus::Recovered.is_terminal());
        assert!(HealthStatus::Dead.is_terminal());
        assert!(!HealthStatus::Healthy.is_terminal());
        assert!(!HealthStatus::Critical.is_terminal());
    }

    #[test]
    fn default_is_healthy() {
        assert_eq!(HealthStatus::default(), HealthStatus::Healthy);
    }
}

// ── Setters ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod setters {
    use crate::{HealthState, HealthStatus, NO_RECOVERY_CLOCK};

    #[test]
    fn healthy_baseline() {
        let hs = HealthState::healthy();
        assert_eq!(hs.status(), HealthStatus::Healthy);
        assert!(!hs.is_infectious());
        assert!(!hs.is_immune());
        assert!(!hs.is_isolating());
        assert_eq!(hs.days_until_recovered(), NO_RECOVERY_CLOCK);
        assert_eq!(HealthState::default(), hs);
    }

    #[test]
    fn set_infected_starts_clock() {
        let mut hs = HealthState::healthy();
        hs.set_infected(10);
        assert_eq!(hs.status(), HealthStatus::Infected);
        assert!(hs.is_infectious());
        assert!(hs.is_immune());
        assert_eq!(hs.days_until_recovered(), 10);
    }

    #[test]
    fn set_sick_resets_clock() {
        let mut hs = HealthState::healthy();
        hs.set_infected(3);
        hs.set_sick(10);
        assert_eq!(hs.status(), HealthStatus::Sick);
        assert!(hs.is_infectious());
        assert_eq!(hs.days_until_recovered(), 10);
    }

    #[test]
    fn set_critical_forces_isolation_and_keeps_clock() {
        let mut hs = HealthState::healthy();
        hs.set_infected(7);
        hs.set_critical();
        assert_eq!(hs.status(), HealthStatus::Critical);
        assert!(hs.is_isolating());
        assert!(hs.is_infectious());
        assert_eq!(hs.days_until_recovered(), 7, "set_critical must not touch the clock");
    }

    #[test]
    fn set_dead_clears_clock() {
        let mut hs = HealthState::healthy();
        hs.set_infected(10);
        hs.set_dead();
        assert_eq!(hs.status(), HealthStatus::Dead);
        assert!(!hs.is_infectious());
        assert!(hs.is_immune());
        assert_eq!(hs.days_until_recovered(), NO_RECOVERY_CLOCK);
    }

    #[test]
    fn set_recovered_releases_isolation() {
        let mut hs = HealthState::healthy();
        hs.set_infected(10);
        hs.set_critical();
        hs.set_recovered();
        assert_eq!(hs.status(), HealthStatus::Recovered);
        assert!(!hs.is_infectious());
        assert!(hs.is_immune());
        assert!(!hs.is_isolating());
        assert_eq!(hs.days_until_recovered(), NO_RECOVERY_CLOCK);
    }

    #[test]
    fn isolation_policy_toggle() {
        let mut hs = HealthState::healthy();
        hs.set_isolating(true);
        assert!(hs.is_isolating());
        hs.set_isolating(false);
        assert!(!hs.is_isolating());
    }
}

// ── Per-tick progression ──────────────────────────────────────────────────────

#[cfg(test)]
mod progression {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::{DrawRng, never};
    use crate::{HealthState, HealthStatus, NO_RECOVERY_CLOCK, ProgressionRates};

    fn rates() -> ProgressionRates {
        ProgressionRates::default()
    }

    #[test]
    fn clock_decrements_when_no_roll_fires() {
        let mut hs = HealthState::healthy();
        hs.set_infected(10);
        hs.advance(&rates(), &mut never());
        assert_eq!(hs.status(), HealthStatus::Infected);
        assert_eq!(hs.days_until_recovered(), 9);
        assert!(hs.is_infectious());
    }

    #[test]
    fn clock_at_zero_forces_recovery() {
        let mut hs = HealthState::healthy();
        hs.set_infected(1);
        hs.advance(&rates(), &mut never());
        assert_eq!(hs.status(), HealthStatus::Recovered);
        assert_eq!(hs.days_until_recovered(), NO_RECOVERY_CLOCK);
        assert!(!hs.is_infectious());
        assert!(hs.is_immune());
    }

    #[test]
    fn recovery_promotion_overrides_severity() {
        // Even a critical person recovers the tick the clock hits zero.
        let mut hs = HealthState::healthy();
        hs.set_sick(1);
        hs.set_critical();
        hs.advance(&rates(), &mut never());
        assert_eq!(hs.status(), HealthStatus::Recovered);
        assert!(!hs.is_isolating());
    }

    #[test]
    fn symptom_onset_resets_clock() {
        let mut hs = HealthState::healthy();
        hs.set_infected(4);
        // onset 0.05 < 0.10 fires; hospitalization 0.5 and death 0.5 miss.
        hs.advance(&rates(), &mut DrawRng::new(&[0.05, 0.5, 0.5]));
        assert_eq!(hs.status(), HealthStatus::Sick);
        assert_eq!(hs.days_until_recovered(), 10);
    }

    #[test]
    fn hospitalization_from_infected_extends_clock() {
        let mut hs = HealthState::healthy();
        hs.set_infected(10);
        // onset 0.5 misses; hospitalization 0.02 < 0.03 fires; death 0.5 misses.
        hs.advance(&rates(), &mut DrawRng::new(&[0.5, 0.02, 0.5]));
        assert_eq!(hs.status(), HealthStatus::Critical);
        assert!(hs.is_isolating());
        assert_eq!(hs.days_until_recovered(), 19, "9 left + 10 extension");
    }

    #[test]
    fn hospitalization_from_sick_uses_higher_rate() {
        let mut hs = HealthState::healthy();
        hs.set_sick(10);
        // No onset draw for Sick; 0.05 < 0.06 hospitalizes; death 0.5 misses.
        hs.advance(&rates(), &mut DrawRng::new(&[0.05, 0.5]));
        assert_eq!(hs.status(), HealthStatus::Critical);
        assert_eq!(hs.days_until_recovered(), 19);

        // The same draw would NOT hospitalize an infected person (0.05 >= 0.03).
        let mut hs = HealthState::healthy();
        hs.set_infected(10);
        hs.advance(&rates(), &mut DrawRng::new(&[0.5, 0.05, 0.5]));
        assert_eq!(hs.status(), HealthStatus::Infected);
    }

    #[test]
    fn death_overrides_same_tick_hospitalization() {
        let mut hs = HealthState::healthy();
        hs.set_infected(10);
        // Hospitalized this tick (0.02 < 0.03), then the death roll is judged
        // at the critical threshold and fires (0.005 < 0.01).
        hs.advance(&rates(), &mut DrawRng::new(&[0.5, 0.02, 0.005]));
        assert_eq!(hs.status(), HealthStatus::Dead);
        assert!(!hs.is_infectious());
        assert_eq!(hs.days_until_recovered(), NO_RECOVERY_CLOCK);
    }

    #[test]
    fn death_thresholds_depend_on_state() {
        // 0.004 kills a sick person (< 0.005) ...
        let mut sick = HealthState::healthy();
        sick.set_sick(10);
        sick.advance(&rates(), &mut DrawRng::new(&[0.5, 0.004]));
        assert_eq!(sick.status(), HealthStatus::Dead);

        // ... but not an infected one (>= 0.001).
        let mut infected = HealthState::healthy();
        infected.set_infected(10);
        infected.advance(&rates(), &mut DrawRng::new(&[0.5, 0.5, 0.004]));
        assert_eq!(infected.status(), HealthStatus::Infected);
    }

    #[test]
    fn forced_zero_draws_cascade_to_death() {
        // onset → sick, hospitalization → critical, death roll → dead,
        // all in one tick.
        let mut hs = HealthState::healthy();
        hs.set_infected(10);
        hs.advance(&rates(), &mut DrawRng::new(&[0.0, 0.0, 0.0]));
        assert_eq!(hs.status(), HealthStatus::Dead);
    }

    #[test]
    fn healthy_consumes_no_draws() {
        // DrawRng panics on an unqueued draw, so an empty queue asserts that
        // a healthy person performs no rolls at all.
        let mut hs = HealthState::healthy();
        hs.advance(&rates(), &mut DrawRng::new(&[]));
        assert_eq!(hs.status(), HealthStatus::Healthy);
        assert!(!hs.is_immune());
    }

    #[test]
    fn terminal_states_are_fixed_points() {
        let mut dead = HealthState::healthy();
        dead.set_infected(10);
        dead.set_dead();
        for _ in 0..10 {
            dead.advance(&rates(), &mut DrawRng::new(&[]));
        }
        assert_eq!(dead.status(), HealthStatus::Dead);
        assert_eq!(dead.days_until_recovered(), NO_RECOVERY_CLOCK);

        let mut recovered = HealthState::healthy();
        recovered.set_sick(10);
        recovered.set_recovered();
        for _ in 0..10 {
            recovered.advance(&rates(), &mut DrawRng::new(&[]));
        }
        assert_eq!(recovered.status(), HealthStatus::Recovered);
        assert!(recovered.is_immune());
    }

    #[test]
    fn invariants_hold_across_random_runs() {
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut hs = HealthState::healthy();
            hs.set_infected(10);
            for _ in 0..100 {
                hs.advance(&rates(), &mut rng);
                let infectious_states = matches!(
                    hs.status(),
                    HealthStatus::Infected | HealthStatus::Sick | HealthStatus::Critical
                );
                assert_eq!(hs.is_infectious(), infectious_states);
                assert_eq!(hs.is_immune(), hs.status() != HealthStatus::Healthy);
                if hs.status().is_terminal() {
                    assert_eq!(hs.days_until_recovered(), NO_RECOVERY_CLOCK);
                }
                if hs.status() == HealthStatus::Critical {
                    assert!(hs.is_isolating());
                }
            }
        }
    }
}
