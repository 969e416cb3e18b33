//! Per-tick transition probabilities and durations.

/// Probability and duration parameters for the per-tick health progression.
///
/// All probabilities are per tick and compared with strict `<` against an
/// independent uniform draw in `[0, 1)`.  Durations are measured in ticks
/// (one tick = one simulated day).
///
/// Typically constructed once per run — `Default` carries the standard
/// parameter set — and passed by reference into every
/// [`HealthState::advance`][crate::HealthState::advance] call, so a driver
/// can vary policy mid-run without touching person state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionRates {
    /// P(Infected → Sick) per tick.
    pub sick_onset: f64,

    /// P(Infected → Critical) per tick.
    pub critical_from_infected: f64,

    /// P(Sick → Critical) per tick.
    pub critical_from_sick: f64,

    /// Per-tick death probability while Infected.
    pub death_infected: f64,

    /// Per-tick death probability while Sick.
    pub death_sick: f64,

    /// Per-tick death probability while Critical.
    pub death_critical: f64,

    /// Recovery clock granted on entering Infected or Sick.
    pub recovery_days: i32,

    /// Added to the running recovery clock on entering Critical.
    pub critical_extension_days: i32,
}

impl Default for ProgressionRates {
    fn default() -> Self {
        Self {
            sick_onset:              0.10,
            critical_from_infected:  0.03,
            critical_from_sick:      0.06,
            death_infected:          0.001,
            death_sick:              0.005,
            death_critical:          0.01,
            recovery_days:           10,
            critical_extension_days: 10,
        }
    }
}
