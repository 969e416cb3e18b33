//! The closed set of health states and their display colors.

use std::fmt;

// ── HealthStatus ──────────────────────────────────────────────────────────────

/// Disease state of one simulated person.
///
/// The transition graph:
///
/// ```text
/// Healthy → Infected → { Sick, Critical, Recovered, Dead }
///           Sick     → { Critical, Recovered, Dead }
///           Critical → { Recovered, Dead }
/// ```
///
/// `Recovered` and `Dead` are terminal.  The enum is deliberately closed (no
/// `#[non_exhaustive]`): every per-state behavior in the workspace is an
/// exhaustive `match`, so an unhandled state is a compile error rather than a
/// runtime fallthrough.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthStatus {
    /// Susceptible; never exposed.
    #[default]
    Healthy,
    /// Infectious but asymptomatic.
    Infected,
    /// Symptomatic and infectious.
    Sick,
    /// Hospitalized; infectious and forcibly isolating.
    Critical,
    /// Immune, no longer infectious.
    Recovered,
    /// Immune, no longer infectious.
    Dead,
}

impl HealthStatus {
    /// `true` for the two states that admit no further transitions.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, HealthStatus::Recovered | HealthStatus::Dead)
    }

    /// Rendering color for this state.
    pub fn color(self) -> Color {
        match self {
            HealthStatus::Healthy   => Color::Green,
            HealthStatus::Infected  => Color::Yellow,
            HealthStatus::Sick      => Color::Orange,
            HealthStatus::Critical  => Color::Red,
            HealthStatus::Recovered => Color::Blue,
            HealthStatus::Dead      => Color::Gray,
        }
    }

    /// Human-readable label, useful for logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy   => "healthy",
            HealthStatus::Infected  => "infected",
            HealthStatus::Sick      => "sick",
            HealthStatus::Critical  => "critical",
            HealthStatus::Recovered => "recovered",
            HealthStatus::Dead      => "dead",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Color ─────────────────────────────────────────────────────────────────────

/// Display color for rendering one person, one per health state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Blue,
    Gray,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Green  => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Red    => "red",
            Color::Blue   => "blue",
            Color::Gray   => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
