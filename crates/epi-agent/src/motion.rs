//! Target-seeking movement within a bounded area.

use epi_core::{Area, Position};
use rand::Rng;

use crate::{AgentError, AgentResult};

/// Distance to the current target below which the tick-level position update
/// draws a fresh target before stepping.
pub const RETARGET_DISTANCE: f32 = 5.0;

/// Fraction of an axis limit beyond which a person counts as "near the
/// boundary" and re-targets inside [`Motion::compute_step`].
///
/// Independent of [`RETARGET_DISTANCE`]; both can fire in the same tick
/// (near-target first, boundary second).
pub const BOUNDARY_FRACTION: f32 = 0.9;

/// Movement state for one person: where they are, where they are headed, and
/// how far they can travel per tick.
///
/// Position and target are always strictly inside the area.  A step is the
/// `speed`-scaled unit vector toward the target, with the scale clamped so
/// the step never passes the target — every new position is then a convex
/// combination of two strictly-interior points and stays strictly interior.
/// That is what makes the legality check in [`advance`][Motion::advance] an
/// assertion rather than a branch the simulation relies on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    /// Maximum distance traversable in one tick.
    pub speed: f32,

    /// Current position, strictly inside the area.
    pub position: Position,

    /// Position being moved toward, strictly inside the area.
    pub target: Position,
}

impl Motion {
    /// Start at `position` with a freshly drawn random target.
    pub fn new<R: Rng>(position: Position, speed: f32, area: &Area, rng: &mut R) -> Self {
        Self {
            speed,
            position,
            target: area.random_position(rng),
        }
    }

    /// Replace the target.  `Position` is `Copy`, so the caller's value is
    /// copied rather than aliased.
    #[inline]
    pub fn set_target(&mut self, target: Position) {
        self.target = target;
    }

    /// Distance from the current position to the target.
    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Compute this tick's displacement `(dx, dy)`.
    ///
    /// Isolating people do not move.  A person within
    /// [`BOUNDARY_FRACTION`] of either axis limit first draws a brand-new
    /// target and then steps toward it — the re-target happens before the
    /// displacement is computed.  The distance is taken against the new
    /// target (not the stale distance to the old one), keeping the step
    /// length bounded by `speed`.
    pub fn compute_step<R: Rng>(&mut self, area: &Area, isolating: bool, rng: &mut R) -> (f32, f32) {
        if isolating {
            return (0.0, 0.0);
        }

        if self.position.x > BOUNDARY_FRACTION * area.xlimit
            || self.position.y > BOUNDARY_FRACTION * area.ylimit
        {
            self.target = area.random_position(rng);
        }

        let distance = self.distance_to_target();
        if distance == 0.0 {
            return (0.0, 0.0);
        }

        // Clamp so the step never overshoots the (in-bounds) target.
        let scale = (self.speed / distance).min(1.0);
        (
            (self.target.x - self.position.x) * scale,
            (self.target.y - self.position.y) * scale,
        )
    }

    /// Compute one step and apply it to `position`.
    ///
    /// # Errors
    ///
    /// [`AgentError::OutOfBounds`] if the step would leave the area — an
    /// internal consistency defect, unreachable while the target invariant
    /// holds.
    pub fn advance<R: Rng>(&mut self, area: &Area, isolating: bool, rng: &mut R) -> AgentResult<()> {
        let (dx, dy) = self.compute_step(area, isolating, rng);
        let next = self.position.offset(dx, dy);
        if !area.contains(next) {
            return Err(AgentError::OutOfBounds { x: next.x, y: next.y });
        }
        self.position = next;
        Ok(())
    }
}
