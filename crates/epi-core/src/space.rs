//! Bounded 2D area and position types.
//!
//! Positions are single-precision: simulation areas are on the order of
//! hundreds of units across, comfortably within `f32` precision.
//!
//! An [`Area`] is the open rectangle `(0, xlimit) x (0, ylimit)`.  Valid
//! positions are strictly interior — the boundary itself is not a legal
//! place to stand, which is what lets movement code prove its steps stay
//! in bounds (see `epi-agent`).

use std::fmt;

use rand::Rng;

use crate::{CoreError, CoreResult};

// ── Position ──────────────────────────────────────────────────────────────────

/// A 2D point inside an [`Area`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to the point `(x, y)`.
    pub fn distance_to(self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean distance to another position.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        self.distance_to(other.x, other.y)
    }

    /// The position displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Area ──────────────────────────────────────────────────────────────────────

/// A bounded rectangular region `(0, xlimit) x (0, ylimit)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub xlimit: f32,
    pub ylimit: f32,
}

impl Area {
    /// Create an area, validating that both limits are positive and finite.
    pub fn new(xlimit: f32, ylimit: f32) -> CoreResult<Area> {
        if !(xlimit.is_finite() && ylimit.is_finite() && xlimit > 0.0 && ylimit > 0.0) {
            return Err(CoreError::InvalidBounds { xlimit, ylimit });
        }
        Ok(Area { xlimit, ylimit })
    }

    /// `true` if `position` lies strictly inside the bounds.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x > 0.0
            && position.x < self.xlimit
            && position.y > 0.0
            && position.y < self.ylimit
    }

    /// Draw a uniformly distributed position strictly inside the bounds.
    ///
    /// `gen_range(0.0..limit)` includes the closed lower bound; positions must
    /// be strictly interior, so that measure-zero case is resampled.
    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Position {
        loop {
            let p = Position::new(
                rng.gen_range(0.0..self.xlimit),
                rng.gen_range(0.0..self.ylimit),
            );
            if self.contains(p) {
                return p;
            }
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.xlimit, self.ylimit)
    }
}
