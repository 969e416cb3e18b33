//! Strongly typed person identifiers and their allocator.
//!
//! `PersonId` is `Copy + Ord + Hash` so it can be used as a map key or sorted
//! collection element without ceremony.  The inner integer is `pub` to allow
//! direct indexing into population `Vec`s via `id.0 as usize`, but callers
//! should prefer the `.index()` helper for clarity.
//!
//! IDs are handed out by [`PersonIdAllocator`] — an explicit counter value
//! owned by whatever constructs people, not a process-wide static.  A plain
//! value keeps construction deterministic in tests; a multi-threaded driver
//! would hold the allocator in a single constructing authority (or swap the
//! counter for an atomic).

use std::fmt;

// ── PersonId ──────────────────────────────────────────────────────────────────

/// Index of a person in population storage.  Max ~4.3 billion people.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u32);

impl PersonId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: PersonId = PersonId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for PersonId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl From<PersonId> for usize {
    #[inline(always)]
    fn from(id: PersonId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PersonId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PersonId, Self::Error> {
        u32::try_from(n).map(PersonId)
    }
}

// ── PersonIdAllocator ─────────────────────────────────────────────────────────

/// Hands out unique, monotonically increasing `PersonId`s.
///
/// IDs start at 0 and are never reused.  Single-threaded by design — the
/// simulation constructs its population sequentially at setup.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonIdAllocator {
    next: u32,
}

impl PersonIdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next ID.
    pub fn allocate(&mut self) -> PersonId {
        let id = PersonId(self.next);
        self.next += 1;
        id
    }

    /// How many IDs have been handed out so far.
    pub fn allocated(&self) -> usize {
        self.next as usize
    }
}
