//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("area bounds must be positive and finite, got {xlimit} x {ylimit}")]
    InvalidBounds { xlimit: f32, ylimit: f32 },
}

/// Shorthand result type for all `epi-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
