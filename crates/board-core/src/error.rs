//! Board error types.

use thiserror::Error;

/// A persisted or user-selected mode string outside the known domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeParseError {
    #[error("unknown grouping mode: {0:?}")]
    Grouping(String),

    #[error("unknown ordering mode: {0:?}")]
    Ordering(String),
}

/// Failures of the key-value store backing preferences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing storage could not be reached at all.
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read preference {key:?}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write preference {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Rejected client-side task drafts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("task title must not be empty")]
    EmptyTitle,
}
