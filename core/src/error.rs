// time_tracker/src/error.rs
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Coarse classification of a [`TrackerError`], used by callers to pick an
/// outward signal (status code, exit code, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Caller supplied malformed input. Never worth retrying.
  Validation,
  /// Input was well-formed but collides with the current state of the store.
  Conflict,
  /// The addressed entity does not exist.
  NotFound,
  /// The store could not be reached or failed. Opaque to the caller.
  Unavailable,
}

#[derive(Debug, Error)]
pub enum TrackerError {
  #[error("invalid passport format, expected '**** ******' (4 digits, space, 6 digits), got '{input}'")]
  InvalidFormat { input: String },

  #[error("invalid date range: end {end} is before start {start}")]
  InvalidRange { start: DateTime<Utc>, end: DateTime<Utc> },

  #[error("user with such passport series and number already exists")]
  PassportDuplicate,

  #[error("user {id} not found")]
  UserNotFound { id: i32 },

  #[error("worklog {id} not found")]
  WorklogNotFound { id: i32 },

  #[error("worklog {id} was already finished")]
  AlreadyDone { id: i32 },

  #[error("{operation}: {source}")]
  Database {
    operation: &'static str,
    #[source]
    source: sqlx::Error,
  },

  #[error("{operation}: deadline elapsed")]
  Timeout { operation: &'static str },
}

impl TrackerError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      TrackerError::InvalidFormat { .. } | TrackerError::InvalidRange { .. } => ErrorKind::Validation,
      TrackerError::PassportDuplicate | TrackerError::AlreadyDone { .. } => ErrorKind::Conflict,
      TrackerError::UserNotFound { .. } | TrackerError::WorklogNotFound { .. } => ErrorKind::NotFound,
      TrackerError::Database { .. } | TrackerError::Timeout { .. } => ErrorKind::Unavailable,
    }
  }

  /// Wraps a driver error with the name of the store operation that produced it.
  /// Running out of time waiting for a pooled connection is reported as `Timeout`.
  pub(crate) fn database(operation: &'static str, source: sqlx::Error) -> Self {
    match source {
      sqlx::Error::PoolTimedOut => TrackerError::Timeout { operation },
      source => TrackerError::Database { operation, source },
    }
  }
}

pub type TrackerResult<T, E = TrackerError> = std::result::Result<T, E>;
