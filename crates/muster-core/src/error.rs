//! Error taxonomy for `muster-core`.
//!
//! Three leaf enums cover the three outcome classes callers must be able to
//! tell apart: bad input, denied access, and nothing found. The top-level
//! [`Error`] folds them together and adds a boxed variant for backend
//! failures surfaced through the [`crate::store::AttendanceStore`] trait.

use thiserror::Error;
use uuid::Uuid;

use crate::event::Status;

/// The request itself is malformed. Detected before any store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// An admin write requires an explicit subject id.
  #[error("a subject id is required for this operation")]
  MissingSubject,

  #[error("status {0:?} is not permitted for this actor's role")]
  InvalidStatus(Status),

  #[error("end date precedes start date")]
  BadDateRange,
}

/// The actor is not allowed to do this. Never defaulted to a permissive or
/// restrictive role; an unknown role is always a hard denial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeniedError {
  #[error("not permitted to access another member's history")]
  Forbidden,

  #[error("unrecognized role: {0:?}")]
  UnrecognizedRole(String),
}

/// The requested data does not exist. A normal, expected outcome — callers
/// must be able to distinguish "no history" from "denied".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
  #[error("no attendance history found")]
  NoHistory,

  #[error("unknown subject: {0}")]
  UnknownSubject(Uuid),
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Denied(#[from] DeniedError),

  #[error(transparent)]
  NotFound(#[from] NotFoundError),

  #[error("store error: {0}")]
  Store(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error from an [`crate::store::AttendanceStore`] impl.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
