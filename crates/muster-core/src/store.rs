//! The `AttendanceStore` trait.
//!
//! Implemented by storage backends (e.g. `muster-store-sqlite`). Higher
//! layers (`muster-api`) depend on this abstraction, not on any concrete
//! backend.
//!
//! Read methods return events in insertion order as kept by the backend —
//! undefined but stable within a single store, not chronological. No caller
//! may rely on calendar ordering.

use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  actor::{Actor, Role},
  event::{AttendanceEvent, NewEvent},
};

/// Abstraction over a Muster storage backend.
///
/// Event writes are append-only: there is no update or delete method, so no
/// read-modify-write race can exist. Appends are atomic single rows.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait AttendanceStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Actors ────────────────────────────────────────────────────────────

  /// Insert or update the store's mirror of an actor.
  ///
  /// Actors are owned by the upstream identity system; the store keeps a
  /// copy of id and role so role-grouped queries can run locally.
  fn upsert_actor(
    &self,
    actor: Actor,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve an actor by id. Returns `None` if not mirrored.
  fn get_actor(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Actor>, Self::Error>> + Send + '_;

  /// All mirrored actors holding `role`.
  fn actors_with_role(
    &self,
    role: Role,
  ) -> impl Future<Output = Result<Vec<Actor>, Self::Error>> + Send + '_;

  // ── Events — append-only writes ───────────────────────────────────────

  /// Append one attendance event and return it with its assigned id.
  ///
  /// No uniqueness constraint: multiple events for the same subject and day
  /// are all kept as independent rows.
  fn append(
    &self,
    input: NewEvent,
  ) -> impl Future<Output = Result<AttendanceEvent, Self::Error>> + Send + '_;

  // ── Event reads ───────────────────────────────────────────────────────

  /// All events recorded about one subject.
  fn events_for_subject(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Vec<AttendanceEvent>, Self::Error>> + Send + '_;

  /// Every event in the store.
  fn all_events(
    &self,
  ) -> impl Future<Output = Result<Vec<AttendanceEvent>, Self::Error>> + Send + '_;

  /// One subject's events with `date` in `[start, end]`, inclusive on both
  /// ends.
  fn events_in_range(
    &self,
    id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
  ) -> impl Future<Output = Result<Vec<AttendanceEvent>, Self::Error>> + Send + '_;
}
