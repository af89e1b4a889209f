//! Attendance events — the fundamental unit of the Muster store.
//!
//! An event is an immutable record of one attendance outcome for one subject
//! on one day. Events are never updated; administrative deletion, if any,
//! happens outside this workspace.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The attendance outcome tag on an event.
///
/// Which statuses an actor may record is role-gated by
/// [`crate::policy::decide_write`]: admins record `Present | Excused | Sick`
/// on behalf of anyone, members record `Present | Excused | Late` for
/// themselves. Members cannot record `Sick` and admins cannot record `Late`;
/// the asymmetry is inherited behavior, kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Present,
  Excused,
  Sick,
  Late,
}

impl Status {
  /// The discriminant string stored in the `status` column.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Present => "present",
      Self::Excused => "excused",
      Self::Sick => "sick",
      Self::Late => "late",
    }
  }

  /// Decode a stored discriminant. Returns `None` for unknown strings;
  /// storage backends map that to their own error type.
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "present" => Some(Self::Present),
      "excused" => Some(Self::Excused),
      "sick" => Some(Self::Sick),
      "late" => Some(Self::Late),
      _ => None,
    }
  }
}

/// An immutable attendance record. Once written, no field ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
  pub event_id:   Uuid,
  pub subject_id: Uuid,
  /// Calendar date stamped by the recorder's clock; never caller-supplied.
  pub date:       NaiveDate,
  /// Time of day stamped by the recorder's clock.
  pub time:       NaiveTime,
  pub status:     Status,
}

/// Input to [`crate::store::AttendanceStore::append`].
/// The event id is assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewEvent {
  pub subject_id: Uuid,
  pub date:       NaiveDate,
  pub time:       NaiveTime,
  pub status:     Status,
}
