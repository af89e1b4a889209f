//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD`, times as `HH:MM:SS`, roles and statuses
//! as their lowercase discriminant strings, UUIDs as hyphenated lowercase
//! strings.

use chrono::{NaiveDate, NaiveTime};
use muster_core::{
  actor::{Actor, Role},
  event::{AttendanceEvent, Status},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Date / time ─────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_time(t: NaiveTime) -> String { t.format("%H:%M:%S").to_string() }

pub fn decode_time(s: &str) -> Result<NaiveTime> {
  NaiveTime::parse_from_str(s, "%H:%M:%S")
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Status ──────────────────────────────────────────────────────────────────

pub fn encode_status(s: Status) -> &'static str { s.as_str() }

pub fn decode_status(s: &str) -> Result<Status> {
  Status::parse(s).ok_or_else(|| Error::UnknownStatus(s.to_owned()))
}

// ─── Role ────────────────────────────────────────────────────────────────────

pub fn encode_role(r: Role) -> &'static str { r.as_str() }

pub fn decode_role(s: &str) -> Result<Role> {
  s.parse().map_err(|_| Error::UnknownRole(s.to_owned()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `events` row.
pub struct RawEvent {
  pub event_id:   String,
  pub subject_id: String,
  pub date:       String,
  pub time:       String,
  pub status:     String,
}

impl RawEvent {
  pub fn into_event(self) -> Result<AttendanceEvent> {
    Ok(AttendanceEvent {
      event_id:   decode_uuid(&self.event_id)?,
      subject_id: decode_uuid(&self.subject_id)?,
      date:       decode_date(&self.date)?,
      time:       decode_time(&self.time)?,
      status:     decode_status(&self.status)?,
    })
  }
}

/// Raw strings read directly from an `actors` row.
pub struct RawActor {
  pub actor_id: String,
  pub role:     String,
}

impl RawActor {
  pub fn into_actor(self) -> Result<Actor> {
    Ok(Actor {
      actor_id: decode_uuid(&self.actor_id)?,
      role:     decode_role(&self.role)?,
    })
  }
}
