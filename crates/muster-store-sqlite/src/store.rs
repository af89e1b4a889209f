//! [`SqliteStore`] — the SQLite implementation of [`AttendanceStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use muster_core::{
  actor::{Actor, Role},
  event::{AttendanceEvent, NewEvent},
  store::AttendanceStore,
};

use crate::{
  encode::{
    encode_date, encode_role, encode_status, encode_time, encode_uuid,
    RawActor, RawEvent,
  },
  schema::SCHEMA,
  Result,
};

fn event_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawEvent> {
  Ok(RawEvent {
    event_id:   row.get(0)?,
    subject_id: row.get(1)?,
    date:       row.get(2)?,
    time:       row.get(3)?,
    status:     row.get(4)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Muster attendance store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run an event SELECT with string parameters and decode every row.
  async fn query_events(
    &self,
    sql: &'static str,
    params: Vec<String>,
  ) -> Result<Vec<AttendanceEvent>> {
    let raws: Vec<RawEvent> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), event_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEvent::into_event).collect()
  }
}

// ─── AttendanceStore impl ────────────────────────────────────────────────────

impl AttendanceStore for SqliteStore {
  type Error = crate::Error;

  // ── Actors ────────────────────────────────────────────────────────────────

  async fn upsert_actor(&self, actor: Actor) -> Result<()> {
    let id_str   = encode_uuid(actor.actor_id);
    let role_str = encode_role(actor.role).to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO actors (actor_id, role) VALUES (?1, ?2)
           ON CONFLICT (actor_id) DO UPDATE SET role = excluded.role",
          rusqlite::params![id_str, role_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn get_actor(&self, id: Uuid) -> Result<Option<Actor>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawActor> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT actor_id, role FROM actors WHERE actor_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawActor { actor_id: row.get(0)?, role: row.get(1)? })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawActor::into_actor).transpose()
  }

  async fn actors_with_role(&self, role: Role) -> Result<Vec<Actor>> {
    let role_str = encode_role(role).to_owned();

    let raws: Vec<RawActor> = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare("SELECT actor_id, role FROM actors WHERE role = ?1")?;
        let rows = stmt
          .query_map(rusqlite::params![role_str], |row| {
            Ok(RawActor { actor_id: row.get(0)?, role: row.get(1)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawActor::into_actor).collect()
  }

  // ── Events — append-only writes ───────────────────────────────────────────

  async fn append(&self, input: NewEvent) -> Result<AttendanceEvent> {
    let event = AttendanceEvent {
      event_id:   Uuid::new_v4(),
      subject_id: input.subject_id,
      date:       input.date,
      time:       input.time,
      status:     input.status,
    };

    let event_id_str   = encode_uuid(event.event_id);
    let subject_id_str = encode_uuid(event.subject_id);
    let date_str       = encode_date(event.date);
    let time_str       = encode_time(event.time);
    let status_str     = encode_status(event.status).to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO events (event_id, subject_id, date, time, status)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            event_id_str,
            subject_id_str,
            date_str,
            time_str,
            status_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(event)
  }

  // ── Event reads ───────────────────────────────────────────────────────────

  async fn events_for_subject(&self, id: Uuid) -> Result<Vec<AttendanceEvent>> {
    let id_str = encode_uuid(id);
    self
      .query_events(
        "SELECT event_id, subject_id, date, time, status
         FROM events WHERE subject_id = ?1
         ORDER BY rowid",
        vec![id_str],
      )
      .await
  }

  async fn all_events(&self) -> Result<Vec<AttendanceEvent>> {
    self
      .query_events(
        "SELECT event_id, subject_id, date, time, status
         FROM events
         ORDER BY rowid",
        Vec::new(),
      )
      .await
  }

  async fn events_in_range(
    &self,
    id: Uuid,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
  ) -> Result<Vec<AttendanceEvent>> {
    let id_str    = encode_uuid(id);
    let start_str = encode_date(start);
    let end_str   = encode_date(end);

    // ISO dates compare lexicographically, so BETWEEN is inclusive on both
    // ends exactly as the trait requires.
    self
      .query_events(
        "SELECT event_id, subject_id, date, time, status
         FROM events
         WHERE subject_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY rowid",
        vec![id_str, start_str, end_str],
      )
      .await
  }
}
