//! SQL schema for the Muster SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Mirror of the identity system's actor set: id and role only.
CREATE TABLE IF NOT EXISTS actors (
    actor_id  TEXT PRIMARY KEY,
    role      TEXT NOT NULL    -- 'admin' | 'member'
);

-- Events are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS events (
    event_id    TEXT NOT NULL PRIMARY KEY,
    subject_id  TEXT NOT NULL REFERENCES actors(actor_id),
    date        TEXT NOT NULL,   -- ISO 8601 calendar date, server-stamped
    time        TEXT NOT NULL,   -- HH:MM:SS, server-stamped
    status      TEXT NOT NULL    -- 'present' | 'excused' | 'sick' | 'late'
);

CREATE INDEX IF NOT EXISTS events_subject_idx ON events(subject_id);
CREATE INDEX IF NOT EXISTS events_date_idx    ON events(date);

PRAGMA user_version = 1;
";
