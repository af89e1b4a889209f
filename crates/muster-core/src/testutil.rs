//! In-memory [`AttendanceStore`] used by the core unit tests.

use std::{convert::Infallible, sync::Mutex};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  actor::{Actor, Role},
  event::{AttendanceEvent, NewEvent},
  store::AttendanceStore,
};

/// A store backed by two `Vec`s. Insertion order is the vector order.
#[derive(Default)]
pub struct MemStore {
  actors: Mutex<Vec<Actor>>,
  events: Mutex<Vec<AttendanceEvent>>,
}

impl AttendanceStore for MemStore {
  type Error = Infallible;

  async fn upsert_actor(&self, actor: Actor) -> Result<(), Infallible> {
    let mut actors = self.actors.lock().unwrap();
    match actors.iter_mut().find(|a| a.actor_id == actor.actor_id) {
      Some(existing) => existing.role = actor.role,
      None => actors.push(actor),
    }
    Ok(())
  }

  async fn get_actor(&self, id: Uuid) -> Result<Option<Actor>, Infallible> {
    Ok(
      self
        .actors
        .lock()
        .unwrap()
        .iter()
        .find(|a| a.actor_id == id)
        .copied(),
    )
  }

  async fn actors_with_role(
    &self,
    role: Role,
  ) -> Result<Vec<Actor>, Infallible> {
    Ok(
      self
        .actors
        .lock()
        .unwrap()
        .iter()
        .filter(|a| a.role == role)
        .copied()
        .collect(),
    )
  }

  async fn append(
    &self,
    input: NewEvent,
  ) -> Result<AttendanceEvent, Infallible> {
    let event = AttendanceEvent {
      event_id:   Uuid::new_v4(),
      subject_id: input.subject_id,
      date:       input.date,
      time:       input.time,
      status:     input.status,
    };
    self.events.lock().unwrap().push(event.clone());
    Ok(event)
  }

  async fn events_for_subject(
    &self,
    id: Uuid,
  ) -> Result<Vec<AttendanceEvent>, Infallible> {
    Ok(
      self
        .events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.subject_id == id)
        .cloned()
        .collect(),
    )
  }

  async fn all_events(&self) -> Result<Vec<AttendanceEvent>, Infallible> {
    Ok(self.events.lock().unwrap().clone())
  }

  async fn events_in_range(
    &self,
    id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
  ) -> Result<Vec<AttendanceEvent>, Infallible> {
    Ok(
      self
        .events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.subject_id == id && e.date >= start && e.date <= end)
        .cloned()
        .collect(),
    )
  }
}
