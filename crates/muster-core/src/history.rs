//! History Reader — policy-filtered access to raw event lists.
//!
//! Both readers treat an empty result set as a reportable condition
//! ([`NotFoundError::NoHistory`]), never as an empty success, so callers can
//! distinguish "nothing recorded" from "denied".

use uuid::Uuid;

use crate::{
  actor::Actor,
  error::{Error, NotFoundError},
  event::AttendanceEvent,
  policy::{decide_read, decide_read_strict, ReadScope},
  store::AttendanceStore,
  Result,
};

async fn fetch_scope<S>(store: &S, scope: ReadScope) -> Result<Vec<AttendanceEvent>>
where
  S: AttendanceStore,
{
  let events = match scope {
    ReadScope::All => store.all_events().await.map_err(Error::store)?,
    ReadScope::One(id) => {
      store.events_for_subject(id).await.map_err(Error::store)?
    }
  };

  if events.is_empty() {
    return Err(NotFoundError::NoHistory.into());
  }
  Ok(events)
}

/// List attendance history visible to `actor`.
///
/// Admins may name any subject, or none to list everything; members always
/// get their own history and are denied when naming another id. Events come
/// back in store insertion order.
pub async fn list_history<S>(
  store: &S,
  actor: &Actor,
  requested_subject: Option<Uuid>,
) -> Result<Vec<AttendanceEvent>>
where
  S: AttendanceStore,
{
  let scope = decide_read(actor, requested_subject)?;
  fetch_scope(store, scope).await
}

/// The admin-only history listing for a named subject.
///
/// Non-admins are denied regardless of whose history they ask for, even
/// their own.
pub async fn list_history_strict<S>(
  store: &S,
  actor: &Actor,
  subject: Uuid,
) -> Result<Vec<AttendanceEvent>>
where
  S: AttendanceStore,
{
  let scope = decide_read_strict(actor, subject)?;
  fetch_scope(store, scope).await
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};

  use super::*;
  use crate::{
    actor::Role,
    clock::FixedClock,
    error::DeniedError,
    event::Status,
    recorder::record,
    testutil::MemStore,
  };

  fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 3, 14, 7, 45, 0).unwrap())
  }

  fn admin() -> Actor {
    Actor { actor_id: Uuid::new_v4(), role: Role::Admin }
  }

  fn member() -> Actor {
    Actor { actor_id: Uuid::new_v4(), role: Role::Member }
  }

  #[tokio::test]
  async fn record_then_list_round_trips() {
    let store = MemStore::default();
    let actor = member();

    let recorded = record(&store, &clock(), &actor, None, Status::Present)
      .await
      .unwrap();

    let history = list_history(&store, &actor, None).await.unwrap();
    assert_eq!(history, vec![recorded]);
  }

  #[tokio::test]
  async fn admin_recorded_event_is_visible_to_its_subject() {
    let store = MemStore::default();
    let subject = member();

    let recorded = record(
      &store,
      &clock(),
      &admin(),
      Some(subject.actor_id),
      Status::Sick,
    )
    .await
    .unwrap();

    let history = list_history(&store, &subject, None).await.unwrap();
    assert_eq!(history, vec![recorded]);
  }

  #[tokio::test]
  async fn member_cannot_list_another_subjects_history() {
    let store = MemStore::default();
    let other = member();
    record(&store, &clock(), &other, None, Status::Present)
      .await
      .unwrap();

    let err = list_history(&store, &member(), Some(other.actor_id))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Denied(DeniedError::Forbidden)));
  }

  #[tokio::test]
  async fn admin_without_subject_lists_everything() {
    let store = MemStore::default();
    let a = member();
    let b = member();
    record(&store, &clock(), &a, None, Status::Present).await.unwrap();
    record(&store, &clock(), &b, None, Status::Late).await.unwrap();

    let history = list_history(&store, &admin(), None).await.unwrap();
    assert_eq!(history.len(), 2);
  }

  #[tokio::test]
  async fn empty_history_is_not_found_not_empty_success() {
    let store = MemStore::default();
    let err = list_history(&store, &member(), None).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(NotFoundError::NoHistory)));
  }

  #[tokio::test]
  async fn strict_listing_is_admin_only() {
    let store = MemStore::default();
    let actor = member();
    record(&store, &clock(), &actor, None, Status::Present)
      .await
      .unwrap();

    // Even the subject themself is denied on the strict entry point.
    let err = list_history_strict(&store, &actor, actor.actor_id)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Denied(DeniedError::Forbidden)));

    let history = list_history_strict(&store, &admin(), actor.actor_id)
      .await
      .unwrap();
    assert_eq!(history.len(), 1);
  }

  #[tokio::test]
  async fn strict_listing_reports_no_history() {
    let store = MemStore::default();
    let err = list_history_strict(&store, &admin(), Uuid::new_v4())
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NotFound(NotFoundError::NoHistory)));
  }
}
