//! Recorder — validates and appends one attendance event per request.
//!
//! Order of checks matters: policy first, then status, then the clock stamp,
//! then the append. Nothing reaches the store until every check has passed.

use uuid::Uuid;

use crate::{
  actor::Actor,
  clock::Clock,
  error::{Error, ValidationError},
  event::{AttendanceEvent, NewEvent, Status},
  policy::decide_write,
  store::AttendanceStore,
  Result,
};

/// Record one attendance event on behalf of `actor`.
///
/// The subject is resolved by [`decide_write`]: admins record for the
/// requested subject, members for themselves. `date` and `time` come from
/// `clock`, never from the caller, so events cannot be backdated. Recording
/// twice on the same day produces two independent rows; no dedupe happens
/// here or in storage.
pub async fn record<S>(
  store: &S,
  clock: &impl Clock,
  actor: &Actor,
  requested_subject: Option<Uuid>,
  status: Status,
) -> Result<AttendanceEvent>
where
  S: AttendanceStore,
{
  let grant = decide_write(actor, requested_subject)?;

  if !grant.permits(status) {
    return Err(ValidationError::InvalidStatus(status).into());
  }

  let now = clock.now();
  let input = NewEvent {
    subject_id: grant.subject_id,
    date:       now.date_naive(),
    time:       now.time(),
    status,
  };

  store.append(input).await.map_err(Error::store)
}
