//! Access policy — pure decision functions over an actor and a target.
//!
//! Every write and read path consults these before touching the store.
//! The functions hold no state and perform no I/O; they resolve whose event
//! is being recorded (writes) or whose history may be seen (reads).

use uuid::Uuid;

use crate::{
  actor::{Actor, Role},
  error::{DeniedError, ValidationError},
  event::Status,
  Result,
};

/// Statuses an admin may record, on behalf of anyone.
pub const ADMIN_STATUSES: &[Status] =
  &[Status::Present, Status::Excused, Status::Sick];

/// Statuses a member may record, for themself only.
pub const MEMBER_STATUSES: &[Status] =
  &[Status::Present, Status::Excused, Status::Late];

/// The outcome of a permitted write: the resolved subject of the event and
/// the statuses the actor is allowed to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteGrant {
  pub subject_id: Uuid,
  pub allowed:    &'static [Status],
}

impl WriteGrant {
  pub fn permits(&self, status: Status) -> bool {
    self.allowed.contains(&status)
  }
}

/// Which subjects a permitted read may cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadScope {
  /// Every subject in the store. Admins only.
  All,
  /// A single subject.
  One(Uuid),
}

/// Decide whether `actor` may record an event, and for whom.
///
/// Admins must name a subject and may record on behalf of anyone; members
/// always record for themselves — a supplied subject id is ignored, not
/// rejected.
pub fn decide_write(
  actor: &Actor,
  requested_subject: Option<Uuid>,
) -> Result<WriteGrant> {
  match actor.role {
    Role::Admin => {
      let subject_id =
        requested_subject.ok_or(ValidationError::MissingSubject)?;
      Ok(WriteGrant { subject_id, allowed: ADMIN_STATUSES })
    }
    Role::Member => Ok(WriteGrant {
      subject_id: actor.actor_id,
      allowed:    MEMBER_STATUSES,
    }),
  }
}

/// Decide whose history `actor` may read.
///
/// Admins see anyone (or everyone, with no subject named); members see only
/// themselves and are denied outright when asking for another id.
pub fn decide_read(
  actor: &Actor,
  requested_subject: Option<Uuid>,
) -> Result<ReadScope> {
  match actor.role {
    Role::Admin => Ok(match requested_subject {
      Some(id) => ReadScope::One(id),
      None => ReadScope::All,
    }),
    Role::Member => match requested_subject {
      Some(id) if id != actor.actor_id => {
        Err(DeniedError::Forbidden.into())
      }
      _ => Ok(ReadScope::One(actor.actor_id)),
    },
  }
}

/// The admin-only read variant: denies everyone but admins, even a member
/// asking for their own history. Coexists with [`decide_read`]; callers use
/// both entry points.
pub fn decide_read_strict(actor: &Actor, subject: Uuid) -> Result<ReadScope> {
  match actor.role {
    Role::Admin => Ok(ReadScope::One(subject)),
    Role::Member => Err(DeniedError::Forbidden.into()),
  }
}
