//! Actor — the authenticated caller of every core operation.
//!
//! Actors are owned by the upstream identity system; the core receives one
//! per request and never reaches into ambient state for it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DeniedError;

/// The role an actor holds within the organization.
///
/// The set is closed: every match in the core is exhaustive, so an
/// unrecognized role can only exist at a decode boundary (header, database
/// column), where [`Role::from_str`] turns it into an explicit denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  Member,
}

impl Role {
  /// The discriminant string stored in the `role` column and carried in the
  /// identity headers. Must match the `rename_all = "lowercase"` serde tags.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Admin => "admin",
      Self::Member => "member",
    }
  }
}

impl FromStr for Role {
  type Err = DeniedError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "admin" => Ok(Self::Admin),
      "member" => Ok(Self::Member),
      other => Err(DeniedError::UnrecognizedRole(other.to_owned())),
    }
  }
}

/// The authenticated caller: an identity and a role, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
  pub actor_id: Uuid,
  pub role:     Role,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_round_trips_through_str() {
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("member".parse::<Role>().unwrap(), Role::Member);
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Member.as_str(), "member");
  }

  #[test]
  fn unknown_role_is_an_explicit_denial() {
    let err = "superuser".parse::<Role>().unwrap_err();
    assert!(matches!(err, DeniedError::UnrecognizedRole(s) if s == "superuser"));
  }
}
