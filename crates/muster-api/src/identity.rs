//! Actor-identity extractor — the boundary with the upstream identity layer.
//!
//! Credentials are verified upstream; by the time a request reaches this
//! router, the identity layer has placed the authenticated actor's id and
//! role in the `x-actor-id` and `x-actor-role` headers. The extractor turns
//! them into an explicit [`Actor`] value that handlers pass into the core —
//! the core never reads ambient request state.

use axum::{extract::FromRequestParts, http::request::Parts};
use muster_core::actor::{Actor, Role};
use uuid::Uuid;

use crate::error::ApiError;

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// The authenticated caller, extracted from the identity headers.
///
/// Missing or malformed headers reject with 401. A role string outside the
/// closed set rejects with 403 (`UnrecognizedRole`) — an unknown role is a
/// hard denial, never defaulted.
pub struct ActorIdentity(pub Actor);

fn header<'p>(parts: &'p Parts, name: &str) -> Result<&'p str, ApiError> {
  parts
    .headers
    .get(name)
    .and_then(|v| v.to_str().ok())
    .ok_or(ApiError::Unauthorized)
}

impl<S> FromRequestParts<S> for ActorIdentity
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    _state: &S,
  ) -> Result<Self, Self::Rejection> {
    let actor_id = header(parts, ACTOR_ID_HEADER)?
      .parse::<Uuid>()
      .map_err(|_| ApiError::Unauthorized)?;

    let role = header(parts, ACTOR_ROLE_HEADER)?
      .parse::<Role>()
      .map_err(|denied| ApiError::Core(denied.into()))?;

    Ok(ActorIdentity(Actor { actor_id, role }))
  }
}
