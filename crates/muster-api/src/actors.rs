//! Handler for the identity-sync endpoint.
//!
//! The identity system owns actor accounts; this hook lets it mirror ids
//! and roles into the attendance store so role-grouped queries can run
//! locally. Admin-only.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use muster_core::{
  actor::{Actor, Role},
  error::{DeniedError, Error},
  store::AttendanceStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, identity::ActorIdentity};

#[derive(Debug, Deserialize)]
pub struct UpsertBody {
  pub role: Role,
}

/// `PUT /actors/:id` — body: `{"role":"member"}`
pub async fn upsert<S>(
  State(store): State<Arc<S>>,
  ActorIdentity(caller): ActorIdentity,
  Path(id): Path<Uuid>,
  Json(body): Json<UpsertBody>,
) -> Result<Json<Actor>, ApiError>
where
  S: AttendanceStore,
{
  if caller.role != Role::Admin {
    return Err(ApiError::Core(DeniedError::Forbidden.into()));
  }

  let actor = Actor { actor_id: id, role: body.role };
  store.upsert_actor(actor).await.map_err(Error::store)?;
  Ok(Json(actor))
}
