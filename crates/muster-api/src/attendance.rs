//! Handlers for recording attendance and listing history.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/attendance` | Body: [`RecordBody`]; returns 201 + stored event |
//! | `GET`  | `/attendance/history` | Optional `?subject_id`; policy-scoped |
//! | `GET`  | `/attendance/history/:subject_id` | Admin-only strict variant |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use muster_core::{
  clock::SystemClock,
  event::{AttendanceEvent, Status},
  history::{list_history, list_history_strict},
  recorder,
  store::AttendanceStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, identity::ActorIdentity};

// ─── Record ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /attendance`.
///
/// `subject_id` is required for admins and ignored for members, who always
/// record for themselves.
#[derive(Debug, Deserialize)]
pub struct RecordBody {
  pub status:     Status,
  pub subject_id: Option<Uuid>,
}

/// `POST /attendance` — returns 201 + the stored [`AttendanceEvent`].
pub async fn record<S>(
  State(store): State<Arc<S>>,
  ActorIdentity(actor): ActorIdentity,
  Json(body): Json<RecordBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: AttendanceStore,
{
  let event = recorder::record(
    store.as_ref(),
    &SystemClock,
    &actor,
    body.subject_id,
    body.status,
  )
  .await?;
  Ok((StatusCode::CREATED, Json(event)))
}

// ─── History ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
  pub subject_id: Option<Uuid>,
}

/// `GET /attendance/history[?subject_id=<id>]`
pub async fn history<S>(
  State(store): State<Arc<S>>,
  ActorIdentity(actor): ActorIdentity,
  Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<AttendanceEvent>>, ApiError>
where
  S: AttendanceStore,
{
  let events =
    list_history(store.as_ref(), &actor, params.subject_id).await?;
  Ok(Json(events))
}

/// `GET /attendance/history/:subject_id` — the admin-only entry point.
pub async fn history_strict<S>(
  State(store): State<Arc<S>>,
  ActorIdentity(actor): ActorIdentity,
  Path(subject_id): Path<Uuid>,
) -> Result<Json<Vec<AttendanceEvent>>, ApiError>
where
  S: AttendanceStore,
{
  let events =
    list_history_strict(store.as_ref(), &actor, subject_id).await?;
  Ok(Json(events))
}
