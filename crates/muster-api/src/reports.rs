//! Handlers for the derived statistics endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET` | `/attendance/summary/:subject_id` | Per-month status counts |
//! | `GET` | `/attendance/analysis` | `?start_date&end_date&group_by=<role>` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::NaiveDate;
use muster_core::{
  actor::Role,
  error::{Error, NotFoundError, ValidationError},
  report::{analyze_by_period, summarize_by_month, MonthlySummary, PeriodGroupAnalysis},
  store::AttendanceStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::ApiError, identity::ActorIdentity};

// ─── Monthly summary ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
  pub subject_id: Uuid,
  pub months:     Vec<MonthlySummary>,
}

/// `GET /attendance/summary/:subject_id`
///
/// 404 (`UnknownSubject`) when the subject is not mirrored in the store; a
/// known subject with no events yields an empty `months` list.
pub async fn monthly_summary<S>(
  State(store): State<Arc<S>>,
  ActorIdentity(_actor): ActorIdentity,
  Path(subject_id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, ApiError>
where
  S: AttendanceStore,
{
  store
    .get_actor(subject_id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound(NotFoundError::UnknownSubject(subject_id)))?;

  let events = store
    .events_for_subject(subject_id)
    .await
    .map_err(Error::store)?;

  let months = summarize_by_month(subject_id, &events);
  Ok(Json(SummaryResponse { subject_id, months }))
}

// ─── Period analysis ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalysisParams {
  pub start_date: NaiveDate,
  pub end_date:   NaiveDate,
  /// Role name partitioning the actor set, e.g. `member`.
  pub group_by:   String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisPeriod {
  pub start_date: NaiveDate,
  pub end_date:   NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
  pub period:   AnalysisPeriod,
  pub analysis: PeriodGroupAnalysis,
}

/// `GET /attendance/analysis?start_date=…&end_date=…&group_by=<role>`
///
/// An unknown `group_by` role string is a 403 denial, same as an unknown
/// actor role; an inverted date range is a 400.
pub async fn period_analysis<S>(
  State(store): State<Arc<S>>,
  ActorIdentity(_actor): ActorIdentity,
  Query(params): Query<AnalysisParams>,
) -> Result<Json<AnalysisResponse>, ApiError>
where
  S: AttendanceStore,
{
  let role = params
    .group_by
    .parse::<Role>()
    .map_err(|denied| ApiError::Core(denied.into()))?;

  // Fail fast, before any store reads.
  if params.start_date > params.end_date {
    return Err(ApiError::Core(ValidationError::BadDateRange.into()));
  }

  let actors = store
    .actors_with_role(role)
    .await
    .map_err(Error::store)?;

  let mut events = Vec::new();
  for actor in &actors {
    let chunk = store
      .events_in_range(actor.actor_id, params.start_date, params.end_date)
      .await
      .map_err(Error::store)?;
    events.extend(chunk);
  }

  let analysis = analyze_by_period(
    role,
    &actors,
    &events,
    params.start_date,
    params.end_date,
  )?;

  Ok(Json(AnalysisResponse {
    period: AnalysisPeriod {
      start_date: params.start_date,
      end_date:   params.end_date,
    },
    analysis,
  }))
}
