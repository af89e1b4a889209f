//! JSON REST API for Muster.
//!
//! Exposes an axum [`Router`] backed by any
//! [`muster_core::store::AttendanceStore`]. The authenticated actor arrives
//! via identity headers set by the upstream identity layer (see
//! [`identity`]); TLS and credential verification are that layer's
//! responsibility, never this crate's.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", muster_api::api_router(store.clone()))
//! ```

pub mod actors;
pub mod attendance;
pub mod error;
pub mod identity;
pub mod reports;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post, put},
};
use muster_core::store::AttendanceStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: AttendanceStore + 'static,
{
  Router::new()
    // Recording
    .route("/attendance", post(attendance::record::<S>))
    // History
    .route("/attendance/history", get(attendance::history::<S>))
    .route(
      "/attendance/history/{subject_id}",
      get(attendance::history_strict::<S>),
    )
    // Reports
    .route(
      "/attendance/summary/{subject_id}",
      get(reports::monthly_summary::<S>),
    )
    .route("/attendance/analysis", get(reports::period_analysis::<S>))
    // Identity sync
    .route("/actors/{id}", put(actors::upsert::<S>))
    .with_state(store)
}
