//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! The core error taxonomy maps onto status codes as: validation → 400,
//! denial → 403, not-found → 404, store failure → 500. Missing identity
//! headers are the transport's own concern and map to 401.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use muster_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The identity headers were absent or malformed.
  #[error("missing or malformed identity headers")]
  Unauthorized,

  #[error(transparent)]
  Core(#[from] CoreError),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Unauthorized => {
        (StatusCode::UNAUTHORIZED, self.to_string())
      }
      ApiError::Core(e) => {
        let status = match e {
          CoreError::Validation(_) => StatusCode::BAD_REQUEST,
          CoreError::Denied(_) => StatusCode::FORBIDDEN,
          CoreError::NotFound(_) => StatusCode::NOT_FOUND,
          CoreError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
