//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("no active session")]
  Unauthorized,
}

impl ApiError {
  /// Map a store error onto the HTTP taxonomy: missing entities are 404s,
  /// malformed input is a 400.
  pub fn from_store(err: pulseboard_core::Error) -> Self {
    use pulseboard_core::Error as E;
    match err {
      E::BedNotFound(id) => Self::NotFound(format!("bed {id} not found")),
      E::PatientNotFound(id) => {
        Self::NotFound(format!("patient {id} not found"))
      }
      E::InvalidFacilityId(_) => Self::BadRequest(err.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Unauthorized => {
        (StatusCode::UNAUTHORIZED, self.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
