//! Session manager, cache persistence, and the `/session` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/session` | Body: `{"email":…,"facility_id":"H-1234"}` |
//! | `GET`    | `/session` | 404 when logged out |
//! | `DELETE` | `/session` | Idempotent |
//!
//! The manager holds at most one active session (the dashboard is a
//! single-operator surface) and mirrors it into an optional JSON cache file:
//! written on login, removed on logout, read once at startup. Cache IO is
//! best-effort; failures are logged and never fail the operation.

use std::path::PathBuf;

use axum::{
  Json,
  extract::{FromRequestParts, State},
  http::{StatusCode, request::Parts},
  response::IntoResponse,
};
use pulseboard_core::{Result as CoreResult, session::Session, store::FacilityStore};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{ApiState, error::ApiError};

// ─── Manager ─────────────────────────────────────────────────────────────────

/// Owns the current session and its cache record.
pub struct SessionManager {
  current:    RwLock<Option<Session>>,
  cache_path: Option<PathBuf>,
}

impl SessionManager {
  /// A manager with no cache file.
  pub fn new() -> Self {
    Self { current: RwLock::new(None), cache_path: None }
  }

  /// A manager backed by a cache file at `path`. An existing, readable
  /// record restores the session; anything else starts logged out.
  pub fn with_cache(path: PathBuf) -> Self {
    let restored = match std::fs::read(&path) {
      Ok(bytes) => match serde_json::from_slice::<Session>(&bytes) {
        Ok(session) => {
          tracing::info!(facility_id = %session.facility_id, "restored cached session");
          Some(session)
        }
        Err(error) => {
          tracing::warn!(%error, ?path, "ignoring unreadable session cache");
          None
        }
      },
      Err(_) => None,
    };
    Self { current: RwLock::new(restored), cache_path: Some(path) }
  }

  /// Validate the facility id, open a session, and make it current.
  /// Replaces any previously active session.
  pub async fn login(&self, email: &str, facility_id: &str) -> CoreResult<Session> {
    let session = Session::open(email, facility_id)?;
    *self.current.write().await = Some(session.clone());
    self.write_cache(&session);
    Ok(session)
  }

  /// Clear the current session and its cache record. Idempotent.
  pub async fn logout(&self) {
    *self.current.write().await = None;
    if let Some(path) = &self.cache_path
      && let Err(error) = std::fs::remove_file(path)
      && error.kind() != std::io::ErrorKind::NotFound
    {
      tracing::warn!(%error, ?path, "failed to remove session cache");
    }
  }

  /// The active session, if any.
  pub async fn current(&self) -> Option<Session> {
    self.current.read().await.clone()
  }

  fn write_cache(&self, session: &Session) {
    let Some(path) = &self.cache_path else { return };
    let result = serde_json::to_vec_pretty(session)
      .map_err(std::io::Error::other)
      .and_then(|bytes| std::fs::write(path, bytes));
    if let Err(error) = result {
      tracing::warn!(%error, ?path, "failed to write session cache");
    }
  }
}

impl Default for SessionManager {
  fn default() -> Self { Self::new() }
}

// ─── Extractor ───────────────────────────────────────────────────────────────

/// Zero-size marker: present in a handler means a session is active.
pub struct Authenticated;

impl<S> FromRequestParts<ApiState<S>> for Authenticated
where
  S: FacilityStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    _parts: &mut Parts,
    state: &ApiState<S>,
  ) -> Result<Self, Self::Rejection> {
    match state.sessions.current().await {
      Some(_) => Ok(Authenticated),
      None => Err(ApiError::Unauthorized),
    }
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email:       String,
  pub facility_id: String,
}

/// `POST /session`
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FacilityStore,
{
  let session = state
    .sessions
    .login(&body.email, &body.facility_id)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(facility_id = %session.facility_id, "session opened");
  Ok((StatusCode::CREATED, Json(session)))
}

/// `GET /session`
pub async fn current<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Session>, ApiError>
where
  S: FacilityStore,
{
  state
    .sessions
    .current()
    .await
    .map(Json)
    .ok_or_else(|| ApiError::NotFound("no active session".to_string()))
}

/// `DELETE /session`
pub async fn delete<S>(State(state): State<ApiState<S>>) -> StatusCode
where
  S: FacilityStore,
{
  state.sessions.logout().await;
  StatusCode::NO_CONTENT
}
