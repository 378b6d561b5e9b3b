//! JSON REST API for Pulseboard.
//!
//! Exposes an axum [`Router`] backed by any
//! [`pulseboard_core::store::FacilityStore`], the session manager, and a
//! subscription to the KPI simulator. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", pulseboard_api::api_router(state))
//! ```

pub mod beds;
pub mod error;
pub mod kpi;
pub mod overview;
pub mod patients;
pub mod session;
pub mod staff;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use pulseboard_core::{kpi::KpiSnapshot, store::FacilityStore};
use tokio::sync::watch;

pub use error::ApiError;
pub use session::SessionManager;

/// Shared state threaded through all axum handlers.
pub struct ApiState<S> {
  pub store:    Arc<S>,
  pub sessions: Arc<SessionManager>,
  pub kpi:      watch::Receiver<KpiSnapshot>,
}

// Derived `Clone` would demand `S: Clone`; the `Arc`s make that unnecessary.
impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      sessions: Arc::clone(&self.sessions),
      kpi:      self.kpi.clone(),
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: FacilityStore + 'static,
{
  Router::new()
    // Session
    .route(
      "/session",
      get(session::current::<S>)
        .post(session::create::<S>)
        .delete(session::delete::<S>),
    )
    // Telemetry
    .route("/kpi", get(kpi::snapshot::<S>))
    // Beds
    .route("/beds", get(beds::list::<S>))
    .route("/beds/pool", put(beds::resize::<S>))
    .route("/beds/{id}/assign", post(beds::assign::<S>))
    .route("/beds/{id}/discharge", post(beds::discharge::<S>))
    .route("/beds/{id}/clean", post(beds::clean::<S>))
    // Patients
    .route("/patients", get(patients::list::<S>))
    .route("/patients/{id}", get(patients::get_one::<S>))
    // Staff
    .route("/staff", get(staff::list::<S>).post(staff::create::<S>))
    // Read models
    .route("/stats", get(overview::stats::<S>))
    .route("/appointments", get(overview::appointments::<S>))
    .route("/lab-tests", get(overview::lab_tests::<S>))
    .route("/resources", get(overview::resources::<S>))
    .route("/pipeline", get(overview::pipeline::<S>))
    .with_state(state)
}

#[cfg(test)]
mod tests;
