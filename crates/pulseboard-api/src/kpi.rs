//! Handler for the `/kpi` endpoint: the latest simulated telemetry snapshot.

use axum::{Json, extract::State};
use pulseboard_core::{kpi::KpiSnapshot, store::FacilityStore};

use crate::{ApiState, error::ApiError, session::Authenticated};

/// `GET /kpi` — whatever the simulator last published.
pub async fn snapshot<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
) -> Result<Json<KpiSnapshot>, ApiError>
where
  S: FacilityStore,
{
  Ok(Json(state.kpi.borrow().clone()))
}
