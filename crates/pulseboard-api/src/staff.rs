//! Handlers for the `/staff` endpoints.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use pulseboard_core::{
  staff::{NewStaffMember, StaffMember},
  store::FacilityStore,
};

use crate::{ApiState, error::ApiError, session::Authenticated};

/// `GET /staff`
pub async fn list<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<StaffMember>>, ApiError>
where
  S: FacilityStore,
{
  let roster = state.store.list_staff().await.map_err(ApiError::from_store)?;
  Ok(Json(roster))
}

/// `POST /staff` — body: a roster entry without the id.
pub async fn create<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Json(body): Json<NewStaffMember>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FacilityStore,
{
  let member = state
    .store
    .add_staff(body)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(member)))
}
