//! Handlers for the `/patients` endpoints.
//!
//! `GET /patients` accepts `?q=<text>` (the records-page search box; matches
//! name or id) and `?status=<admitted|discharged|pending|critical>`.

use axum::{
  Json,
  extract::{Path, Query, State},
};
use pulseboard_core::{
  patient::{Patient, PatientId, PatientStatus},
  store::{FacilityStore, RecordQuery},
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, session::Authenticated};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub q:      Option<String>,
  pub status: Option<PatientStatus>,
}

impl From<ListParams> for RecordQuery {
  fn from(params: ListParams) -> Self {
    Self { text: params.q, status: params.status }
  }
}

/// `GET /patients[?q=][&status=]`
pub async fn list<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Patient>>, ApiError>
where
  S: FacilityStore,
{
  let patients = state
    .store
    .list_patients(params.into())
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(patients))
}

/// `GET /patients/:id`
pub async fn get_one<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError>
where
  S: FacilityStore,
{
  let id = PatientId(id);
  let patient = state
    .store
    .get_patient(&id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("patient {id} not found")))?;
  Ok(Json(patient))
}
