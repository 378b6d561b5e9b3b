//! Handlers for the per-facility read models: stat cards, appointments, lab
//! tests, resources, and the sample pipeline.

use axum::{
  Json,
  extract::{Query, State},
};
use pulseboard_core::{
  readmodel::{Appointment, LabTest, PipelineStage, Resource, Stat},
  session::FacilityType,
  store::{FacilityStore, RecordQuery},
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, session::Authenticated};

#[derive(Debug, Deserialize)]
pub struct FacilityParams {
  pub facility: FacilityType,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
  pub q: Option<String>,
}

impl From<SearchParams> for RecordQuery {
  fn from(params: SearchParams) -> Self {
    Self { text: params.q, status: None }
  }
}

/// `GET /stats?facility=<hospital|clinic|lab>`
pub async fn stats<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Query(params): Query<FacilityParams>,
) -> Result<Json<Vec<Stat>>, ApiError>
where
  S: FacilityStore,
{
  let stats = state
    .store
    .stats(params.facility)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(stats))
}

/// `GET /appointments[?q=]`
pub async fn appointments<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Appointment>>, ApiError>
where
  S: FacilityStore,
{
  let appointments = state
    .store
    .appointments(params.into())
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(appointments))
}

/// `GET /lab-tests[?q=]`
pub async fn lab_tests<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<LabTest>>, ApiError>
where
  S: FacilityStore,
{
  let tests = state
    .store
    .lab_tests(params.into())
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(tests))
}

/// `GET /resources?facility=<hospital|clinic|lab>`
pub async fn resources<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Query(params): Query<FacilityParams>,
) -> Result<Json<Vec<Resource>>, ApiError>
where
  S: FacilityStore,
{
  let resources = state
    .store
    .resources(params.facility)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(resources))
}

/// `GET /pipeline`
pub async fn pipeline<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<PipelineStage>>, ApiError>
where
  S: FacilityStore,
{
  let stages = state.store.pipeline().await.map_err(ApiError::from_store)?;
  Ok(Json(stages))
}
