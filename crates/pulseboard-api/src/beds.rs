//! Handlers for the `/beds` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/beds` | The whole pool, in order |
//! | `POST` | `/beds/:id/assign` | Body: new-patient demographics |
//! | `POST` | `/beds/:id/discharge` | Bed always lands in `cleaning` |
//! | `POST` | `/beds/:id/clean` | Resolves `cleaning` and `maintenance` |
//! | `PUT`  | `/beds/pool` | Body: `{"count":12,"class":"icu"}` |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use pulseboard_core::{
  bed::{Bed, BedClass, BedId},
  patient::NewPatient,
  store::FacilityStore,
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, session::Authenticated};

/// `GET /beds`
pub async fn list<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Bed>>, ApiError>
where
  S: FacilityStore,
{
  let beds = state.store.list_beds().await.map_err(ApiError::from_store)?;
  Ok(Json(beds))
}

/// `POST /beds/:id/assign` — body: new-patient demographics.
pub async fn assign<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
  Json(body): Json<NewPatient>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FacilityStore,
{
  let patient = state
    .store
    .assign_patient(&BedId(id), body)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(patient)))
}

/// `POST /beds/:id/discharge`
pub async fn discharge<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Bed>, ApiError>
where
  S: FacilityStore,
{
  let bed = state
    .store
    .discharge_patient(&BedId(id))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(bed))
}

/// `POST /beds/:id/clean`
pub async fn clean<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Bed>, ApiError>
where
  S: FacilityStore,
{
  let bed = state
    .store
    .mark_clean(&BedId(id))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(bed))
}

#[derive(Debug, Deserialize)]
pub struct ResizeBody {
  pub count: usize,
  #[serde(default = "default_class")]
  pub class: BedClass,
}

fn default_class() -> BedClass { BedClass::General }

/// `PUT /beds/pool` — body: `{"count":12,"class":"icu"}`.
/// Returns the resulting pool.
pub async fn resize<S>(
  _auth: Authenticated,
  State(state): State<ApiState<S>>,
  Json(body): Json<ResizeBody>,
) -> Result<Json<Vec<Bed>>, ApiError>
where
  S: FacilityStore,
{
  let beds = state
    .store
    .resize_bed_pool(body.count, body.class)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(beds))
}
