//! Router integration tests against the in-memory store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use pulseboard_core::kpi::KpiSnapshot;
use pulseboard_store_memory::MemoryStore;
use serde_json::{Value, json};
use tokio::sync::watch;
use tower::ServiceExt as _;

use crate::{ApiState, SessionManager, api_router};

fn make_state() -> ApiState<MemoryStore> {
  let (_tx, rx) = watch::channel(KpiSnapshot::startup());
  ApiState {
    store:    Arc::new(MemoryStore::with_demo_data()),
    sessions: Arc::new(SessionManager::new()),
    kpi:      rx,
  }
}

async fn request(
  state: ApiState<MemoryStore>,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(value) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(value.to_string())
    }
    None => Body::empty(),
  };
  let response = api_router(state)
    .oneshot(builder.body(body).unwrap())
    .await
    .unwrap();

  let status = response.status();
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

async fn login(state: &ApiState<MemoryStore>, facility_id: &str) {
  let (status, _) = request(
    state.clone(),
    "POST",
    "/session",
    Some(json!({ "email": "ops@example.org", "facility_id": facility_id })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
}

// ─── Session ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_with_valid_hospital_id() {
  let state = make_state();
  let (status, body) = request(
    state.clone(),
    "POST",
    "/session",
    Some(json!({ "email": "ward.lead@example.org", "facility_id": "H-2048" })),
  )
  .await;

  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["facility_type"], "hospital");
  assert_eq!(body["facility_id"], "H-2048");
  assert_eq!(body["name"], "ward.lead");

  let (status, body) = request(state, "GET", "/session", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["facility_type"], "hospital");
}

#[tokio::test]
async fn login_with_too_few_digits_fails() {
  let state = make_state();
  let (status, body) = request(
    state,
    "POST",
    "/session",
    Some(json!({ "email": "a@b.c", "facility_id": "C-99" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("invalid facility id"));
}

#[tokio::test]
async fn login_with_unknown_prefix_fails() {
  let state = make_state();
  let (status, _) = request(
    state,
    "POST",
    "/session",
    Some(json!({ "email": "a@b.c", "facility_id": "X-1234" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_clears_the_session() {
  let state = make_state();
  login(&state, "L-4040").await;

  let (status, _) = request(state.clone(), "DELETE", "/session", None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (status, _) = request(state.clone(), "GET", "/session", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  // Logged out again: data endpoints reject.
  let (status, _) = request(state, "GET", "/beds", None).await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn data_endpoints_require_a_session() {
  let state = make_state();
  for uri in ["/beds", "/patients", "/staff", "/kpi", "/pipeline"] {
    let (status, _) = request(state.clone(), "GET", uri, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED, "uri: {uri}");
  }
}

#[tokio::test]
async fn session_cache_round_trips_across_managers() {
  let path = std::env::temp_dir()
    .join(format!("pulseboard-session-{}.json", uuid::Uuid::new_v4()));

  let manager = SessionManager::with_cache(path.clone());
  assert!(manager.current().await.is_none());
  manager.login("ops@example.org", "c-1234").await.unwrap();
  assert!(path.exists());

  // A fresh manager restores the cached record.
  let restored = SessionManager::with_cache(path.clone());
  let session = restored.current().await.expect("session restored");
  assert_eq!(session.facility_id.as_str(), "C-1234");

  restored.logout().await;
  assert!(!path.exists());
}

// ─── Telemetry ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn kpi_returns_the_latest_snapshot() {
  let state = make_state();
  login(&state, "H-1234").await;

  let (status, body) = request(state, "GET", "/kpi", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["queue_length"], 4);
  assert_eq!(body["bed_occupancy_pct"], 78);
  assert_eq!(body["emergency_active"], false);
}

// ─── Beds ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn bed_lifecycle_over_http() {
  let state = make_state();
  login(&state, "H-1234").await;

  let (status, patient) = request(
    state.clone(),
    "POST",
    "/beds/B-102/assign",
    Some(json!({
      "name": "Nora Quinn",
      "age": 41,
      "gender": "F",
      "symptoms": ["Fever"]
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(patient["status"], "admitted");
  assert_eq!(patient["id"], "P-107");

  let (status, bed) =
    request(state.clone(), "POST", "/beds/B-102/discharge", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(bed["status"], "cleaning");
  assert_eq!(bed["patient_id"], Value::Null);

  let (status, bed) =
    request(state.clone(), "POST", "/beds/B-102/clean", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(bed["status"], "available");

  // The patient record survives the discharge.
  let (status, record) =
    request(state, "GET", "/patients/P-107", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(record["status"], "discharged");
}

#[tokio::test]
async fn assign_to_unknown_bed_returns_404() {
  let state = make_state();
  login(&state, "H-1234").await;

  let (status, body) = request(
    state,
    "POST",
    "/beds/B-999/assign",
    Some(json!({ "name": "Ghost", "age": 1, "gender": "M" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("B-999"));
}

#[tokio::test]
async fn pool_resize_over_http() {
  let state = make_state();
  login(&state, "H-1234").await;

  let (status, beds) = request(
    state.clone(),
    "PUT",
    "/beds/pool",
    Some(json!({ "count": 12, "class": "icu" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let beds = beds.as_array().unwrap();
  assert_eq!(beds.len(), 12);
  assert_eq!(beds[11]["class"], "icu");
  assert_eq!(beds[11]["status"], "available");

  let (status, beds) = request(
    state,
    "PUT",
    "/beds/pool",
    Some(json!({ "count": 5 })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(beds.as_array().unwrap().len(), 5);
}

// ─── Staff and read models ───────────────────────────────────────────────────

#[tokio::test]
async fn staff_roster_appends_over_http() {
  let state = make_state();
  login(&state, "H-1234").await;

  let (status, member) = request(
    state.clone(),
    "POST",
    "/staff",
    Some(json!({
      "name": "Nurse Priya",
      "role": "nurse",
      "department": "Pediatrics",
      "shift": "evening",
      "status": "active"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(member["id"], "S-005");

  let (_, roster) = request(state, "GET", "/staff", None).await;
  assert_eq!(roster.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn read_models_filter_by_facility_and_text() {
  let state = make_state();
  login(&state, "C-1234").await;

  let (status, stats) =
    request(state.clone(), "GET", "/stats?facility=clinic", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(stats.as_array().unwrap().len(), 4);
  assert_eq!(stats[0]["label"], "Appointments");
  assert_eq!(stats[0]["icon"], "calendar");

  let (_, hits) =
    request(state.clone(), "GET", "/appointments?q=sarah", None).await;
  assert_eq!(hits.as_array().unwrap().len(), 2);

  let (_, hits) =
    request(state.clone(), "GET", "/lab-tests?q=lipid", None).await;
  assert_eq!(hits.as_array().unwrap().len(), 1);

  let (_, patients) =
    request(state, "GET", "/patients?q=jane", None).await;
  assert_eq!(patients.as_array().unwrap().len(), 1);
  assert_eq!(patients[0]["name"], "Jane Smith");
}
