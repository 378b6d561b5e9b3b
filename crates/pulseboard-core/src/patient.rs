//! Patient records.
//!
//! A patient record is created when a bed is assigned and retained forever;
//! discharge flips its status but never deletes it.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque patient identifier, e.g. `P-101`.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct PatientId(pub String);

impl fmt::Display for PatientId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for PatientId {
  fn from(s: &str) -> Self { Self(s.to_string()) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
  Admitted,
  Discharged,
  Pending,
  Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
  pub id:             PatientId,
  pub name:           String,
  pub age:            u8,
  pub gender:         String,
  pub status:         PatientStatus,
  pub ward:           Option<String>,
  pub admission_date: NaiveDate,
  pub symptoms:       Vec<String>,
}

/// Input to [`crate::store::FacilityStore::assign_patient`].
/// The id, status, and admission date are always set by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
  pub name:     String,
  pub age:      u8,
  pub gender:   String,
  #[serde(default)]
  pub ward:     Option<String>,
  #[serde(default)]
  pub symptoms: Vec<String>,
}
