//! Staff roster entries. The roster is append-only with store-generated ids.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque staff identifier, e.g. `S-001`.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct StaffId(pub String);

impl fmt::Display for StaffId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
  Doctor,
  Nurse,
  Technician,
  Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
  Morning,
  Evening,
  Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
  Active,
  OnLeave,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
  pub id:         StaffId,
  pub name:       String,
  pub role:       StaffRole,
  pub department: String,
  pub shift:      Shift,
  pub status:     StaffStatus,
}

/// Input to [`crate::store::FacilityStore::add_staff`].
/// The id is always set by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStaffMember {
  pub name:       String,
  pub role:       StaffRole,
  pub department: String,
  pub shift:      Shift,
  pub status:     StaffStatus,
}
