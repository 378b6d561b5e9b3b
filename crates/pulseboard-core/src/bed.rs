//! Bed — the unit of ward capacity.
//!
//! A bed's only lifecycle is its status cycle: available → occupied →
//! cleaning → available, with maintenance as an out-of-band state resolved by
//! the same mark-clean operation. Invariant: a bed carries a patient
//! reference if and only if its status is `Occupied`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patient::PatientId;

/// Opaque bed identifier, e.g. `B-101`.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct BedId(pub String);

impl fmt::Display for BedId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for BedId {
  fn from(s: &str) -> Self { Self(s.to_string()) }
}

/// Where a bed is in its occupancy cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedStatus {
  Available,
  Occupied,
  Cleaning,
  Maintenance,
}

/// The class of care a bed supports; determines its ward and number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedClass {
  General,
  Icu,
  Pediatric,
}

impl BedClass {
  /// Ward name new beds of this class are placed in.
  pub fn ward_name(self) -> &'static str {
    match self {
      Self::General => "General Ward",
      Self::Icu => "ICU",
      Self::Pediatric => "Pediatric Ward",
    }
  }

  /// Single-letter prefix used when synthesising bed numbers.
  pub fn number_prefix(self) -> char {
    match self {
      Self::General => 'G',
      Self::Icu => 'I',
      Self::Pediatric => 'P',
    }
  }
}

/// A single bed. `patient_id` is `Some` exactly when `status` is `Occupied`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bed {
  pub id:         BedId,
  pub ward:       String,
  pub number:     String,
  pub status:     BedStatus,
  pub patient_id: Option<PatientId>,
  pub class:      BedClass,
}

impl Bed {
  /// A freshly synthesised, empty bed of the given class.
  pub fn vacant(id: BedId, number: String, class: BedClass) -> Self {
    Self {
      id,
      ward: class.ward_name().to_string(),
      number,
      status: BedStatus::Available,
      patient_id: None,
      class,
    }
  }

  /// Whether the occupancy invariant holds for this bed.
  pub fn invariant_holds(&self) -> bool {
    (self.status == BedStatus::Occupied) == self.patient_id.is_some()
  }
}
