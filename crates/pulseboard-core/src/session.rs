//! Facility sessions.
//!
//! Login is a shape check on the facility id, not credential verification:
//! `H-xxxx`, `C-xxxx`, or `L-xxxx` with three to five digits, case-insensitive
//! on input and normalised to upper case. The prefix letter determines which
//! operational layout the facility sees.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// The kind of facility an operator acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityType {
  Hospital,
  Clinic,
  Lab,
}

impl FacilityType {
  /// Map an id prefix letter (already upper-cased) to a facility type.
  fn from_prefix(letter: char) -> Option<Self> {
    match letter {
      'H' => Some(Self::Hospital),
      'C' => Some(Self::Clinic),
      'L' => Some(Self::Lab),
      _ => None,
    }
  }
}

impl fmt::Display for FacilityType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::Hospital => "hospital",
      Self::Clinic => "clinic",
      Self::Lab => "lab",
    };
    f.write_str(s)
  }
}

/// A validated facility identifier matching `^[HCL]-\d{3,5}$`.
/// Stored upper-cased regardless of input case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(String);

impl FacilityId {
  pub fn as_str(&self) -> &str { &self.0 }

  /// The facility type encoded in the id prefix. Infallible post-validation.
  pub fn facility_type(&self) -> FacilityType {
    // The constructor guarantees a valid prefix letter.
    FacilityType::from_prefix(self.0.as_bytes()[0] as char)
      .unwrap_or(FacilityType::Hospital)
  }
}

impl FromStr for FacilityId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let normalized = s.trim().to_ascii_uppercase();
    let invalid = || Error::InvalidFacilityId(s.to_string());

    let (prefix, digits) = normalized.split_once('-').ok_or_else(invalid)?;
    let mut prefix_chars = prefix.chars();
    let letter = prefix_chars.next().ok_or_else(invalid)?;
    if prefix_chars.next().is_some()
      || FacilityType::from_prefix(letter).is_none()
    {
      return Err(invalid());
    }
    if !(3..=5).contains(&digits.len())
      || !digits.bytes().all(|b| b.is_ascii_digit())
    {
      return Err(invalid());
    }
    Ok(Self(normalized))
  }
}

impl fmt::Display for FacilityId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// The record of an operator's login. At most one session is active at a
/// time; this mirrors the single-operator client the dashboard serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  pub id:            Uuid,
  pub name:          String,
  pub email:         String,
  pub facility_type: FacilityType,
  pub facility_id:   FacilityId,
  pub opened_at:     DateTime<Utc>,
}

impl Session {
  /// Open a session from login input. Fails only on facility-id shape; the
  /// display name is the local part of the email, defaulting to "User".
  pub fn open(email: &str, facility_id: &str) -> Result<Self> {
    let facility_id: FacilityId = facility_id.parse()?;
    let name = match email.split('@').next() {
      Some(local) if !local.is_empty() => local.to_string(),
      _ => "User".to_string(),
    };
    Ok(Self {
      id: Uuid::new_v4(),
      name,
      email: email.to_string(),
      facility_type: facility_id.facility_type(),
      facility_id,
      opened_at: Utc::now(),
    })
  }
}
