//! Error types for `pulseboard-core`.

use thiserror::Error;

use crate::{bed::BedId, patient::PatientId};

#[derive(Debug, Error)]
pub enum Error {
  #[error("bed not found: {0}")]
  BedNotFound(BedId),

  #[error("patient not found: {0}")]
  PatientNotFound(PatientId),

  #[error("invalid facility id: {0:?} (expected H-xxxx, C-xxxx, or L-xxxx)")]
  InvalidFacilityId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
