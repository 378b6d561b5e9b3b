//! The `FacilityStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `pulseboard-store-memory`). The API layer depends on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  Result,
  bed::{Bed, BedClass, BedId},
  patient::{NewPatient, Patient, PatientId, PatientStatus},
  readmodel::{Appointment, LabTest, PipelineStage, Resource, Stat},
  session::FacilityType,
  staff::{NewStaffMember, StaffMember},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for the record-listing reads. `text` is the records-page search
/// box: a case-insensitive substring match over the fields each record type
/// is searched by (patient name/id, appointment patient/doctor, lab-test
/// patient/test name).
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
  pub text:   Option<String>,
  /// Restrict patients to a specific status. Ignored by non-patient reads.
  pub status: Option<PatientStatus>,
}

impl RecordQuery {
  /// Whether `candidates` satisfies the text filter (any field matching).
  pub fn text_matches(&self, candidates: &[&str]) -> bool {
    match &self.text {
      None => true,
      Some(needle) => {
        let needle = needle.to_lowercase();
        candidates
          .iter()
          .any(|field| field.to_lowercase().contains(&needle))
      }
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Pulseboard facility-state backend.
///
/// All mutations are synchronous last-write-wins state transitions; there is
/// no history and no coalescing. Methods return `Send` futures so the trait
/// can be used from multi-threaded async runtimes (tokio with `axum`).
pub trait FacilityStore: Send + Sync {
  // ── Beds ──────────────────────────────────────────────────────────────

  /// All beds, in pool order.
  fn list_beds(
    &self,
  ) -> impl Future<Output = Result<Vec<Bed>>> + Send + '_;

  /// A single bed by id. Returns `None` if not found.
  fn get_bed<'a>(
    &'a self,
    id: &'a BedId,
  ) -> impl Future<Output = Result<Option<Bed>>> + Send + 'a;

  /// Admit a new patient into the named bed: the store synthesises the next
  /// patient id, records the patient as admitted with today's date, and
  /// moves the bed to occupied with the patient reference set.
  fn assign_patient<'a>(
    &'a self,
    bed_id: &'a BedId,
    input: NewPatient,
  ) -> impl Future<Output = Result<Patient>> + Send + 'a;

  /// Discharge whoever occupies the named bed. The patient record (if any)
  /// flips to discharged and is retained; the bed always moves to cleaning
  /// with its patient reference cleared. Returns the updated bed.
  fn discharge_patient<'a>(
    &'a self,
    bed_id: &'a BedId,
  ) -> impl Future<Output = Result<Bed>> + Send + 'a;

  /// Move the named bed to available, whatever its current status. Resolves
  /// both cleaning and maintenance; idempotent.
  fn mark_clean<'a>(
    &'a self,
    bed_id: &'a BedId,
  ) -> impl Future<Output = Result<Bed>> + Send + 'a;

  /// Grow or shrink the bed pool to exactly `target` beds. Growth appends
  /// vacant beds of `class`; shrinkage truncates from the end of the pool,
  /// discharging any patients the removed beds still held. Returns the
  /// resulting pool.
  fn resize_bed_pool(
    &self,
    target: usize,
    class: BedClass,
  ) -> impl Future<Output = Result<Vec<Bed>>> + Send + '_;

  // ── Patients ──────────────────────────────────────────────────────────

  fn list_patients(
    &self,
    query: RecordQuery,
  ) -> impl Future<Output = Result<Vec<Patient>>> + Send + '_;

  fn get_patient<'a>(
    &'a self,
    id: &'a PatientId,
  ) -> impl Future<Output = Result<Option<Patient>>> + Send + 'a;

  // ── Staff ─────────────────────────────────────────────────────────────

  fn list_staff(
    &self,
  ) -> impl Future<Output = Result<Vec<StaffMember>>> + Send + '_;

  /// Append a roster entry with the next synthesised staff id.
  fn add_staff(
    &self,
    input: NewStaffMember,
  ) -> impl Future<Output = Result<StaffMember>> + Send + '_;

  // ── Read models ───────────────────────────────────────────────────────

  fn stats(
    &self,
    facility: FacilityType,
  ) -> impl Future<Output = Result<Vec<Stat>>> + Send + '_;

  fn appointments(
    &self,
    query: RecordQuery,
  ) -> impl Future<Output = Result<Vec<Appointment>>> + Send + '_;

  fn lab_tests(
    &self,
    query: RecordQuery,
  ) -> impl Future<Output = Result<Vec<LabTest>>> + Send + '_;

  fn resources(
    &self,
    facility: FacilityType,
  ) -> impl Future<Output = Result<Vec<Resource>>> + Send + '_;

  fn pipeline(
    &self,
  ) -> impl Future<Output = Result<Vec<PipelineStage>>> + Send + '_;
}
