//! `MemoryStore` — the in-memory backend.

use chrono::Utc;
use pulseboard_core::{
  Error,
  bed::{Bed, BedClass, BedId, BedStatus},
  patient::{NewPatient, Patient, PatientId, PatientStatus},
  readmodel::{Appointment, LabTest, PipelineStage, Resource, Stat},
  session::FacilityType,
  staff::{NewStaffMember, StaffId, StaffMember},
  store::{FacilityStore, RecordQuery},
};
use tokio::sync::RwLock;

use crate::seed;

/// One value per facility type.
#[derive(Debug, Clone, Default)]
pub(crate) struct PerFacility<T> {
  pub hospital: T,
  pub clinic:   T,
  pub lab:      T,
}

impl<T> PerFacility<T> {
  fn get(&self, facility: FacilityType) -> &T {
    match facility {
      FacilityType::Hospital => &self.hospital,
      FacilityType::Clinic => &self.clinic,
      FacilityType::Lab => &self.lab,
    }
  }
}

/// Everything the store owns, behind one lock. One logical writer at a time;
/// every operation takes the lock once and finishes synchronously inside it.
#[derive(Debug, Default)]
pub(crate) struct Inner {
  pub beds:         Vec<Bed>,
  pub patients:     Vec<Patient>,
  pub staff:        Vec<StaffMember>,
  pub appointments: Vec<Appointment>,
  pub lab_tests:    Vec<LabTest>,
  pub pipeline:     Vec<PipelineStage>,
  pub stats:        PerFacility<Vec<Stat>>,
  pub resources:    PerFacility<Vec<Resource>>,

  // Identifier sequences; deterministic, unlike the random ids they replace.
  pub patient_seq: u32,
  pub staff_seq:   u32,
  pub bed_seq:     u32,
}

/// In-memory facility store. Cheap to clone-share via `Arc`.
#[derive(Debug)]
pub struct MemoryStore {
  inner: RwLock<Inner>,
}

impl MemoryStore {
  /// An empty store. Identifier sequences start at 1.
  pub fn new() -> Self {
    Self {
      inner: RwLock::new(Inner {
        patient_seq: 1,
        staff_seq: 1,
        bed_seq: 1,
        ..Inner::default()
      }),
    }
  }

  /// A store pre-loaded with the demo fixture set.
  pub fn with_demo_data() -> Self {
    Self { inner: RwLock::new(seed::demo()) }
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl FacilityStore for MemoryStore {
  // ── Beds ──────────────────────────────────────────────────────────────

  async fn list_beds(&self) -> Result<Vec<Bed>, Error> {
    Ok(self.inner.read().await.beds.clone())
  }

  async fn get_bed(&self, id: &BedId) -> Result<Option<Bed>, Error> {
    let inner = self.inner.read().await;
    Ok(inner.beds.iter().find(|b| &b.id == id).cloned())
  }

  async fn assign_patient(
    &self,
    bed_id: &BedId,
    input: NewPatient,
  ) -> Result<Patient, Error> {
    let mut inner = self.inner.write().await;

    // Resolve the bed first; an unknown id changes nothing.
    let bed_index = inner
      .beds
      .iter()
      .position(|b| &b.id == bed_id)
      .ok_or_else(|| Error::BedNotFound(bed_id.clone()))?;

    let patient_id = PatientId(format!("P-{}", inner.patient_seq));
    inner.patient_seq += 1;

    let patient = Patient {
      id: patient_id.clone(),
      name: input.name,
      age: input.age,
      gender: input.gender,
      status: PatientStatus::Admitted,
      ward: input.ward.or_else(|| Some(inner.beds[bed_index].ward.clone())),
      admission_date: Utc::now().date_naive(),
      symptoms: input.symptoms,
    };
    inner.patients.push(patient.clone());

    let bed = &mut inner.beds[bed_index];
    bed.status = BedStatus::Occupied;
    bed.patient_id = Some(patient_id);

    Ok(patient)
  }

  async fn discharge_patient(&self, bed_id: &BedId) -> Result<Bed, Error> {
    let mut inner = self.inner.write().await;

    let bed_index = inner
      .beds
      .iter()
      .position(|b| &b.id == bed_id)
      .ok_or_else(|| Error::BedNotFound(bed_id.clone()))?;

    // The patient record is retained; only its status flips.
    if let Some(patient_id) = inner.beds[bed_index].patient_id.clone()
      && let Some(patient) =
        inner.patients.iter_mut().find(|p| p.id == patient_id)
    {
      patient.status = PatientStatus::Discharged;
    }

    let bed = &mut inner.beds[bed_index];
    bed.status = BedStatus::Cleaning;
    bed.patient_id = None;
    Ok(bed.clone())
  }

  async fn mark_clean(&self, bed_id: &BedId) -> Result<Bed, Error> {
    let mut inner = self.inner.write().await;
    let bed = inner
      .beds
      .iter_mut()
      .find(|b| &b.id == bed_id)
      .ok_or_else(|| Error::BedNotFound(bed_id.clone()))?;
    bed.status = BedStatus::Available;
    bed.patient_id = None;
    Ok(bed.clone())
  }

  async fn resize_bed_pool(
    &self,
    target: usize,
    class: BedClass,
  ) -> Result<Vec<Bed>, Error> {
    let mut inner = self.inner.write().await;
    let current = inner.beds.len();

    if target > current {
      for position in current..target {
        let id = BedId(format!("B-{}", inner.bed_seq));
        inner.bed_seq += 1;
        let number = format!("{}-{}", class.number_prefix(), position + 1);
        inner.beds.push(Bed::vacant(id, number, class));
      }
    } else if target < current {
      // Truncation is positional. Patients still referenced by the removed
      // beds are discharged rather than left pointing at nothing.
      let removed: Vec<PatientId> = inner
        .beds
        .drain(target..)
        .filter_map(|bed| bed.patient_id)
        .collect();
      for patient_id in removed {
        if let Some(patient) =
          inner.patients.iter_mut().find(|p| p.id == patient_id)
        {
          patient.status = PatientStatus::Discharged;
        }
      }
    }

    Ok(inner.beds.clone())
  }

  // ── Patients ──────────────────────────────────────────────────────────

  async fn list_patients(
    &self,
    query: RecordQuery,
  ) -> Result<Vec<Patient>, Error> {
    let inner = self.inner.read().await;
    Ok(
      inner
        .patients
        .iter()
        .filter(|p| query.text_matches(&[&p.name, &p.id.0]))
        .filter(|p| query.status.is_none_or(|s| p.status == s))
        .cloned()
        .collect(),
    )
  }

  async fn get_patient(&self, id: &PatientId) -> Result<Option<Patient>, Error> {
    let inner = self.inner.read().await;
    Ok(inner.patients.iter().find(|p| &p.id == id).cloned())
  }

  // ── Staff ─────────────────────────────────────────────────────────────

  async fn list_staff(&self) -> Result<Vec<StaffMember>, Error> {
    Ok(self.inner.read().await.staff.clone())
  }

  async fn add_staff(
    &self,
    input: NewStaffMember,
  ) -> Result<StaffMember, Error> {
    let mut inner = self.inner.write().await;
    let id = StaffId(format!("S-{:03}", inner.staff_seq));
    inner.staff_seq += 1;

    let member = StaffMember {
      id,
      name: input.name,
      role: input.role,
      department: input.department,
      shift: input.shift,
      status: input.status,
    };
    inner.staff.push(member.clone());
    Ok(member)
  }

  // ── Read models ───────────────────────────────────────────────────────

  async fn stats(&self, facility: FacilityType) -> Result<Vec<Stat>, Error> {
    Ok(self.inner.read().await.stats.get(facility).clone())
  }

  async fn appointments(
    &self,
    query: RecordQuery,
  ) -> Result<Vec<Appointment>, Error> {
    let inner = self.inner.read().await;
    Ok(
      inner
        .appointments
        .iter()
        .filter(|a| query.text_matches(&[&a.patient_name, &a.doctor_name]))
        .cloned()
        .collect(),
    )
  }

  async fn lab_tests(&self, query: RecordQuery) -> Result<Vec<LabTest>, Error> {
    let inner = self.inner.read().await;
    Ok(
      inner
        .lab_tests
        .iter()
        .filter(|t| query.text_matches(&[&t.patient_name, &t.test_name]))
        .cloned()
        .collect(),
    )
  }

  async fn resources(
    &self,
    facility: FacilityType,
  ) -> Result<Vec<Resource>, Error> {
    Ok(self.inner.read().await.resources.get(facility).clone())
  }

  async fn pipeline(&self) -> Result<Vec<PipelineStage>, Error> {
    Ok(self.inner.read().await.pipeline.clone())
  }
}
