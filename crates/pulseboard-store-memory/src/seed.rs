//! The demo fixture set.
//!
//! A plausible day's worth of facility state: a hospital ward with a mix of
//! occupied, free, and out-of-service beds, the matching patient records, a
//! clinic schedule, a lab worklist, and per-facility stat cards and resource
//! pools. Identifier sequences continue from where the fixtures leave off.

use chrono::NaiveDate;
use pulseboard_core::{
  bed::{Bed, BedClass, BedId, BedStatus},
  patient::{Patient, PatientId, PatientStatus},
  readmodel::{
    Appointment, AppointmentKind, AppointmentStatus, LabTest, PipelineStage,
    Resource, SampleStatus, StageStatus, Stat, StatIcon, Trend,
  },
  staff::{Shift, StaffId, StaffMember, StaffRole, StaffStatus},
};

use crate::store::{Inner, PerFacility};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn bed(
  id: &str,
  ward: &str,
  number: &str,
  status: BedStatus,
  patient_id: Option<&str>,
  class: BedClass,
) -> Bed {
  Bed {
    id: BedId(id.to_string()),
    ward: ward.to_string(),
    number: number.to_string(),
    status,
    patient_id: patient_id.map(|p| PatientId(p.to_string())),
    class,
  }
}

fn patient(
  id: &str,
  name: &str,
  age: u8,
  gender: &str,
  status: PatientStatus,
  ward: Option<&str>,
  admitted: NaiveDate,
  symptoms: &[&str],
) -> Patient {
  Patient {
    id: PatientId(id.to_string()),
    name: name.to_string(),
    age,
    gender: gender.to_string(),
    status,
    ward: ward.map(str::to_string),
    admission_date: admitted,
    symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
  }
}

fn stat(
  label: &str,
  value: &str,
  change: Option<&str>,
  trend: Trend,
  icon: StatIcon,
) -> Stat {
  Stat {
    label:  label.to_string(),
    value:  value.to_string(),
    change: change.map(str::to_string),
    trend:  Some(trend),
    icon,
  }
}

fn resource(name: &str, total: u32, available: u32, unit: &str) -> Resource {
  Resource {
    name: name.to_string(),
    total,
    available,
    unit: unit.to_string(),
  }
}

/// Build the fully-populated demo state.
pub(crate) fn demo() -> Inner {
  let beds = vec![
    bed("B-101", "General Ward A", "A-01", BedStatus::Occupied, Some("P-101"), BedClass::General),
    bed("B-102", "General Ward A", "A-02", BedStatus::Available, None, BedClass::General),
    bed("B-103", "General Ward A", "A-03", BedStatus::Occupied, Some("P-103"), BedClass::General),
    bed("B-104", "General Ward A", "A-04", BedStatus::Cleaning, None, BedClass::General),
    bed("B-105", "General Ward A", "A-05", BedStatus::Available, None, BedClass::General),
    bed("B-106", "General Ward A", "A-06", BedStatus::Occupied, Some("P-106"), BedClass::General),
    bed("I-01", "ICU", "ICU-1", BedStatus::Occupied, Some("P-102"), BedClass::Icu),
    bed("I-02", "ICU", "ICU-2", BedStatus::Maintenance, None, BedClass::Icu),
    bed("I-03", "ICU", "ICU-3", BedStatus::Available, None, BedClass::Icu),
  ];

  let patients = vec![
    patient("P-101", "John Doe", 45, "M", PatientStatus::Admitted,
      Some("Ward A - 101"), date(2023, 10, 25), &["Fever", "Cough"]),
    patient("P-102", "Jane Smith", 32, "F", PatientStatus::Critical,
      Some("ICU - 04"), date(2023, 10, 27), &["Difficulty Breathing"]),
    patient("P-103", "Robert Brown", 60, "M", PatientStatus::Admitted,
      Some("Ward B - 204"), date(2023, 10, 26), &["Chest Pain"]),
    patient("P-104", "Emily Davis", 28, "F", PatientStatus::Discharged,
      None, date(2023, 10, 20), &["Recovered"]),
    patient("P-105", "Michael Wilson", 55, "M", PatientStatus::Pending,
      None, date(2023, 10, 28), &["Fracture"]),
    patient("P-106", "Alice Green", 39, "F", PatientStatus::Admitted,
      Some("General Ward A"), date(2023, 10, 28), &["Migraine"]),
  ];

  let staff = vec![
    StaffMember {
      id:         StaffId("S-001".to_string()),
      name:       "Dr. Sarah Lee".to_string(),
      role:       StaffRole::Doctor,
      department: "Cardiology".to_string(),
      shift:      Shift::Morning,
      status:     StaffStatus::Active,
    },
    StaffMember {
      id:         StaffId("S-002".to_string()),
      name:       "Nurse Mary".to_string(),
      role:       StaffRole::Nurse,
      department: "ICU".to_string(),
      shift:      Shift::Night,
      status:     StaffStatus::Active,
    },
    StaffMember {
      id:         StaffId("S-003".to_string()),
      name:       "Tech Kevin".to_string(),
      role:       StaffRole::Technician,
      department: "Lab".to_string(),
      shift:      Shift::Evening,
      status:     StaffStatus::OnLeave,
    },
    StaffMember {
      id:         StaffId("S-004".to_string()),
      name:       "Dr. James King".to_string(),
      role:       StaffRole::Doctor,
      department: "General".to_string(),
      shift:      Shift::Morning,
      status:     StaffStatus::Active,
    },
  ];

  let appointments = vec![
    Appointment {
      id:           "A-201".to_string(),
      patient_name: "Alice Green".to_string(),
      doctor_name:  "Dr. Sarah Lee".to_string(),
      time:         "09:00 AM".to_string(),
      kind:         AppointmentKind::Visit,
      status:       AppointmentStatus::Confirmed,
    },
    Appointment {
      id:           "A-202".to_string(),
      patient_name: "Bob White".to_string(),
      doctor_name:  "Dr. James King".to_string(),
      time:         "09:30 AM".to_string(),
      kind:         AppointmentKind::FollowUp,
      status:       AppointmentStatus::Confirmed,
    },
    Appointment {
      id:           "A-203".to_string(),
      patient_name: "Charlie Black".to_string(),
      doctor_name:  "Dr. Sarah Lee".to_string(),
      time:         "10:00 AM".to_string(),
      kind:         AppointmentKind::Emergency,
      status:       AppointmentStatus::Pending,
    },
    Appointment {
      id:           "A-204".to_string(),
      patient_name: "Diana Red".to_string(),
      doctor_name:  "Dr. Emily Chen".to_string(),
      time:         "10:15 AM".to_string(),
      kind:         AppointmentKind::Visit,
      status:       AppointmentStatus::Completed,
    },
  ];

  let lab_tests = vec![
    LabTest {
      id:           "T-301".to_string(),
      patient_name: "Evan Hall".to_string(),
      test_name:    "Blood Count (CBC)".to_string(),
      sample_id:    "S-1001".to_string(),
      status:       SampleStatus::Completed,
      date:         date(2023, 10, 28),
      result_url:   None,
    },
    LabTest {
      id:           "T-302".to_string(),
      patient_name: "Fiona Hill".to_string(),
      test_name:    "Lipid Profile".to_string(),
      sample_id:    "S-1002".to_string(),
      status:       SampleStatus::Processing,
      date:         date(2023, 10, 28),
      result_url:   None,
    },
    LabTest {
      id:           "T-303".to_string(),
      patient_name: "George Adams".to_string(),
      test_name:    "Thyroid Panel".to_string(),
      sample_id:    "S-1003".to_string(),
      status:       SampleStatus::Collected,
      date:         date(2023, 10, 28),
      result_url:   None,
    },
  ];

  let pipeline = vec![
    PipelineStage { id: "S1".to_string(), name: "Sample Intake".to_string(), count: 12, status: StageStatus::Active },
    PipelineStage { id: "S2".to_string(), name: "Centrifuge".to_string(), count: 8, status: StageStatus::Active },
    PipelineStage { id: "S3".to_string(), name: "Analyzer A".to_string(), count: 15, status: StageStatus::Bottleneck },
    PipelineStage { id: "S4".to_string(), name: "Review".to_string(), count: 5, status: StageStatus::Idle },
    PipelineStage { id: "S5".to_string(), name: "Report Gen".to_string(), count: 2, status: StageStatus::Active },
  ];

  let stats = PerFacility {
    hospital: vec![
      stat("Admissions Today", "42", Some("+12%"), Trend::Up, StatIcon::Users),
      stat("Bed Occupancy", "86%", Some("+4%"), Trend::Neutral, StatIcon::Bed),
      stat("ICU Occupancy", "92%", Some("+8%"), Trend::Down, StatIcon::Activity),
      stat("Oxygen", "450 L", Some("Stable"), Trend::Neutral, StatIcon::Wind),
    ],
    clinic: vec![
      stat("Appointments", "24", Some("+5"), Trend::Up, StatIcon::Calendar),
      stat("Walk-ins", "10", Some("-2"), Trend::Down, StatIcon::UserPlus),
      stat("Doctors Active", "6", Some("Full Staff"), Trend::Neutral, StatIcon::Stethoscope),
      stat("Avg Wait Time", "15 min", Some("-5 min"), Trend::Up, StatIcon::Clock),
    ],
    lab: vec![
      stat("Pending Samples", "15", Some("+3"), Trend::Down, StatIcon::FlaskConical),
      stat("Processing", "8", Some("Active"), Trend::Neutral, StatIcon::Loader),
      stat("Reports Ready", "45", Some("+20"), Trend::Up, StatIcon::FileCheck),
      stat("Equipment Status", "All OK", None, Trend::Neutral, StatIcon::CheckCircle),
    ],
  };

  let resources = PerFacility {
    hospital: vec![
      resource("General Beds", 200, 45, "beds"),
      resource("ICU Beds", 30, 2, "beds"),
      resource("Oxygen Cylinders", 100, 85, "units"),
      resource("Ventilators", 20, 5, "units"),
    ],
    clinic: vec![
      resource("Paracetamol", 500, 450, "strips"),
      resource("Antibiotics", 200, 120, "strips"),
      resource("Syringes", 1000, 800, "units"),
    ],
    lab: vec![
      resource("Reagents (Type A)", 50, 42, "bottles"),
      resource("Test Tubes", 2000, 1500, "units"),
      resource("Microscope Slides", 1000, 950, "boxes"),
    ],
  };

  Inner {
    beds,
    patients,
    staff,
    appointments,
    lab_tests,
    pipeline,
    stats,
    resources,
    patient_seq: 107,
    staff_seq: 5,
    bed_seq: 107,
  }
}
