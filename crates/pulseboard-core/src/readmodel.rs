//! Read models consumed by the view layer.
//!
//! These are presentation-shaped records the dashboard renders directly:
//! stat cards, the clinic appointment timeline, lab tests, consumable
//! resources, and the lab sample pipeline. They are served as-is from the
//! store; the only computation over them is free-text filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Stat cards ──────────────────────────────────────────────────────────────

/// Direction of a stat's recent movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
  Up,
  Down,
  Neutral,
}

/// The glyph shown on a stat card. A closed enum rather than a free-form
/// asset name: the set of valid glyphs is known at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatIcon {
  Users,
  Bed,
  Activity,
  Wind,
  Calendar,
  UserPlus,
  Stethoscope,
  Clock,
  FlaskConical,
  Loader,
  FileCheck,
  CheckCircle,
}

/// One dashboard stat card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
  pub label:  String,
  pub value:  String,
  pub change: Option<String>,
  pub trend:  Option<Trend>,
  pub icon:   StatIcon,
}

// ─── Clinic appointments ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentKind {
  Visit,
  FollowUp,
  Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
  Confirmed,
  Pending,
  Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
  pub id:           String,
  pub patient_name: String,
  pub doctor_name:  String,
  /// Display time, e.g. "09:00 AM".
  pub time:         String,
  pub kind:         AppointmentKind,
  pub status:       AppointmentStatus,
}

// ─── Lab tests ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleStatus {
  Collected,
  Processing,
  Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabTest {
  pub id:           String,
  pub patient_name: String,
  pub test_name:    String,
  pub sample_id:    String,
  pub status:       SampleStatus,
  pub date:         NaiveDate,
  pub result_url:   Option<String>,
}

// ─── Resources ───────────────────────────────────────────────────────────────

/// A consumable or capacity pool tracked on the resources page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
  pub name:      String,
  pub total:     u32,
  pub available: u32,
  pub unit:      String,
}

// ─── Lab pipeline ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
  Active,
  Bottleneck,
  Idle,
}

/// One stage of the lab's sample processing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStage {
  pub id:     String,
  pub name:   String,
  pub count:  u32,
  pub status: StageStatus,
}
