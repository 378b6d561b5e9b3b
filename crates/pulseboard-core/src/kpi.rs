//! The KPI snapshot — the fixed tuple of operational scalars the simulator
//! regenerates wholesale on every tick. No history is retained; subscribers
//! only ever observe the latest snapshot.

use serde::{Deserialize, Serialize};

/// One complete reading of the simulated telemetry.
///
/// Documented bounds (enforced by the simulator, not by construction):
/// `queue_length ≥ 0`, `avg_wait_minutes ≥ 5`, `bed_occupancy_pct ∈ [50,
/// 100]`, `icu_occupancy_pct ∈ [20, 100]`, `oxygen_level_pct ∈ [80, 100]`,
/// `lab_turnaround_hours ≥ 1.0` (one decimal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
  pub queue_length:         u32,
  pub avg_wait_minutes:     u32,
  pub bed_occupancy_pct:    u8,
  pub icu_occupancy_pct:    u8,
  pub oxygen_level_pct:     u8,
  pub lab_turnaround_hours: f64,
  pub emergency_active:     bool,
}

impl KpiSnapshot {
  /// The fixed state every process starts from.
  pub fn startup() -> Self {
    Self {
      queue_length:         4,
      avg_wait_minutes:     12,
      bed_occupancy_pct:    78,
      icu_occupancy_pct:    45,
      oxygen_level_pct:     92,
      lab_turnaround_hours: 4.5,
      emergency_active:     false,
    }
  }
}

impl Default for KpiSnapshot {
  fn default() -> Self { Self::startup() }
}
