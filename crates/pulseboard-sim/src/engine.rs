//! The per-tick update rules.
//!
//! Each tick derives a whole new snapshot from the previous one. Every field
//! is a bounded walk: perturbations are small, clamps are hard, and no field
//! depends on anything but the previous snapshot and the draws made this
//! tick. The wait time is the one coupled field — it tracks the new queue
//! length rather than walking on its own.

use pulseboard_core::kpi::KpiSnapshot;

use crate::noise::NoiseSource;

/// Queue-length branch probabilities: a draw above this grows the queue...
const QUEUE_GROW_ABOVE: f64 = 0.6;
/// ...a draw above this (but below the grow threshold) shrinks it.
const QUEUE_SHRINK_ABOVE: f64 = 0.4;
/// ICU occupancy only moves on the 20% of ticks whose draw exceeds this.
const ICU_MOVE_ABOVE: f64 = 0.8;
/// The emergency flag flips on the 2% of ticks whose draw exceeds this.
const EMERGENCY_FLIP_ABOVE: f64 = 0.98;

/// Minutes of waiting each queued patient contributes.
const WAIT_PER_QUEUED: f64 = 3.5;
/// Hard floor on the reported average wait.
const WAIT_FLOOR_MINUTES: u32 = 5;
/// Hard floor on lab turnaround.
const LAB_FLOOR_HOURS: f64 = 1.0;

/// Produce the next snapshot from `prev`, drawing from `noise`.
///
/// Pure and infallible; the caller owns the timer and the publication of the
/// result.
pub fn advance(prev: &KpiSnapshot, noise: &mut impl NoiseSource) -> KpiSnapshot {
  let queue_length = {
    let draw = noise.unit();
    if draw > QUEUE_GROW_ABOVE {
      prev.queue_length + 1
    } else if draw > QUEUE_SHRINK_ABOVE {
      prev.queue_length.saturating_sub(1)
    } else {
      prev.queue_length
    }
  };

  // Wait time correlates with the new queue length, plus noise.
  let avg_wait_minutes = {
    let raw = queue_length as f64 * WAIT_PER_QUEUED + noise.uniform(-2.0, 3.0);
    (raw.floor().max(0.0) as u32).max(WAIT_FLOOR_MINUTES)
  };

  // Bed occupancy drifts slowly.
  let bed_occupancy_pct =
    drift_pct(prev.bed_occupancy_pct, noise.uniform(-2.0, 2.0), 50, 100);

  // ICU changes on only a fifth of ticks.
  let icu_occupancy_pct = if noise.unit() > ICU_MOVE_ABOVE {
    drift_pct(prev.icu_occupancy_pct, noise.uniform(-5.0, 5.0), 20, 100)
  } else {
    prev.icu_occupancy_pct
  };

  let oxygen_level_pct =
    drift_pct(prev.oxygen_level_pct, noise.uniform(-1.0, 1.0), 80, 100);

  let lab_turnaround_hours = round_tenth(
    (prev.lab_turnaround_hours + noise.uniform(-0.25, 0.25))
      .max(LAB_FLOOR_HOURS),
  );

  let emergency_active = if noise.unit() > EMERGENCY_FLIP_ABOVE {
    !prev.emergency_active
  } else {
    prev.emergency_active
  };

  KpiSnapshot {
    queue_length,
    avg_wait_minutes,
    bed_occupancy_pct,
    icu_occupancy_pct,
    oxygen_level_pct,
    lab_turnaround_hours,
    emergency_active,
  }
}

/// Apply `delta` to a percentage, clamp to `[lo, hi]`, round to an integer.
fn drift_pct(prev: u8, delta: f64, lo: u8, hi: u8) -> u8 {
  (prev as f64 + delta).clamp(lo as f64, hi as f64).round() as u8
}

/// Round to one decimal place.
fn round_tenth(value: f64) -> f64 { (value * 10.0).round() / 10.0 }

#[cfg(test)]
mod tests {
  use pulseboard_core::kpi::KpiSnapshot;

  use super::*;
  use crate::noise::{ChaChaNoise, NoiseSource, StillNoise};

  /// A snapshot consistent with the wait/queue coupling, so that a still
  /// tick is exactly the identity.
  fn settled() -> KpiSnapshot {
    KpiSnapshot {
      queue_length:         4,
      avg_wait_minutes:     14, // floor(4 * 3.5)
      bed_occupancy_pct:    78,
      icu_occupancy_pct:    45,
      oxygen_level_pct:     92,
      lab_turnaround_hours: 4.5,
      emergency_active:     false,
    }
  }

  #[test]
  fn still_tick_is_identity() {
    let before = settled();
    let after = advance(&before, &mut StillNoise);
    assert_eq!(after, before);
  }

  #[test]
  fn still_tick_twice_is_still_identity() {
    let before = settled();
    let once = advance(&before, &mut StillNoise);
    let twice = advance(&once, &mut StillNoise);
    assert_eq!(twice, before);
  }

  #[test]
  fn all_fields_stay_in_bounds_over_many_ticks() {
    let mut noise = ChaChaNoise::seeded(0xFACADE);
    let mut snapshot = KpiSnapshot::startup();
    for tick in 0..5000 {
      snapshot = advance(&snapshot, &mut noise);
      assert!(
        snapshot.avg_wait_minutes >= 5,
        "wait below floor at tick {tick}: {snapshot:?}"
      );
      assert!(
        (50..=100).contains(&snapshot.bed_occupancy_pct),
        "bed occupancy out of bounds at tick {tick}: {snapshot:?}"
      );
      assert!(
        (20..=100).contains(&snapshot.icu_occupancy_pct),
        "icu occupancy out of bounds at tick {tick}: {snapshot:?}"
      );
      assert!(
        (80..=100).contains(&snapshot.oxygen_level_pct),
        "oxygen out of bounds at tick {tick}: {snapshot:?}"
      );
      assert!(
        snapshot.lab_turnaround_hours >= 1.0,
        "lab turnaround below floor at tick {tick}: {snapshot:?}"
      );
    }
  }

  #[test]
  fn lab_turnaround_keeps_one_decimal() {
    let mut noise = ChaChaNoise::seeded(31);
    let mut snapshot = KpiSnapshot::startup();
    for _ in 0..200 {
      snapshot = advance(&snapshot, &mut noise);
      let scaled = snapshot.lab_turnaround_hours * 10.0;
      assert!(
        (scaled - scaled.round()).abs() < 1e-9,
        "more than one decimal: {}",
        snapshot.lab_turnaround_hours
      );
    }
  }

  #[test]
  fn queue_never_goes_negative() {
    // Force the shrink branch every tick; the queue must bottom out at 0.
    struct AlwaysShrink;
    impl NoiseSource for AlwaysShrink {
      fn unit(&mut self) -> f64 { 0.5 }
      fn uniform(&mut self, _lo: f64, _hi: f64) -> f64 { 0.0 }
    }

    let mut snapshot = KpiSnapshot { queue_length: 2, ..KpiSnapshot::startup() };
    for _ in 0..10 {
      snapshot = advance(&snapshot, &mut AlwaysShrink);
    }
    assert_eq!(snapshot.queue_length, 0);
    // At queue 0 the wait still respects its floor.
    assert_eq!(snapshot.avg_wait_minutes, 5);
  }

  #[test]
  fn emergency_flips_on_rare_draw() {
    // Draws just above the flip threshold, zero perturbation elsewhere.
    struct FlipEmergency;
    impl NoiseSource for FlipEmergency {
      fn unit(&mut self) -> f64 { 0.99 }
      fn uniform(&mut self, _lo: f64, _hi: f64) -> f64 { 0.0 }
    }

    let before = settled();
    let after = advance(&before, &mut FlipEmergency);
    assert!(after.emergency_active);
    let again = advance(&after, &mut FlipEmergency);
    assert!(!again.emergency_active);
  }

  #[test]
  fn seeded_runs_replay_identically() {
    let mut a = ChaChaNoise::seeded(99);
    let mut b = ChaChaNoise::seeded(99);
    let mut snap_a = KpiSnapshot::startup();
    let mut snap_b = KpiSnapshot::startup();
    for _ in 0..100 {
      snap_a = advance(&snap_a, &mut a);
      snap_b = advance(&snap_b, &mut b);
      assert_eq!(snap_a, snap_b);
    }
  }
}
