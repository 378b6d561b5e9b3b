//! The timer loop that drives the engine.
//!
//! One process-wide task owns the current snapshot, advances it on a fixed
//! `tokio::time::interval`, and publishes every result through a
//! `tokio::sync::watch` channel. Subscribers only ever see the latest
//! snapshot; ticks and reads are serialized by the channel, so there is no
//! coordination beyond it.

use std::time::Duration;

use pulseboard_core::kpi::KpiSnapshot;
use tokio::{sync::watch, task::JoinHandle};

use crate::{engine::advance, noise::NoiseSource};

/// The interval the dashboard expects telemetry on.
pub const DEFAULT_TICK: Duration = Duration::from_secs(3);

/// A running KPI simulation. Dropping the handle does not stop the task;
/// call [`Simulator::shutdown`] on process teardown.
pub struct Simulator {
  handle:   JoinHandle<()>,
  receiver: watch::Receiver<KpiSnapshot>,
}

impl Simulator {
  /// Start a simulation task at `tick` cadence drawing from `noise`.
  /// The channel starts out holding [`KpiSnapshot::startup`].
  pub fn spawn(
    tick: Duration,
    noise: impl NoiseSource + Send + 'static,
  ) -> Self {
    let (tx, rx) = watch::channel(KpiSnapshot::startup());
    let handle = tokio::spawn(run(tx, tick, noise));
    Self { handle, receiver: rx }
  }

  /// A fresh subscription observing the latest snapshot.
  pub fn subscribe(&self) -> watch::Receiver<KpiSnapshot> {
    self.receiver.clone()
  }

  /// Stop the timer. The last published snapshot remains readable.
  pub fn shutdown(&self) { self.handle.abort(); }
}

async fn run(
  tx: watch::Sender<KpiSnapshot>,
  tick: Duration,
  mut noise: impl NoiseSource,
) {
  let mut snapshot = KpiSnapshot::startup();
  let mut interval = tokio::time::interval(tick);
  // The first interval tick completes immediately; consume it so the first
  // published snapshot lands one full period after startup.
  interval.tick().await;

  loop {
    interval.tick().await;
    snapshot = advance(&snapshot, &mut noise);
    tracing::trace!(?snapshot, "kpi tick");
    if tx.send(snapshot.clone()).is_err() {
      // Every subscriber is gone; nothing left to publish to.
      break;
    }
  }
}
