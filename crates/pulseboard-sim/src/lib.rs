//! The Pulseboard KPI simulation engine.
//!
//! Emulates "live" facility telemetry by applying bounded random
//! perturbations to a [`KpiSnapshot`](pulseboard_core::kpi::KpiSnapshot) on a
//! fixed timer. The update rules live in [`engine`] as a pure function over
//! an injected [`NoiseSource`], so tests can drive them deterministically;
//! [`runner`] owns the timer and publishes snapshots through a
//! `tokio::sync::watch` channel.

pub mod engine;
pub mod noise;
pub mod runner;

pub use engine::advance;
pub use noise::{ChaChaNoise, NoiseSource, StillNoise};
pub use runner::{DEFAULT_TICK, Simulator};
