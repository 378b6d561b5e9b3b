//! Core types and trait definitions for the Pulseboard facility dashboard.
//!
//! This crate is deliberately free of HTTP, IO, and runtime dependencies.
//! All other crates depend on it; it depends on little more than serde.

pub mod bed;
pub mod error;
pub mod kpi;
pub mod patient;
pub mod readmodel;
pub mod session;
pub mod staff;
pub mod store;

pub use error::{Error, Result};
pub use session::FacilityType;
