//! In-memory [`FacilityStore`](pulseboard_core::store::FacilityStore)
//! backend.
//!
//! All state lives in a single `RwLock`-guarded struct: one logical writer
//! at a time, last write wins, nothing persisted. The `seed` module carries
//! the demo fixture set the dashboard boots with.

mod seed;
mod store;


pub use store::MemoryStore;
