//! Alert Module
//!
//! Typed alert events from per-vessel rules (speed, piracy zone,
//! boundary crossing). Cross-pass deduplication is the caller's job.

pub mod types;
pub mod generator;

pub use types::{Alert, AlertKind};
pub use generator::{generate, generate_with, AlertOutcome};
