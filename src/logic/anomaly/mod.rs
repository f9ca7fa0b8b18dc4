//! Anomaly Module
//!
//! Flags vessels whose (speed, heading) pair is unusual relative to the
//! current fleet snapshot.
//!
//! ## Structure
//! - `types`: AnomalyStatus, AnomalyConfig, feature layout
//! - `forest`: seeded isolation forest
//! - `scorer`: fleet-level batch scoring

pub mod types;
pub mod forest;
pub mod scorer;

pub use types::{AnomalyConfig, AnomalyStatus};
pub use scorer::{annotate, score, unknown_for};
