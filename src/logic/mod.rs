//! Logic Module - Evaluation Engines
//!
//! Leaf-first:
//! - `geo` - zones, maritime boundary, boundary intersection checker
//! - `trajectory` - short-horizon linear projection
//! - `vessel` - vessel state, kinematic tick, demo fleet
//! - `anomaly` - fleet-wide outlier detection (speed, heading)
//! - `risk` - composite risk score
//! - `alert` - rule-based alert generator
//! - `fleet` - in-memory snapshot + persistence collaborator
//! - `engine` - one full evaluation pass

pub mod error;
pub mod config;

pub mod geo;
pub mod trajectory;
pub mod vessel;
pub mod anomaly;
pub mod risk;
pub mod alert;
pub mod fleet;
pub mod engine;

#[cfg(test)]
mod tests;
