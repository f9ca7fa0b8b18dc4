//! Maritime Awareness Core
//!
//! Risk & alert evaluation engine for tracked vessels:
//! anomaly scoring over the fleet, deterministic risk scores, and
//! speed / piracy-zone / boundary-crossing alerts.

pub mod constants;
pub mod logic;

pub use logic::engine::{evaluate, Evaluation};
pub use logic::error::{EngineError, EngineResult};
