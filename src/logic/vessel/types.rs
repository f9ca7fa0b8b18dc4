//! Vessel Types
//!
//! One `VesselState` per tracked vessel, keyed by id.
//! Derived fields (`anomaly`, `risk_score`) belong to the evaluation pass
//! that produced them and are never persisted.

use serde::{Deserialize, Serialize};

use crate::logic::anomaly::AnomalyStatus;
use crate::logic::error::{EngineError, EngineResult};
use crate::logic::geo::GeoPoint;
use crate::logic::trajectory::Trajectory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselState {
    pub id: String,
    pub position: GeoPoint,
    /// Knots
    pub speed: f64,
    /// Degrees, 0 = north, clockwise
    pub heading: f64,
    /// Seconds, non-decreasing
    pub timestamp: f64,
    pub is_friendly: bool,
    /// Last projected path, `None` if never computed
    #[serde(default)]
    pub trajectory: Option<Trajectory>,

    /// `None` until an anomaly pass has annotated this vessel
    #[serde(default, skip_deserializing)]
    pub anomaly: Option<AnomalyStatus>,
    /// `None` until a risk pass has scored this vessel
    #[serde(default, skip_deserializing)]
    pub risk_score: Option<u8>,
}

impl VesselState {
    /// Register a vessel. Input is validated here, not inside the engine.
    pub fn new(
        id: &str,
        position: GeoPoint,
        speed: f64,
        heading: f64,
        timestamp: f64,
        is_friendly: bool,
    ) -> EngineResult<Self> {
        let vessel = Self {
            id: id.trim().to_string(),
            position,
            speed,
            // 360 and 0 are the same bearing
            heading: if heading == 360.0 { 0.0 } else { heading },
            timestamp,
            is_friendly,
            trajectory: None,
            anomaly: None,
            risk_score: None,
        };
        vessel.validate()?;
        Ok(vessel)
    }

    pub fn with_trajectory(mut self, trajectory: Trajectory) -> Self {
        self.trajectory = Some(trajectory);
        self
    }

    /// Range checks for registration and manual edits
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.is_empty() {
            return Err(EngineError::Validation("vessel id must not be empty".to_string()));
        }
        if !self.position.is_finite() || !self.position.is_valid() {
            return Err(EngineError::Validation(format!(
                "{}: position {} out of range",
                self.id, self.position
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(EngineError::Validation(format!(
                "{}: speed {} must be a non-negative number",
                self.id, self.speed
            )));
        }
        if !(0.0..360.0).contains(&self.heading) {
            return Err(EngineError::Validation(format!(
                "{}: heading {} outside [0, 360)",
                self.id, self.heading
            )));
        }
        if !self.timestamp.is_finite() {
            return Err(EngineError::Validation(format!(
                "{}: timestamp must be finite",
                self.id
            )));
        }
        Ok(())
    }

    /// Drop derived fields after any kinematic change
    pub fn invalidate_derived(&mut self) {
        self.anomaly = None;
        self.risk_score = None;
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_friendly {
            "Friendly"
        } else {
            "Non-Friendly"
        }
    }
}
