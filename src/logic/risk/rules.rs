//! Risk Rules & Thresholds
//!
//! Point values for each risk term. Constants and config only,
//! scoring lives in `scorer`.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Strictly above this speed (knots) counts as high speed
pub const HIGH_SPEED_THRESHOLD: f64 = 12.0;

/// Score ceiling
pub const MAX_RISK_SCORE: u8 = 100;

// ============================================================================
// POINTS
// ============================================================================

pub const SPEED_POINTS: u8 = 40;

/// Inside any piracy zone
pub const ZONE_POINTS: u8 = 30;

/// Anomalous in the current batch, or not scored yet
pub const ANOMALY_POINTS: u8 = 30;

// ============================================================================
// CONFIGURABLE RULES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRules {
    pub speed_threshold: f64,
    pub speed_points: u8,
    pub zone_points: u8,
    pub anomaly_points: u8,
    pub max_score: u8,
}

impl Default for RiskRules {
    fn default() -> Self {
        Self {
            speed_threshold: HIGH_SPEED_THRESHOLD,
            speed_points: SPEED_POINTS,
            zone_points: ZONE_POINTS,
            anomaly_points: ANOMALY_POINTS,
            max_score: MAX_RISK_SCORE,
        }
    }
}

impl RiskRules {
    /// Ceiling never exceeds 100
    pub fn cap(&self) -> u8 {
        self.max_score.min(MAX_RISK_SCORE)
    }
}
