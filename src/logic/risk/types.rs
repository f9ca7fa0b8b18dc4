//! Risk Types

use serde::{Deserialize, Serialize};

/// Points contributed by each term before capping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub speed_contribution: u8,
    pub zone_contribution: u8,
    pub anomaly_contribution: u8,
    /// Sum of all terms, uncapped
    pub raw_total: u16,
}

/// Score plus the reasons behind it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0..=100
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    /// Name of the first zone containing the vessel, if any
    pub zone: Option<String>,
    pub reasons: Vec<String>,
}
