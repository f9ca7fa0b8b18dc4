//! Risk Scorer
//!
//! Pure function of (speed, position, anomaly flag).
//! Input: VesselState + zones + rules
//! Output: RiskAssessment (score capped at 100)

use super::rules::RiskRules;
use super::types::{RiskAssessment, ScoreBreakdown};
use crate::logic::anomaly::AnomalyStatus;
use crate::logic::geo::{default_piracy_zones, GeoZone};
use crate::logic::vessel::VesselState;

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Risk score with default zones and rules
pub fn risk_score(vessel: &VesselState) -> u8 {
    assess_with_rules(vessel, &default_piracy_zones(), &RiskRules::default()).score
}

/// Full assessment with default rules
pub fn assess(vessel: &VesselState, zones: &[GeoZone]) -> RiskAssessment {
    assess_with_rules(vessel, zones, &RiskRules::default())
}

/// Assessment with custom rules.
///
/// Zone term uses any-match semantics: overlapping zones still add the
/// zone points once.
pub fn assess_with_rules(vessel: &VesselState, zones: &[GeoZone], rules: &RiskRules) -> RiskAssessment {
    let mut reasons = Vec::new();
    let mut breakdown = ScoreBreakdown::default();

    if vessel.speed > rules.speed_threshold {
        breakdown.speed_contribution = rules.speed_points;
        reasons.push(format!("High speed: {:.1} knots > {:.1}", vessel.speed, rules.speed_threshold));
    }

    let zone = zones.iter().find(|z| z.contains(vessel.position));
    if let Some(zone) = zone {
        breakdown.zone_contribution = rules.zone_points;
        reasons.push(format!("Inside piracy zone: {}", zone.name));
    }

    // Not scored yet counts as anomalous
    match vessel.anomaly {
        Some(AnomalyStatus::Anomalous) => {
            breakdown.anomaly_contribution = rules.anomaly_points;
            reasons.push("Anomalous speed/heading for current fleet".to_string());
        }
        None => {
            breakdown.anomaly_contribution = rules.anomaly_points;
            reasons.push("Anomaly status not computed yet".to_string());
        }
        Some(AnomalyStatus::Normal) | Some(AnomalyStatus::Unknown) => {}
    }

    breakdown.raw_total = breakdown.speed_contribution as u16
        + breakdown.zone_contribution as u16
        + breakdown.anomaly_contribution as u16;

    let score = breakdown.raw_total.min(rules.cap() as u16) as u8;

    RiskAssessment {
        score,
        breakdown,
        zone: zone.map(|z| z.name.clone()),
        reasons,
    }
}

/// Score every vessel in place
pub fn annotate(fleet: &mut [VesselState], zones: &[GeoZone], rules: &RiskRules) {
    for vessel in fleet.iter_mut() {
        vessel.risk_score = Some(assess_with_rules(vessel, zones, rules).score);
    }
}

// ============================================================================
// TESTS
// ============================================================================
