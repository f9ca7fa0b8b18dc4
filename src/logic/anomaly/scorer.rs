//! Anomaly Scorer
//!
//! Batch pass over the whole fleet snapshot. Features are (speed, heading);
//! only the binary flag leaves this module.

use std::collections::HashMap;

use super::forest::fit_predict;
use super::types::{AnomalyConfig, AnomalyStatus, FeatureRow, FEATURE_LAYOUT, MIN_FLEET_SIZE};
use crate::logic::error::{EngineError, EngineResult};
use crate::logic::vessel::VesselState;

/// Feature row for one vessel; non-finite values count as 0
pub fn features(vessel: &VesselState) -> FeatureRow {
    [finite_or_zero(vessel.speed), finite_or_zero(vessel.heading)]
}

/// Score the fleet: vessel id -> Normal / Anomalous.
///
/// Fails with `InsufficientData` below two vessels.
pub fn score(fleet: &[VesselState], config: &AnomalyConfig) -> EngineResult<HashMap<String, AnomalyStatus>> {
    if fleet.len() < MIN_FLEET_SIZE {
        return Err(EngineError::InsufficientData { vessels: fleet.len() });
    }

    let rows: Vec<FeatureRow> = fleet.iter().map(features).collect();
    let flags = fit_predict(&rows, config);

    let result: HashMap<String, AnomalyStatus> = fleet
        .iter()
        .zip(flags)
        .map(|(vessel, outlier)| {
            let status = if outlier { AnomalyStatus::Anomalous } else { AnomalyStatus::Normal };
            (vessel.id.clone(), status)
        })
        .collect();

    log::debug!(
        "Anomaly pass on [{}]: {} vessels, {} anomalous",
        FEATURE_LAYOUT.join(", "),
        result.len(),
        result.values().filter(|s| s.is_anomalous()).count()
    );

    Ok(result)
}

/// Every vessel marked `Unknown` (fleet too small)
pub fn unknown_for(fleet: &[VesselState]) -> HashMap<String, AnomalyStatus> {
    fleet
        .iter()
        .map(|v| (v.id.clone(), AnomalyStatus::Unknown))
        .collect()
}

/// Write a batch result onto the vessels it was computed from
pub fn annotate(fleet: &mut [VesselState], statuses: &HashMap<String, AnomalyStatus>) {
    for vessel in fleet.iter_mut() {
        vessel.anomaly = statuses.get(&vessel.id).copied();
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::geo::GeoPoint;

    fn vessel(id: &str, speed: f64, heading: f64) -> VesselState {
        VesselState::new(id, GeoPoint::new(18.0, 70.0), speed, heading, 0.0, true).unwrap()
    }

    fn fleet_with_outlier() -> Vec<VesselState> {
        let mut fleet: Vec<VesselState> = (0..9)
            .map(|i| vessel(&format!("V{}", i), 10.0 + i as f64 * 0.1, 90.0 + i as f64))
            .collect();
        fleet.push(vessel("ODD", 25.0, 300.0));
        fleet
    }

    #[test]
    fn test_insufficient_data() {
        let fleet = vec![vessel("V1", 10.0, 0.0)];
        let result = score(&fleet, &AnomalyConfig::default());
        assert!(matches!(result, Err(EngineError::InsufficientData { vessels: 1 })));
        assert!(matches!(
            score(&[], &AnomalyConfig::default()),
            Err(EngineError::InsufficientData { vessels: 0 })
        ));
    }

    #[test]
    fn test_outlier_flagged() {
        let statuses = score(&fleet_with_outlier(), &AnomalyConfig::default()).unwrap();
        assert_eq!(statuses.len(), 10);
        assert_eq!(statuses["ODD"], AnomalyStatus::Anomalous);
        assert_eq!(statuses.values().filter(|s| s.is_anomalous()).count(), 1);
    }

    #[test]
    fn test_deterministic() {
        let fleet = fleet_with_outlier();
        let a = score(&fleet, &AnomalyConfig::default()).unwrap();
        let b = score(&fleet, &AnomalyConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_contamination_rate_bounds_outliers() {
        let fleet: Vec<VesselState> = (0..20)
            .map(|i| vessel(&format!("V{}", i), 5.0 + (i * 7 % 15) as f64, (i * 37 % 360) as f64))
            .collect();
        let statuses = score(&fleet, &AnomalyConfig::default()).unwrap();
        let flagged = statuses.values().filter(|s| s.is_anomalous()).count();
        assert!((1..=2).contains(&flagged), "flagged {}", flagged);
    }

    #[test]
    fn test_non_finite_features_are_zero() {
        let mut v = vessel("V1", 10.0, 10.0);
        v.speed = f64::NAN;
        assert_eq!(features(&v), [0.0, 10.0]);
    }

    #[test]
    fn test_annotate_and_unknown() {
        let mut fleet = vec![vessel("V1", 10.0, 0.0)];
        let statuses = unknown_for(&fleet);
        annotate(&mut fleet, &statuses);
        assert_eq!(fleet[0].anomaly, Some(AnomalyStatus::Unknown));
    }
}
