//! Alert Generator
//!
//! Per-vessel rule evaluation. Output order is fixed:
//! speed, then at most one piracy alert (first matching zone wins),
//! then boundary violation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::types::{Alert, AlertKind};
use crate::logic::error::{EngineError, EngineWarning};
use crate::logic::geo::{crosses, default_piracy_zones, GeoZone, MaritimeBoundary};
use crate::logic::risk::HIGH_SPEED_THRESHOLD;
use crate::logic::trajectory::Trajectory;
use crate::logic::vessel::VesselState;

/// Alerts for one vessel plus any checks that failed along the way
#[derive(Debug, Clone, Default)]
pub struct AlertOutcome {
    pub alerts: Vec<Alert>,
    pub warnings: Vec<EngineWarning>,
}

/// Evaluate with default zones and speed threshold, stamped now
pub fn generate(
    vessel: &VesselState,
    trajectories: &HashMap<String, Trajectory>,
    boundary: &MaritimeBoundary,
) -> AlertOutcome {
    generate_with(
        vessel,
        trajectories,
        boundary,
        &default_piracy_zones(),
        HIGH_SPEED_THRESHOLD,
        Utc::now(),
    )
}

/// `zones` are checked in slice order
pub fn generate_with(
    vessel: &VesselState,
    trajectories: &HashMap<String, Trajectory>,
    boundary: &MaritimeBoundary,
    zones: &[GeoZone],
    speed_threshold: f64,
    produced_at: DateTime<Utc>,
) -> AlertOutcome {
    let mut outcome = AlertOutcome::default();
    let high_speed = vessel.speed > speed_threshold;

    if high_speed {
        outcome.alerts.push(Alert::new(
            AlertKind::Speed,
            &vessel.id,
            format!("High Speed: {} at {:.1} knots", vessel.id, vessel.speed),
            produced_at,
        ));
    }

    if let Some(zone) = zones.iter().find(|z| z.contains(vessel.position)) {
        outcome.alerts.push(
            Alert::new(
                AlertKind::Piracy,
                &vessel.id,
                format!("Piracy Risk: {} in {}", vessel.id, zone.alert_region()),
                produced_at,
            )
            .with_zone(&zone.name),
        );
    }

    // Friendly vessels never trigger boundary alerts
    if !vessel.is_friendly {
        if let Some(trajectory) = trajectories.get(&vessel.id) {
            match crosses(trajectory.points(), boundary) {
                Ok(true) => {
                    let mut message = format!(
                        "Boundary Violation: Non-Friendly {} crossed {}",
                        vessel.id, boundary.alert_label()
                    );
                    if high_speed {
                        message.push_str(&format!(" at {:.1} knots", vessel.speed));
                    }
                    outcome
                        .alerts
                        .push(Alert::new(AlertKind::BoundaryViolation, &vessel.id, message, produced_at));
                }
                Ok(false) => {}
                Err(e) => {
                    let error = EngineError::Geometry(e);
                    log::warn!("Boundary crossing check failed for {}: {}", vessel.id, error);
                    outcome.warnings.push(EngineWarning::for_vessel(&vessel.id, &error));
                }
            }
        }
    }

    outcome
}
