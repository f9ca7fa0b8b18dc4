//! Evaluation Engine
//!
//! One full pass per update cycle: anomaly scoring -> risk scoring ->
//! alert generation. Takes the snapshot by value so nothing else can
//! mutate it mid-pass; hands it back annotated.

use chrono::{DateTime, Utc};

use crate::logic::alert::{generate_with, Alert};
use crate::logic::anomaly;
use crate::logic::config::EngineConfig;
use crate::logic::error::EngineWarning;
use crate::logic::fleet::Fleet;
use crate::logic::geo::MaritimeBoundary;
use crate::logic::risk;
use crate::logic::vessel::VesselState;

/// Result of one pass
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Whole fleet, anomaly and risk filled in
    pub fleet: Fleet,
    /// Alerts for vessels passing the speed filter, grouped per vessel in
    /// fleet order
    pub alerts: Vec<Alert>,
    /// Recovered failures; the pass still completed
    pub warnings: Vec<EngineWarning>,
    pub speed_filter: f64,
    pub evaluated_at: DateTime<Utc>,
}

impl Evaluation {
    /// Vessels with `speed >= speed_filter`
    pub fn visible(&self) -> impl Iterator<Item = &VesselState> {
        let threshold = self.speed_filter;
        self.fleet.iter().filter(move |v| v.speed >= threshold)
    }

    pub fn alerts_for<'a>(&'a self, vessel_id: &'a str) -> impl Iterator<Item = &'a Alert> {
        self.alerts.iter().filter(move |a| a.vessel_id == vessel_id)
    }

    pub fn anomalous_count(&self) -> usize {
        self.fleet
            .iter()
            .filter(|v| v.anomaly.map_or(false, |a| a.is_anomalous()))
            .count()
    }
}

/// Evaluate with default zones, rules and model settings
pub fn evaluate(fleet: Fleet, boundary: &MaritimeBoundary, speed_filter: f64) -> Evaluation {
    let config = EngineConfig {
        boundary: boundary.clone(),
        ..Default::default()
    };
    evaluate_with(fleet, &config, speed_filter, Utc::now())
}

pub fn evaluate_with(
    mut fleet: Fleet,
    config: &EngineConfig,
    speed_filter: f64,
    now: DateTime<Utc>,
) -> Evaluation {
    let mut warnings = Vec::new();

    // 1. Anomaly batch over the whole fleet
    let statuses = match anomaly::score(fleet.as_slice(), &config.anomaly) {
        Ok(statuses) => statuses,
        Err(e) => {
            log::warn!("Anomaly scoring skipped: {}", e);
            warnings.push(EngineWarning::for_fleet(&e));
            anomaly::unknown_for(fleet.as_slice())
        }
    };
    anomaly::annotate(fleet.as_mut_slice(), &statuses);

    // 2. Risk against this batch
    risk::annotate(fleet.as_mut_slice(), &config.zones, &config.risk);

    // 3. Alerts for the visible set
    let trajectories = fleet.trajectories();
    let mut alerts = Vec::new();
    for vessel in fleet.iter().filter(|v| v.speed >= speed_filter) {
        let outcome = generate_with(
            vessel,
            &trajectories,
            &config.boundary,
            &config.zones,
            config.risk.speed_threshold,
            now,
        );
        alerts.extend(outcome.alerts);
        warnings.extend(outcome.warnings);
    }

    let evaluation = Evaluation {
        fleet,
        alerts,
        warnings,
        speed_filter,
        evaluated_at: now,
    };

    log::info!(
        "Evaluation pass: {} vessels, {} anomalous, {} alerts, {} warnings",
        evaluation.fleet.len(),
        evaluation.anomalous_count(),
        evaluation.alerts.len(),
        evaluation.warnings.len()
    );

    evaluation
}
