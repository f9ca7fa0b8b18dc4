//! Maritime Awareness - Demo Driver
//!
//! Loads (or seeds) the fleet store, registers any vessels listed in the
//! registration file, then runs a fixed number of update cycles:
//! advance -> persist -> evaluate -> report.

use std::fs;
use std::path::Path;

use chrono::Utc;

use maritime_awareness_core::constants::{
    get_config_path, get_db_path, get_horizon_minutes, get_min_speed, get_register_path,
    get_ticks, APP_NAME, APP_VERSION, DEFAULT_FLEET_SEED, DEFAULT_TICK_SECS,
};
use maritime_awareness_core::logic::alert::Alert;
use maritime_awareness_core::logic::config::EngineConfig;
use maritime_awareness_core::logic::engine::{evaluate_with, Evaluation};
use maritime_awareness_core::logic::fleet::{Fleet, FleetStore, SqliteFleetStore};
use maritime_awareness_core::logic::risk;
use maritime_awareness_core::logic::vessel::{advance_all, seed_fleet, VesselState};
use maritime_awareness_core::EngineResult;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    if let Err(e) = run() {
        log::error!("{} stopped: {}", APP_NAME, e);
        std::process::exit(1);
    }
}

fn run() -> EngineResult<()> {
    let config_path = get_config_path();
    let mut config = EngineConfig::load_or_default(config_path.as_deref());
    if std::env::var_os("MSA_HORIZON_MINUTES").is_some() {
        config.horizon_minutes = get_horizon_minutes();
    }
    let min_speed = get_min_speed();

    let db_path = get_db_path();
    let mut store = SqliteFleetStore::open(&db_path)?;

    if store.load_fleet()?.is_empty() {
        let seeded = seed_fleet(Utc::now().timestamp() as f64, DEFAULT_FLEET_SEED);
        log::info!("Empty store, seeding {} vessels", seeded.len());
        store.upsert_all(&seeded)?;
    }

    if let Some(path) = get_register_path() {
        register_from_file(&mut store, &path, config.horizon_minutes)?;
    }

    let mut previous: Vec<Alert> = Vec::new();
    for tick in 1..=get_ticks() {
        let mut vessels = store.load_fleet()?;
        advance_all(&mut vessels, DEFAULT_TICK_SECS);
        store.upsert_all(&vessels)?;

        let evaluation = evaluate_with(Fleet::from_vessels(vessels), &config, min_speed, Utc::now());
        report(tick, &evaluation, &config, &previous);
        previous = evaluation.alerts;
    }

    Ok(())
}

/// Register vessels from a JSON list; trajectories are projected here only
fn register_from_file(store: &mut SqliteFleetStore, path: &Path, horizon_minutes: f64) -> EngineResult<()> {
    let data = fs::read(path)?;
    let incoming: Vec<VesselState> = serde_json::from_slice(&data)?;
    let mut fleet = Fleet::from_vessels(store.load_fleet()?);

    for vessel in incoming {
        let id = vessel.id.clone();
        match fleet.register(vessel, horizon_minutes) {
            Ok(Some(warning)) => log::warn!("{}", warning),
            Ok(None) => {}
            Err(e) => {
                log::warn!("Rejected registration of {}: {}", id, e);
                continue;
            }
        }
        if let Some(registered) = fleet.get(&id) {
            store.upsert_vessel(registered)?;
        }
    }
    Ok(())
}

fn report(tick: u32, evaluation: &Evaluation, config: &EngineConfig, previous: &[Alert]) {
    log::info!(
        "Tick {}: {} vessels at or above {:.1} knots",
        tick,
        evaluation.visible().count(),
        evaluation.speed_filter
    );

    for vessel in evaluation.visible() {
        let assessment = risk::assess_with_rules(vessel, &config.zones, &config.risk);
        log::info!(
            "  {} [{}] {} risk={} ({})",
            vessel.id,
            vessel.status_label(),
            vessel.position,
            assessment.score,
            assessment.reasons.join(", ")
        );
    }

    for alert in &evaluation.alerts {
        if previous.iter().any(|p| p.same_event(alert)) {
            log::debug!("  ongoing {}", alert);
        } else {
            log::warn!("  ALERT {}", alert);
        }
    }

    for warning in &evaluation.warnings {
        log::warn!("  {}", warning);
    }
}
