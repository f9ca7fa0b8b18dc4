//! Central Configuration Constants
//!
//! Single source of truth for runtime defaults of the demo driver.
//! Engine rule defaults live next to the rules (`logic::risk::rules`,
//! `logic::anomaly::types`, `logic::geo::zones`).

use std::path::PathBuf;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Maritime Awareness";

/// Data directory name under the platform data dir
pub const DATA_DIR: &str = "maritime-awareness";

/// Default SQLite file name
pub const DEFAULT_DB_FILE: &str = "vessel_data.db";

/// Default number of simulation ticks run by the driver
pub const DEFAULT_TICKS: u32 = 5;

/// Default tick length (seconds)
pub const DEFAULT_TICK_SECS: f64 = 60.0;

/// Default minimum speed filter (knots) - 0 shows everything
pub const DEFAULT_MIN_SPEED: f64 = 0.0;

/// Default projection horizon (minutes)
pub const DEFAULT_HORIZON_MINUTES: f64 = 60.0;

/// Seed for the demo fleet
pub const DEFAULT_FLEET_SEED: u64 = 42;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get SQLite path from environment or use the platform data dir
pub fn get_db_path() -> PathBuf {
    std::env::var("MSA_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DATA_DIR)
                .join(DEFAULT_DB_FILE)
        })
}

/// Get engine config path from environment, if any
pub fn get_config_path() -> Option<PathBuf> {
    std::env::var("MSA_CONFIG_PATH").ok().map(PathBuf::from)
}

/// Get path of a JSON vessel list to register at startup, if any
pub fn get_register_path() -> Option<PathBuf> {
    std::env::var("MSA_REGISTER_PATH").ok().map(PathBuf::from)
}

/// Get tick count from environment or use default
pub fn get_ticks() -> u32 {
    std::env::var("MSA_TICKS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TICKS)
}

/// Get minimum speed filter from environment or use default
pub fn get_min_speed() -> f64 {
    std::env::var("MSA_MIN_SPEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|v: &f64| v.is_finite() && *v >= 0.0)
        .unwrap_or(DEFAULT_MIN_SPEED)
}

/// Get projection horizon from environment or use default
pub fn get_horizon_minutes() -> f64 {
    std::env::var("MSA_HORIZON_MINUTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|v: &f64| v.is_finite() && *v > 0.0)
        .unwrap_or(DEFAULT_HORIZON_MINUTES)
}
