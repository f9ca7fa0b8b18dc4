//! Engine Configuration
//!
//! Zones, boundary and rule values. Defaults are the built-in constants;
//! a JSON file may override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HORIZON_MINUTES;
use crate::logic::anomaly::AnomalyConfig;
use crate::logic::error::{EngineError, EngineResult};
use crate::logic::geo::{default_boundary, default_piracy_zones, GeoZone, MaritimeBoundary};
use crate::logic::risk::RiskRules;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Alert priority order
    pub zones: Vec<GeoZone>,
    pub boundary: MaritimeBoundary,
    pub risk: RiskRules,
    pub anomaly: AnomalyConfig,
    /// Trajectory projection horizon (minutes)
    pub horizon_minutes: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zones: default_piracy_zones(),
            boundary: default_boundary(),
            risk: RiskRules::default(),
            anomaly: AnomalyConfig::default(),
            horizon_minutes: DEFAULT_HORIZON_MINUTES,
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> EngineResult<Self> {
        let data = fs::read(path)?;
        let config: EngineConfig = serde_json::from_slice(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded engine config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Engine config {:?} not usable ({}), using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> EngineResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !(self.horizon_minutes.is_finite() && self.horizon_minutes > 0.0) {
            return Err(EngineError::Validation(format!(
                "horizon_minutes must be positive, got {}",
                self.horizon_minutes
            )));
        }
        if !self.risk.speed_threshold.is_finite() {
            return Err(EngineError::Validation("speed_threshold must be finite".to_string()));
        }
        for zone in &self.zones {
            if zone.lat_min > zone.lat_max || zone.lon_min > zone.lon_max {
                return Err(EngineError::Validation(format!("zone {} has inverted bounds", zone.name)));
            }
        }
        Ok(())
    }
}
