//! Anomaly Types
//!
//! Per-vessel flag and model configuration. No scoring logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// ANOMALY STATUS
// ============================================================================

/// Outcome of one batch anomaly pass for one vessel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyStatus {
    /// Fleet too small to score (needs a reference population)
    Unknown,
    Normal,
    Anomalous,
}

impl AnomalyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyStatus::Unknown => "unknown",
            AnomalyStatus::Normal => "normal",
            AnomalyStatus::Anomalous => "anomalous",
        }
    }

    pub fn is_anomalous(&self) -> bool {
        matches!(self, AnomalyStatus::Anomalous)
    }
}

impl std::fmt::Display for AnomalyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// FEATURE LAYOUT
// ============================================================================

/// speed, heading
pub const FEATURE_COUNT: usize = 2;

pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = ["speed", "heading"];

pub type FeatureRow = [f64; FEATURE_COUNT];

// ============================================================================
// MODEL CONFIG
// ============================================================================

/// Expected outlier fraction
pub const DEFAULT_CONTAMINATION: f64 = 0.1;

/// Fixed seed so risk scores are reproducible
pub const DEFAULT_SEED: u64 = 42;

pub const DEFAULT_TREES: usize = 100;

/// Subsample size per tree (capped by fleet size)
pub const DEFAULT_MAX_SAMPLES: usize = 256;

/// Minimum fleet size for a meaningful pass
pub const MIN_FLEET_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Fraction in (0, 0.5]
    pub contamination: f64,
    pub seed: u64,
    pub n_trees: usize,
    pub max_samples: usize,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            contamination: DEFAULT_CONTAMINATION,
            seed: DEFAULT_SEED,
            n_trees: DEFAULT_TREES,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl AnomalyConfig {
    /// Contamination clamped into its valid range
    pub fn effective_contamination(&self) -> f64 {
        if self.contamination.is_finite() {
            self.contamination.clamp(f64::EPSILON, 0.5)
        } else {
            DEFAULT_CONTAMINATION
        }
    }
}
