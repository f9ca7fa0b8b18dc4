//! Alert Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    Speed,
    Piracy,
    BoundaryViolation,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Speed => "speed",
            AlertKind::Piracy => "piracy",
            AlertKind::BoundaryViolation => "boundary",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable alert event. Not deduplicated across passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub alert_id: Uuid,
    pub kind: AlertKind,
    pub vessel_id: String,
    pub message: String,
    /// Zone name, piracy alerts only
    pub zone: Option<String>,
    pub produced_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(kind: AlertKind, vessel_id: &str, message: String, produced_at: DateTime<Utc>) -> Self {
        Self {
            alert_id: Uuid::new_v4(),
            kind,
            vessel_id: vessel_id.to_string(),
            message,
            zone: None,
            produced_at,
        }
    }

    pub fn with_zone(mut self, zone: &str) -> Self {
        self.zone = Some(zone.to_string());
        self
    }

    /// Same kind and message, ignoring id and time
    pub fn same_event(&self, other: &Alert) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
