//! Engine Errors
//!
//! Taxonomy: geometry failures and insufficient data are recovered inside a
//! pass (and surfaced as warnings), validation failures are rejected at
//! registration, storage failures belong to the persistence collaborator.

use serde::{Deserialize, Serialize};

pub type EngineResult<T> = Result<T, EngineError>;

/// Malformed or degenerate input to the intersection checker
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Trajectory has fewer than two points
    DegenerateTrajectory { points: usize },
    /// Boundary has fewer than two vertices
    DegenerateBoundary { vertices: usize },
    /// NaN or infinite coordinate
    NonFiniteCoordinate,
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::DegenerateTrajectory { points } => {
                write!(f, "trajectory needs at least 2 points, got {}", points)
            }
            GeometryError::DegenerateBoundary { vertices } => {
                write!(f, "boundary needs at least 2 vertices, got {}", vertices)
            }
            GeometryError::NonFiniteCoordinate => write!(f, "non-finite coordinate"),
        }
    }
}

impl std::error::Error for GeometryError {}

#[derive(Debug)]
pub enum EngineError {
    Geometry(GeometryError),
    InsufficientData { vessels: usize },
    Validation(String),
    Storage(String),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Geometry(e) => write!(f, "Geometry Error: {}", e),
            EngineError::InsufficientData { vessels } => {
                write!(f, "Insufficient Data: anomaly scoring needs at least 2 vessels, got {}", vessels)
            }
            EngineError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            EngineError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            EngineError::Io(e) => write!(f, "IO Error: {}", e),
            EngineError::Serialization(e) => write!(f, "Serialization Error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Geometry(e) => Some(e),
            EngineError::Io(e) => Some(e),
            EngineError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for EngineError {
    fn from(err: GeometryError) -> Self {
        EngineError::Geometry(err)
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err)
    }
}

impl From<rusqlite::Error> for EngineError {
    fn from(err: rusqlite::Error) -> Self {
        EngineError::Storage(err.to_string())
    }
}

// ============================================================================
// WARNINGS
// ============================================================================

/// Recoverable failure surfaced to the caller; the pass carried on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineWarning {
    /// Vessel the failed check belonged to, `None` for fleet-level checks
    pub vessel_id: Option<String>,
    pub message: String,
}

impl EngineWarning {
    pub fn for_vessel(vessel_id: &str, error: &EngineError) -> Self {
        Self {
            vessel_id: Some(vessel_id.to_string()),
            message: error.to_string(),
        }
    }

    pub fn for_fleet(error: &EngineError) -> Self {
        Self {
            vessel_id: None,
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for EngineWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.vessel_id {
            Some(id) => write!(f, "[{}] {}", id, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
