//! Fleet Snapshot
//!
//! Explicit in-memory collection handed to each evaluation pass.
//! Vessel ids are unique; upsert replaces in place and keeps order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::logic::error::{EngineError, EngineResult, EngineWarning, GeometryError};
use crate::logic::trajectory::{project, Trajectory};
use crate::logic::vessel::VesselState;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fleet {
    vessels: Vec<VesselState>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later duplicates replace earlier ones
    pub fn from_vessels(vessels: Vec<VesselState>) -> Self {
        let mut fleet = Self::new();
        for vessel in vessels {
            fleet.upsert(vessel);
        }
        fleet
    }

    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&VesselState> {
        self.vessels.iter().find(|v| v.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VesselState> {
        self.vessels.iter()
    }

    pub fn as_slice(&self) -> &[VesselState] {
        &self.vessels
    }

    pub fn as_mut_slice(&mut self) -> &mut [VesselState] {
        &mut self.vessels
    }

    pub fn upsert(&mut self, vessel: VesselState) {
        match self.vessels.iter_mut().find(|v| v.id == vessel.id) {
            Some(existing) => *existing = vessel,
            None => self.vessels.push(vessel),
        }
    }

    /// Drops the vessel together with its trajectory
    pub fn remove(&mut self, id: &str) -> Option<VesselState> {
        let idx = self.vessels.iter().position(|v| v.id == id)?;
        Some(self.vessels.remove(idx))
    }

    /// Validate, project a trajectory over `horizon_minutes` and upsert.
    ///
    /// A projection that degenerates (at the poles) is not stored; the
    /// vessel is still registered and a warning is returned.
    pub fn register(&mut self, mut vessel: VesselState, horizon_minutes: f64) -> EngineResult<Option<EngineWarning>> {
        vessel.validate()?;

        let trajectory = project(vessel.position, vessel.speed, vessel.heading, horizon_minutes);
        let warning = if trajectory.is_degenerate() {
            let error: EngineError = GeometryError::DegenerateTrajectory { points: trajectory.len() }.into();
            log::warn!("Vessel {} registered without trajectory: {}", vessel.id, error);
            vessel.trajectory = None;
            Some(EngineWarning::for_vessel(&vessel.id, &error))
        } else {
            vessel.trajectory = Some(trajectory);
            None
        };

        vessel.invalidate_derived();
        log::info!("Registered {} as {}", vessel.id, vessel.status_label());
        self.upsert(vessel);
        Ok(warning)
    }

    /// vessel id -> trajectory, for vessels that have one
    pub fn trajectories(&self) -> HashMap<String, Trajectory> {
        self.vessels
            .iter()
            .filter_map(|v| v.trajectory.as_ref().map(|t| (v.id.clone(), t.clone())))
            .collect()
    }
}

impl From<Vec<VesselState>> for Fleet {
    fn from(vessels: Vec<VesselState>) -> Self {
        Self::from_vessels(vessels)
    }
}
