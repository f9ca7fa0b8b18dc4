//! Fleet Store
//!
//! Persistence collaborator, keyed by vessel id. The engine never opens
//! storage itself; hosts load a snapshot, run a pass, and write back.
//! Derived fields (anomaly, risk) are never stored.

use crate::logic::error::EngineResult;
use crate::logic::vessel::VesselState;

pub trait FleetStore {
    /// Every stored vessel, in insertion order
    fn load_fleet(&self) -> EngineResult<Vec<VesselState>>;

    /// Insert or replace by id. Trajectory and friendliness travel with
    /// the state.
    fn upsert_vessel(&mut self, vessel: &VesselState) -> EngineResult<()>;

    /// Returns whether a vessel was removed
    fn delete_vessel(&mut self, id: &str) -> EngineResult<bool>;

    fn upsert_all(&mut self, vessels: &[VesselState]) -> EngineResult<()> {
        for vessel in vessels {
            self.upsert_vessel(vessel)?;
        }
        Ok(())
    }
}

/// Volatile store for tests and hosts without a database
#[derive(Debug, Default)]
pub struct MemoryFleetStore {
    vessels: Vec<VesselState>,
}

impl MemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FleetStore for MemoryFleetStore {
    fn load_fleet(&self) -> EngineResult<Vec<VesselState>> {
        Ok(self.vessels.clone())
    }

    fn upsert_vessel(&mut self, vessel: &VesselState) -> EngineResult<()> {
        let mut stored = vessel.clone();
        stored.invalidate_derived();

        match self.vessels.iter_mut().find(|v| v.id == vessel.id) {
            Some(existing) => *existing = stored,
            None => self.vessels.push(stored),
        }
        Ok(())
    }

    fn delete_vessel(&mut self, id: &str) -> EngineResult<bool> {
        let before = self.vessels.len();
        self.vessels.retain(|v| v.id != id);
        Ok(self.vessels.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::anomaly::AnomalyStatus;
    use crate::logic::geo::GeoPoint;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryFleetStore::new();
        let mut v = VesselState::new("A", GeoPoint::new(1.0, 2.0), 5.0, 10.0, 0.0, true).unwrap();
        v.anomaly = Some(AnomalyStatus::Anomalous);
        v.risk_score = Some(30);

        store.upsert_vessel(&v).unwrap();
        let loaded = store.load_fleet().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].anomaly.is_none());
        assert!(loaded[0].risk_score.is_none());

        assert!(store.delete_vessel("A").unwrap());
        assert!(!store.delete_vessel("A").unwrap());
        assert!(store.load_fleet().unwrap().is_empty());
    }
}
