//! SQLite Fleet Store
//!
//! One `vessels` table, trajectories stored as JSON text.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection};

use super::store::FleetStore;
use crate::logic::error::EngineResult;
use crate::logic::geo::GeoPoint;
use crate::logic::trajectory::Trajectory;
use crate::logic::vessel::VesselState;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS vessels (
        vessel_id TEXT PRIMARY KEY,
        lat REAL,
        lon REAL,
        speed REAL,
        heading REAL,
        timestamp REAL,
        trajectory TEXT,
        is_friendly INTEGER
    )
";

pub struct SqliteFleetStore {
    conn: Connection,
}

impl SqliteFleetStore {
    /// Open (or create) the database file and its schema
    pub fn open(path: &Path) -> EngineResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        log::info!("Opened fleet store: {:?}", path);
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> EngineResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> EngineResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

/// Raw row before trajectory decoding
struct VesselRow {
    id: String,
    lat: f64,
    lon: f64,
    speed: f64,
    heading: f64,
    timestamp: f64,
    trajectory: Option<String>,
    is_friendly: i64,
}

impl VesselRow {
    fn into_state(self) -> VesselState {
        let trajectory = decode_trajectory(&self.id, self.trajectory.as_deref());
        VesselState {
            id: self.id,
            position: GeoPoint::new(self.lat, self.lon),
            speed: self.speed,
            heading: self.heading,
            timestamp: self.timestamp,
            is_friendly: self.is_friendly != 0,
            trajectory,
            anomaly: None,
            risk_score: None,
        }
    }
}

/// Empty text and JSON `null` mean "no trajectory"
fn decode_trajectory(id: &str, text: Option<&str>) -> Option<Trajectory> {
    let text = text.map(str::trim).filter(|t| !t.is_empty() && *t != "null")?;
    match serde_json::from_str::<Trajectory>(text) {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("Dropping unreadable trajectory for {}: {}", id, e);
            None
        }
    }
}

impl FleetStore for SqliteFleetStore {
    fn load_fleet(&self) -> EngineResult<Vec<VesselState>> {
        let mut stmt = self.conn.prepare(
            "SELECT vessel_id, lat, lon, speed, heading, timestamp, trajectory, is_friendly
             FROM vessels ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(VesselRow {
                id: row.get(0)?,
                lat: row.get(1)?,
                lon: row.get(2)?,
                speed: row.get(3)?,
                heading: row.get(4)?,
                timestamp: row.get(5)?,
                trajectory: row.get(6)?,
                is_friendly: row.get::<_, Option<i64>>(7)?.unwrap_or(1),
            })
        })?;

        let mut fleet = Vec::new();
        for row in rows {
            fleet.push(row?.into_state());
        }
        log::debug!("Loaded {} vessels", fleet.len());
        Ok(fleet)
    }

    fn upsert_vessel(&mut self, vessel: &VesselState) -> EngineResult<()> {
        let trajectory = vessel
            .trajectory
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        self.conn.execute(
            "INSERT OR REPLACE INTO vessels (vessel_id, lat, lon, speed, heading, timestamp, trajectory, is_friendly)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                vessel.id,
                vessel.position.lat,
                vessel.position.lon,
                vessel.speed,
                vessel.heading,
                vessel.timestamp,
                trajectory,
                vessel.is_friendly as i64,
            ],
        )?;
        Ok(())
    }

    fn delete_vessel(&mut self, id: &str) -> EngineResult<bool> {
        let removed = self.conn.execute("DELETE FROM vessels WHERE vessel_id = ?1", params![id])?;
        Ok(removed > 0)
    }

    fn upsert_all(&mut self, vessels: &[VesselState]) -> EngineResult<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO vessels (vessel_id, lat, lon, speed, heading, timestamp, trajectory, is_friendly)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for vessel in vessels {
                let trajectory = vessel
                    .trajectory
                    .as_ref()
                    .map(serde_json::to_string)
                    .transpose()?;
                stmt.execute(params![
                    vessel.id,
                    vessel.position.lat,
                    vessel.position.lon,
                    vessel.speed,
                    vessel.heading,
                    vessel.timestamp,
                    trajectory,
                    vessel.is_friendly as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
