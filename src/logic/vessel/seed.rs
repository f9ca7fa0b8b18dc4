//! Demo Fleet
//!
//! Seeded initial fleet for an empty store: ten vessels scattered around
//! the boundary vertices and the piracy zones.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::VesselState;
use crate::logic::geo::GeoPoint;

pub const FLEET_SIZE: usize = 10;

/// Seconds between consecutive demo timestamps
const TIMESTAMP_SPACING: f64 = 300.0;

/// Anchor points vessels are scattered around (degrees)
pub const REFERENCE_POINTS: [[f64; 2]; 10] = [
    [23.5, 64.5],
    [15.0, 64.5],
    [5.0, 69.5],
    [4.0, 76.0],
    [4.0, 84.0],
    [6.0, 87.5],
    [15.0, 93.0],
    [20.0, 92.0],
    [12.0, 44.0],
    [2.0, 99.0],
];

/// Deterministic for a given seed
pub fn seed_fleet(now: f64, seed: u64) -> Vec<VesselState> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..FLEET_SIZE)
        .map(|i| {
            let anchor = REFERENCE_POINTS[rng.gen_range(0..REFERENCE_POINTS.len())];
            let position = GeoPoint::new(
                anchor[0] + rng.gen_range(-0.5..0.5),
                anchor[1] + rng.gen_range(-0.5..0.5),
            );

            VesselState {
                id: vessel_id(i + 1),
                position,
                speed: rng.gen_range(5.0..20.0),
                heading: rng.gen_range(0.0..360.0),
                timestamp: now - i as f64 * TIMESTAMP_SPACING,
                is_friendly: rng.gen_bool(0.5),
                trajectory: None,
                anomaly: None,
                risk_score: None,
            }
        })
        .collect()
}

/// `VESSEL001`, `VESSEL002`, ...
pub fn vessel_id(n: usize) -> String {
    format!("VESSEL{:03}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fleet_deterministic() {
        let a = seed_fleet(1_000_000.0, 42);
        let b = seed_fleet(1_000_000.0, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), FLEET_SIZE);
    }

    #[test]
    fn test_seed_fleet_valid_and_ordered() {
        let fleet = seed_fleet(1_000_000.0, 7);
        for (i, v) in fleet.iter().enumerate() {
            assert_eq!(v.id, vessel_id(i + 1));
            assert!(v.validate().is_ok(), "{:?}", v);
            assert!((5.0..20.0).contains(&v.speed));
            assert_eq!(v.timestamp, 1_000_000.0 - i as f64 * 300.0);
        }
    }

    #[test]
    fn test_vessel_id_format() {
        assert_eq!(vessel_id(1), "VESSEL001");
        assert_eq!(vessel_id(42), "VESSEL042");
    }
}
