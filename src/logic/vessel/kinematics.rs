//! Kinematic Tick
//!
//! Host-side simulation step, run between evaluation passes.
//! The engine itself never moves vessels.

use super::types::VesselState;

/// Degrees moved per knot per tick
pub const DRIFT_PER_KNOT: f64 = 0.0001;

/// Speed bounds applied after each tick (knots)
pub const MIN_SPEED: f64 = 0.0;
pub const MAX_SPEED: f64 = 25.0;

/// Advance one vessel by one tick of `dt_secs`.
///
/// Latitude follows sin(heading) and longitude cos(heading), matching the
/// simulator the fleet data was recorded with.
pub fn advance(vessel: &mut VesselState, dt_secs: f64) {
    let heading = vessel.heading.to_radians();
    let step = vessel.speed * DRIFT_PER_KNOT;

    vessel.timestamp += dt_secs.max(0.0);
    vessel.position.lat = (vessel.position.lat + heading.sin() * step).clamp(-90.0, 90.0);
    vessel.position.lon = wrap_longitude(vessel.position.lon + heading.cos() * step);
    vessel.speed = vessel.speed.clamp(MIN_SPEED, MAX_SPEED);

    vessel.invalidate_derived();
}

/// Advance every vessel in the snapshot
pub fn advance_all(vessels: &mut [VesselState], dt_secs: f64) {
    for vessel in vessels.iter_mut() {
        advance(vessel, dt_secs);
    }
    log::debug!("Advanced {} vessels by {}s", vessels.len(), dt_secs);
}

fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::anomaly::AnomalyStatus;
    use crate::logic::geo::GeoPoint;

    fn vessel(speed: f64, heading: f64) -> VesselState {
        VesselState::new("V", GeoPoint::new(10.0, 60.0), speed, heading, 100.0, true).unwrap()
    }

    #[test]
    fn test_tick_moves_and_stamps() {
        let mut v = vessel(10.0, 90.0);
        advance(&mut v, 60.0);
        assert_eq!(v.timestamp, 160.0);
        // sin(90) = 1 -> all drift on latitude
        assert!((v.position.lat - 10.001).abs() < 1e-9);
        assert!((v.position.lon - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_clamped() {
        let mut v = vessel(10.0, 0.0);
        v.speed = 40.0;
        advance(&mut v, 60.0);
        assert_eq!(v.speed, MAX_SPEED);
    }

    #[test]
    fn test_tick_invalidates_derived_fields() {
        let mut v = vessel(10.0, 0.0);
        v.anomaly = Some(AnomalyStatus::Normal);
        v.risk_score = Some(40);
        advance(&mut v, 60.0);
        assert!(v.anomaly.is_none());
        assert!(v.risk_score.is_none());
    }

    #[test]
    fn test_longitude_wraps() {
        assert!((wrap_longitude(180.5) - (-179.5)).abs() < 1e-9);
        assert!((wrap_longitude(-180.5) - 179.5).abs() < 1e-9);
        assert_eq!(wrap_longitude(45.0), 45.0);
    }
}
