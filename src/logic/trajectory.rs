//! Trajectory Projector
//!
//! Straight two-point projection of a vessel's path over a short horizon.
//! Flat-earth: 1 degree = 111 km, longitude stretched by 1/cos(lat).
//! Good enough for a few hundred km; not a geodesic.

use serde::{Deserialize, Serialize};

use crate::logic::geo::GeoPoint;

/// Knots -> km per minute
pub const KNOTS_TO_KM_PER_MIN: f64 = 1.852 / 60.0;

/// km per degree (flat-earth approximation)
pub const KM_PER_DEGREE: f64 = 111.0;

/// Below this |cos(lat)| the longitude correction is undefined
const COS_LAT_EPSILON: f64 = 1e-12;

// ============================================================================
// TRAJECTORY
// ============================================================================

/// Ordered (lat, lon) points, serialized as `[[lat, lon], ...]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory(pub Vec<GeoPoint>);

impl Trajectory {
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fewer than two points: nothing to check against a boundary
    pub fn is_degenerate(&self) -> bool {
        self.0.len() < 2
    }

    pub fn start(&self) -> Option<GeoPoint> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<GeoPoint> {
        self.0.last().copied()
    }
}

impl From<Vec<GeoPoint>> for Trajectory {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }
}

impl From<Vec<[f64; 2]>> for Trajectory {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        Self(pairs.into_iter().map(GeoPoint::from).collect())
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// Project `[start, start + delta]` along `heading` (0 = north, clockwise).
///
/// Returns a single-point trajectory when cos(latitude) vanishes (poles);
/// callers should treat that as "no trajectory".
pub fn project(start: GeoPoint, speed_knots: f64, heading_deg: f64, horizon_minutes: f64) -> Trajectory {
    let distance_km = speed_knots * KNOTS_TO_KM_PER_MIN * horizon_minutes;
    let distance_deg = distance_km / KM_PER_DEGREE;

    let cos_lat = start.lat.to_radians().cos();
    if cos_lat.abs() < COS_LAT_EPSILON {
        log::warn!("Cannot project trajectory from {}: cos(latitude) underflows", start);
        return Trajectory(vec![start]);
    }

    let heading = heading_deg.to_radians();
    let lat_change = distance_deg * heading.cos();
    let lon_change = distance_deg * heading.sin() / cos_lat;

    Trajectory(vec![
        start,
        GeoPoint::new(start.lat + lat_change, start.lon + lon_change),
    ])
}
