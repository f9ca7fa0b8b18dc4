//! Geo Types
//!
//! Points, rectangular zones and boundary polylines.
//! No intersection logic here - see `boundary`.

use serde::{Deserialize, Serialize};

// ============================================================================
// GEO POINT
// ============================================================================

/// (latitude, longitude) in degrees.
///
/// Serialized as a `[lat, lon]` pair so stored trajectories stay plain JSON
/// arrays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Within [-90,90] x [-180,180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(p: GeoPoint) -> Self {
        [p.lat, p.lon]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

// ============================================================================
// GEO ZONE
// ============================================================================

/// Named lat/lon rectangle. Membership is inclusive on every edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoZone {
    /// Short name, e.g. "Gulf of Aden"
    pub name: String,
    /// Region wording used in alert messages; empty falls back to `name`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alert_region: String,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoZone {
    pub fn new(name: &str, lat: (f64, f64), lon: (f64, f64)) -> Self {
        Self {
            name: name.to_string(),
            alert_region: name.to_string(),
            lat_min: lat.0,
            lat_max: lat.1,
            lon_min: lon.0,
            lon_max: lon.1,
        }
    }

    pub fn with_alert_region(mut self, region: &str) -> Self {
        self.alert_region = region.to_string();
        self
    }

    pub fn alert_region(&self) -> &str {
        if self.alert_region.is_empty() {
            &self.name
        } else {
            &self.alert_region
        }
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        self.lat_min <= point.lat
            && point.lat <= self.lat_max
            && self.lon_min <= point.lon
            && point.lon <= self.lon_max
    }
}

// ============================================================================
// MARITIME BOUNDARY
// ============================================================================

/// Ordered vertex list of a maritime limit line.
///
/// Drawn open, but checked as closed (last vertex wraps to the first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaritimeBoundary {
    pub name: String,
    /// Wording used in boundary alert messages; empty falls back to `name`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alert_label: String,
    pub vertices: Vec<GeoPoint>,
}

impl MaritimeBoundary {
    pub fn new(name: &str, vertices: Vec<GeoPoint>) -> Self {
        Self {
            name: name.to_string(),
            alert_label: name.to_string(),
            vertices,
        }
    }

    pub fn with_alert_label(mut self, label: &str) -> Self {
        self.alert_label = label.to_string();
        self
    }

    pub fn alert_label(&self) -> &str {
        if self.alert_label.is_empty() {
            &self.name
        } else {
            &self.alert_label
        }
    }

    /// Segments formed by consecutive vertices, wrapping last -> first
    pub fn segments(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_edges_inclusive() {
        let zone = GeoZone::new("Gulf of Aden", (10.0, 15.0), (43.0, 53.0));
        assert!(zone.contains(GeoPoint::new(10.0, 43.0)));
        assert!(zone.contains(GeoPoint::new(15.0, 53.0)));
        assert!(!zone.contains(GeoPoint::new(9.999, 43.0)));
        assert!(!zone.contains(GeoPoint::new(12.0, 53.01)));
    }

    #[test]
    fn test_alert_wording_falls_back_to_name() {
        let zone: GeoZone = serde_json::from_str(
            r#"{ "name": "Gulf of Aden", "lat_min": 10.0, "lat_max": 15.0, "lon_min": 43.0, "lon_max": 53.0 }"#,
        )
        .unwrap();
        assert_eq!(zone.alert_region(), "Gulf of Aden");

        let zone = zone.with_alert_region("Gulf of Aden corridor");
        assert_eq!(zone.alert_region(), "Gulf of Aden corridor");

        let mut boundary = MaritimeBoundary::new("EEZ", vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        boundary.alert_label.clear();
        assert_eq!(boundary.alert_label(), "EEZ");
    }

    #[test]
    fn test_segments_wrap_around() {
        let boundary = MaritimeBoundary::new(
            "triangle",
            vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0), GeoPoint::new(0.0, 1.0)],
        );
        let segments: Vec<_> = boundary.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], (GeoPoint::new(0.0, 1.0), GeoPoint::new(0.0, 0.0)));
    }

    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&GeoPoint::new(2.0, 68.5)).unwrap();
        assert_eq!(json, "[2.0,68.5]");
        let back: GeoPoint = serde_json::from_str("[12.5, 48.0]").unwrap();
        assert_eq!(back, GeoPoint::new(12.5, 48.0));
    }
}
