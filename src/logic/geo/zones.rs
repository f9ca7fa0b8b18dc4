//! Default Zones & Boundary
//!
//! Static configuration: three piracy zones and the Indian 200-NM
//! maritime boundary. Zone order is the alert priority order.

use super::types::{GeoPoint, GeoZone, MaritimeBoundary};

// ============================================================================
// PIRACY ZONES
// ============================================================================

pub const GULF_OF_ADEN: &str = "Gulf of Aden";
pub const ARABIAN_SEA: &str = "Arabian Sea";
pub const MALACCA_STRAIT: &str = "Malacca Strait";

/// Piracy zones in alert priority order: Gulf of Aden, Arabian Sea, Malacca Strait
pub fn default_piracy_zones() -> Vec<GeoZone> {
    vec![
        GeoZone::new(GULF_OF_ADEN, (10.0, 15.0), (43.0, 53.0)),
        GeoZone::new(ARABIAN_SEA, (0.0, 5.0), (65.0, 70.0))
            .with_alert_region("Arabian Sea near Horn of Africa"),
        GeoZone::new(MALACCA_STRAIT, (0.0, 5.0), (97.0, 102.0)),
    ]
}

// ============================================================================
// MARITIME BOUNDARY
// ============================================================================

pub const BOUNDARY_NAME: &str = "India 200-NM Maritime Boundary";

/// Raw boundary vertices as (lat, lon)
pub const BOUNDARY_VERTICES: [[f64; 2]; 8] = [
    [23.5, 64.5],
    [15.0, 64.5],
    [5.0, 69.5],
    [4.0, 76.0],
    [4.0, 84.0],
    [6.0, 87.5],
    [15.0, 93.0],
    [23.5, 90.0],
];

pub fn default_boundary() -> MaritimeBoundary {
    MaritimeBoundary::new(
        BOUNDARY_NAME,
        BOUNDARY_VERTICES.iter().copied().map(GeoPoint::from).collect(),
    )
    .with_alert_label("Indian maritime boundary")
}
