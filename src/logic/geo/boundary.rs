//! Boundary Intersection Checker
//!
//! Planar segment-vs-segment intersection on raw (lat, lon) vertices.
//! Exact arithmetic, no tolerance or buffer. The boundary is always closed
//! for checking purposes, whatever way it is drawn.

use super::types::{GeoPoint, MaritimeBoundary};
use crate::logic::error::GeometryError;

/// Does the trajectory line string intersect any boundary segment?
///
/// Degenerate or non-finite input is an error; callers recover by treating
/// it as "no crossing" and surfacing a warning.
pub fn crosses(trajectory: &[GeoPoint], boundary: &MaritimeBoundary) -> Result<bool, GeometryError> {
    if trajectory.len() < 2 {
        return Err(GeometryError::DegenerateTrajectory { points: trajectory.len() });
    }
    if boundary.vertices.len() < 2 {
        return Err(GeometryError::DegenerateBoundary { vertices: boundary.vertices.len() });
    }
    if !trajectory.iter().chain(boundary.vertices.iter()).all(GeoPoint::is_finite) {
        return Err(GeometryError::NonFiniteCoordinate);
    }

    let hit = trajectory.windows(2).any(|leg| {
        boundary
            .segments()
            .any(|(b1, b2)| segments_intersect(leg[0], leg[1], b1, b2))
    });

    Ok(hit)
}

// ============================================================================
// SEGMENT INTERSECTION
// ============================================================================

/// Signed area of (a, b, c): > 0 counter-clockwise, < 0 clockwise, 0 collinear
fn orientation(a: GeoPoint, b: GeoPoint, c: GeoPoint) -> f64 {
    (b.lat - a.lat) * (c.lon - a.lon) - (b.lon - a.lon) * (c.lat - a.lat)
}

/// `p` lies within the bounding box of `a`-`b` (caller ensures collinearity)
fn on_segment(a: GeoPoint, b: GeoPoint, p: GeoPoint) -> bool {
    a.lat.min(b.lat) <= p.lat
        && p.lat <= a.lat.max(b.lat)
        && a.lon.min(b.lon) <= p.lon
        && p.lon <= a.lon.max(b.lon)
}

/// Closed-segment intersection, touching and collinear overlap included.
/// Zero-length segments behave as points.
pub fn segments_intersect(p1: GeoPoint, p2: GeoPoint, q1: GeoPoint, q2: GeoPoint) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}
