//! Geo Module
//!
//! Static geography used by risk scoring and alerting.
//!
//! ## Structure
//! - `types`: GeoPoint, GeoZone, MaritimeBoundary
//! - `zones`: default piracy zones and boundary
//! - `boundary`: trajectory vs. boundary intersection checker

pub mod types;
pub mod zones;
pub mod boundary;

pub use types::{GeoPoint, GeoZone, MaritimeBoundary};
pub use zones::{default_boundary, default_piracy_zones};
pub use boundary::crosses;
