//! Vessel Module
//!
//! - `types`: VesselState + registration validation
//! - `kinematics`: per-tick position update (host side)
//! - `seed`: seeded demo fleet

pub mod types;
pub mod kinematics;
pub mod seed;

pub use types::VesselState;
pub use kinematics::{advance, advance_all};
pub use seed::seed_fleet;
