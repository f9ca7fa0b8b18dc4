//! Risk Module
//!
//! Composite 0..=100 score from speed, piracy-zone membership and the
//! anomaly flag.
//!
//! ## Usage
//! ```ignore
//! use crate::logic::risk::{assess, RiskRules};
//!
//! let assessment = assess(&vessel, &zones);
//! println!("{} -> {}", vessel.id, assessment.score);
//! ```

pub mod rules;
pub mod types;
pub mod scorer;

pub use rules::{RiskRules, HIGH_SPEED_THRESHOLD, MAX_RISK_SCORE};
pub use types::{RiskAssessment, ScoreBreakdown};
pub use scorer::{annotate, assess, assess_with_rules, risk_score};
