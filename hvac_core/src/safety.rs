//! # Design Margins
//!
//! Simple safety margin multipliers. These are obvious, explicit factors,
//! not hidden magic inside the formulas.

use serde::{Deserialize, Serialize};

/// Risk class of the space being sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Tolerant spaces (storage, corridors)
    Low,
    /// Ordinary habitable spaces
    #[default]
    Normal,
    /// Spaces where undersizing is hazardous (hygiene, medical)
    High,
}

impl RiskLevel {
    fn adjustment(self) -> f64 {
        match self {
            RiskLevel::Low => 1.1,
            RiskLevel::Normal => 1.0,
            RiskLevel::High => 1.5,
        }
    }
}

/// Apply a design margin: `value * factor`, further scaled by the risk
/// class adjustment.
pub fn apply_margin(value: f64, factor: f64, risk: RiskLevel) -> f64 {
    value * factor * risk.adjustment()
}
