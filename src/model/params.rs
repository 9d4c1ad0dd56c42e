use serde::{Deserialize, Serialize};

use crate::calc::{CalcError, require_finite, require_positive};

/// Business inputs for the financial impact view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessParameters {
    pub avg_value: f64,
    /// Fraction, e.g. 0.29 for 29%. Not clamped.
    pub interest_rate: f64,
    pub project_cost: Option<f64>,
}

impl BusinessParameters {
    pub const DEFAULT_AVG_VALUE: f64 = 1000.0;
    pub const DEFAULT_INTEREST_RATE: f64 = 0.29;

    pub fn default_v1() -> Self {
        Self {
            avg_value: Self::DEFAULT_AVG_VALUE,
            interest_rate: Self::DEFAULT_INTEREST_RATE,
            project_cost: None,
        }
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        require_positive("avg_value", self.avg_value)?;
        require_finite("interest_rate", self.interest_rate)?;
        if let Some(cost) = self.project_cost {
            require_positive("project_cost", cost)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/params.rs"]
mod tests;
