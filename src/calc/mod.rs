use thiserror::Error;

pub mod impact;
pub mod metrics;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid confusion matrix: {0}")]
    InvalidMatrixShape(String),
    #[error("invalid business parameter {name}={value}: {reason}")]
    InvalidBusinessParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("{name} overflowed to {value}; inputs are too large to evaluate")]
    NonFiniteResult { name: &'static str, value: f64 },
}

/// `num / denom * 100`, or 0 when the denominator is empty.
pub fn percent(num: u64, denom: u64) -> f64 {
    if denom == 0 {
        return 0.0;
    }
    num as f64 / denom as f64 * 100.0
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn require_finite(name: &'static str, value: f64) -> Result<(), CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidBusinessParameter {
            name,
            value,
            reason: "must be a finite number",
        });
    }
    Ok(())
}

pub fn require_positive(name: &'static str, value: f64) -> Result<(), CalcError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(CalcError::InvalidBusinessParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

/// Passes `value` through if finite; overflowed arithmetic is rejected.
pub fn check_result(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFiniteResult { name, value });
    }
    Ok(value)
}
