use crate::units::Real;
use thiserror::Error;

/// Rejected simulation input. Always names the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: Real },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: Real },

    // duration / timestep, reported as float since it may not fit any integer
    #[error("duration / timestep yields {steps} steps, at most {max} are supported")]
    TooManySteps { steps: Real, max: Real },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub(super) fn ensure_finite(field: &'static str, value: Real) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

pub(super) fn ensure_positive(field: &'static str, value: Real) -> Result<()> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
