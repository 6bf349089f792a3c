//! Error taxonomy shared by every layer of the chart engine
//!
//! Three hard failure classes cover the whole crate: rejected inputs,
//! physically impossible pressures, and iterative solvers that ran out of
//! budget. Supersaturation is deliberately NOT here: it is a soft condition
//! reported through [`crate::physics::RelativeHumiditySample::clamped`] and
//! curve truncation bookkeeping, since charts routinely probe the region
//! right at the saturation boundary.

use std::fmt;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, PsychroError>;

/// Errors produced by the psychrometric models and chart generation
#[derive(Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// An input was non-finite or outside its physical range
    OutOfRangeInput {
        /// Which quantity was rejected
        quantity: &'static str,
        /// The offending value
        value: f64,
    },
    /// Total pressure at or below the saturation vapor pressure; the vapor
    /// partial pressure can never reach the total pressure
    InvalidPressure {
        /// Total pressure supplied (Pa)
        pressure_pa: f64,
        /// Saturation vapor pressure it failed against (Pa)
        saturation_pa: f64,
    },
    /// An iterative solver exhausted its iteration cap
    ConvergenceFailure {
        /// Residual at the last iteration
        residual: f64,
        /// Iterations performed before giving up
        iterations: u32,
    },
}

impl fmt::Display for PsychroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PsychroError::OutOfRangeInput { quantity, value } => {
                write!(f, "input out of range: {quantity} = {value}")
            }
            PsychroError::InvalidPressure {
                pressure_pa,
                saturation_pa,
            } => write!(
                f,
                "invalid pressure: {pressure_pa} Pa does not exceed the \
                 saturation vapor pressure of {saturation_pa:.1} Pa"
            ),
            PsychroError::ConvergenceFailure {
                residual,
                iterations,
            } => write!(
                f,
                "solver failed to converge after {iterations} iterations \
                 (last residual {residual:.3e})"
            ),
        }
    }
}

impl std::error::Error for PsychroError {}

/// Reject NaN and infinity up front so they never reach a solver
pub(crate) fn require_finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PsychroError::OutOfRangeInput { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_finite_passes_values_through() {
        assert_eq!(require_finite("temperature", 21.5).unwrap(), 21.5);
        assert_eq!(require_finite("pressure", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_require_finite_rejects_nan_and_infinity() {
        assert!(require_finite("temperature", f64::NAN).is_err());
        assert!(require_finite("temperature", f64::INFINITY).is_err());
        assert!(require_finite("temperature", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display_messages_name_the_quantity() {
        let err = PsychroError::OutOfRangeInput {
            quantity: "relative_humidity",
            value: 1.4,
        };
        assert!(err.to_string().contains("relative_humidity"));

        let err = PsychroError::InvalidPressure {
            pressure_pa: 500.0,
            saturation_pa: 2339.2,
        };
        assert!(err.to_string().contains("500"));
    }
}
