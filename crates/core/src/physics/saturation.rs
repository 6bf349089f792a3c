//! Saturation vapor pressure and saturation humidity ratio
//!
//! Uses the Magnus-Tetens approximation over liquid water, valid across the
//! temperature range psychrometric charts cover (roughly -20°C to 60°C).
//! Every other humidity quantity in the crate is derived from this fit, so
//! its ~3% accuracy against reference tables bounds the whole engine.
//!
//! # Scientific References
//!
//! - Alduchov, O.A., Eskridge, R.E. (1996). "Improved Magnus form
//!   approximation of saturation vapor pressure." J. Appl. Meteor., 35(4),
//!   601-609 (coefficients 610.94 / 17.625 / 243.04)

use crate::error::{require_finite, PsychroError, Result};

use super::VAPOR_MASS_RATIO;

/// Magnus-Tetens coefficient: saturation pressure at 0°C (Pa)
const MAGNUS_P0: f64 = 610.94;
/// Magnus-Tetens exponent numerator coefficient (dimensionless)
const MAGNUS_A: f64 = 17.625;
/// Magnus-Tetens exponent denominator offset (°C)
const MAGNUS_B: f64 = 243.04;

/// Saturation vapor pressure of water over liquid (Pa)
///
/// `Pws(T) = 610.94 · exp(17.625·T / (T + 243.04))`
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
#[inline]
#[must_use]
pub fn saturation_vapor_pressure(t_c: f64) -> f64 {
    MAGNUS_P0 * ((MAGNUS_A * t_c) / (t_c + MAGNUS_B)).exp()
}

/// Analytic derivative `dPws/dT` (Pa / °C)
///
/// Used by the Newton iteration that inverts the Magnus fit for the
/// dew-point temperature.
#[inline]
#[must_use]
pub(crate) fn saturation_vapor_pressure_derivative(t_c: f64) -> f64 {
    let denom = t_c + MAGNUS_B;
    saturation_vapor_pressure(t_c) * MAGNUS_A * MAGNUS_B / (denom * denom)
}

/// Saturation humidity ratio (kg vapor / kg dry air)
///
/// `Ws(T, P) = 0.622 · Pws / (P - Pws)`
///
/// This is the upper bound for the humidity ratio at a given temperature:
/// the RH = 100% saturation curve of the chart.
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `pressure_pa` - Total pressure (Pa)
///
/// # Errors
///
/// - [`PsychroError::OutOfRangeInput`] for non-finite inputs
/// - [`PsychroError::InvalidPressure`] when the total pressure does not
///   exceed the saturation vapor pressure (the vapor partial pressure can
///   never reach the total pressure)
pub fn saturation_humidity_ratio(t_c: f64, pressure_pa: f64) -> Result<f64> {
    let t_c = require_finite("temperature", t_c)?;
    let pressure_pa = require_finite("pressure", pressure_pa)?;

    let p_ws = saturation_vapor_pressure(t_c);
    if pressure_pa <= p_ws {
        return Err(PsychroError::InvalidPressure {
            pressure_pa,
            saturation_pa: p_ws,
        });
    }

    Ok(VAPOR_MASS_RATIO * p_ws / (pressure_pa - p_ws))
}
