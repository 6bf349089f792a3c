//! Humidity ratio, relative humidity, and dew-point temperature
//!
//! Forward direction: humidity ratio from (T, RH, P) via the vapor partial
//! pressure. Inverse direction: relative humidity from (T, W, P), where a
//! supersaturated input clamps to the saturation curve with a recorded flag
//! instead of failing - curve generation near saturation must stay bounded.
//! The dew point inverts the Magnus fit with a Newton iteration.

use tracing::trace;

use crate::error::{require_finite, PsychroError, Result};

use super::saturation::{
    saturation_vapor_pressure, saturation_vapor_pressure_derivative,
};
use super::VAPOR_MASS_RATIO;

/// Iteration cap for the dew-point Newton solver
const DEW_POINT_MAX_ITERATIONS: u32 = 100;
/// Convergence tolerance for the dew-point iteration (°C)
const DEW_POINT_TOLERANCE_C: f64 = 0.01;
/// Newton iterates are clamped above the Magnus singularity at -243.04°C
const DEW_POINT_FLOOR_C: f64 = -240.0;

/// Result of the inverse humidity-ratio relation
///
/// `clamped` records that the requested humidity ratio exceeded saturation
/// and the value was pinned to RH = 1 (supersaturation is a soft condition,
/// not an error).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeHumiditySample {
    /// Relative humidity as a fraction (0-1)
    pub value: f64,
    /// True when the input humidity ratio was above saturation
    pub clamped: bool,
}

/// Humidity ratio (mixing ratio) of moist air (kg vapor / kg dry air)
///
/// `Pw = RH · Pws(T)`, then `W = 0.622 · Pw / (P - Pw)`.
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `relative_humidity` - Relative humidity as a fraction (0-1)
/// * `pressure_pa` - Total pressure (Pa)
///
/// # Errors
///
/// - [`PsychroError::OutOfRangeInput`] if RH is outside [0, 1] or an input
///   is non-finite
/// - [`PsychroError::InvalidPressure`] if the total pressure does not
///   exceed the saturation vapor pressure at `t_c`
pub fn humidity_ratio(t_c: f64, relative_humidity: f64, pressure_pa: f64) -> Result<f64> {
    let t_c = require_finite("temperature", t_c)?;
    let pressure_pa = require_finite("pressure", pressure_pa)?;
    if !(0.0..=1.0).contains(&relative_humidity) {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "relative_humidity",
            value: relative_humidity,
        });
    }

    let p_ws = saturation_vapor_pressure(t_c);
    if pressure_pa <= p_ws {
        return Err(PsychroError::InvalidPressure {
            pressure_pa,
            saturation_pa: p_ws,
        });
    }

    let p_w = relative_humidity * p_ws;
    Ok(VAPOR_MASS_RATIO * p_w / (pressure_pa - p_w))
}

/// Relative humidity from humidity ratio (inverse relation)
///
/// Recovers the vapor partial pressure `Pw = W·P / (0.622 + W)` and divides
/// by `Pws(T)`. A humidity ratio at or above saturation yields RH = 1 with
/// the `clamped` flag set.
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `humidity_ratio` - Humidity ratio (kg vapor / kg dry air)
/// * `pressure_pa` - Total pressure (Pa)
///
/// # Errors
///
/// - [`PsychroError::OutOfRangeInput`] for a negative humidity ratio or
///   non-finite inputs
/// - [`PsychroError::InvalidPressure`] if the total pressure does not
///   exceed the saturation vapor pressure at `t_c`
pub fn relative_humidity(
    t_c: f64,
    humidity_ratio: f64,
    pressure_pa: f64,
) -> Result<RelativeHumiditySample> {
    let t_c = require_finite("temperature", t_c)?;
    let pressure_pa = require_finite("pressure", pressure_pa)?;
    if !humidity_ratio.is_finite() || humidity_ratio < 0.0 {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "humidity_ratio",
            value: humidity_ratio,
        });
    }

    let p_ws = saturation_vapor_pressure(t_c);
    if pressure_pa <= p_ws {
        return Err(PsychroError::InvalidPressure {
            pressure_pa,
            saturation_pa: p_ws,
        });
    }

    let p_w = humidity_ratio * pressure_pa / (VAPOR_MASS_RATIO + humidity_ratio);
    let rh = p_w / p_ws;

    if rh > 1.0 {
        Ok(RelativeHumiditySample {
            value: 1.0,
            clamped: true,
        })
    } else {
        Ok(RelativeHumiditySample {
            value: rh,
            clamped: false,
        })
    }
}

/// Dew-point temperature (°C) from dry-bulb temperature and RH
///
/// Solves `Pws(Tdp) = RH · Pws(T)` with a Newton iteration starting from
/// the dry bulb, using the analytic Magnus derivative. The dew point is
/// also the lower bracket of the wet-bulb solver.
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `relative_humidity` - Relative humidity as a fraction, must be in (0, 1]
///
/// # Errors
///
/// - [`PsychroError::OutOfRangeInput`] if RH is outside (0, 1] (the dew
///   point is undefined for perfectly dry air) or inputs are non-finite
/// - [`PsychroError::ConvergenceFailure`] if the Newton iteration exhausts
///   its cap (pathological inputs far outside the Magnus validity range)
pub fn dew_point(t_c: f64, relative_humidity: f64) -> Result<f64> {
    let t_c = require_finite("temperature", t_c)?;
    if relative_humidity <= 0.0 || relative_humidity > 1.0 {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "relative_humidity",
            value: relative_humidity,
        });
    }

    // Target vapor pressure
    let p_w = relative_humidity * saturation_vapor_pressure(t_c);

    let mut t_dp = t_c;
    let mut residual = f64::MAX;
    for iteration in 0..DEW_POINT_MAX_ITERATIONS {
        residual = saturation_vapor_pressure(t_dp) - p_w;
        let slope = saturation_vapor_pressure_derivative(t_dp);
        let t_next = (t_dp - residual / slope).max(DEW_POINT_FLOOR_C);

        if (t_next - t_dp).abs() < DEW_POINT_TOLERANCE_C {
            trace!(iteration, t_dp = t_next, "dew point converged");
            return Ok(t_next);
        }
        t_dp = t_next;
    }

    Err(PsychroError::ConvergenceFailure {
        residual,
        iterations: DEW_POINT_MAX_ITERATIONS,
    })
}
