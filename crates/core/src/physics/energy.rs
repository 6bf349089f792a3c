//! Moist-air enthalpy, specific volume, and density
//!
//! Standard decomposition of the heat content per kilogram of dry air plus
//! the ideal-gas specific volume of the mixture.
//!
//! # Scientific References
//!
//! - ASHRAE Handbook - Fundamentals (2017), Ch. 1, Eqs. (30), (28)

use crate::error::{require_finite, PsychroError, Result};

use super::saturation::saturation_vapor_pressure;
use super::{CP_DRY_AIR, CP_WATER_VAPOR, LATENT_HEAT_VAPORIZATION, R_DRY_AIR};

/// Celsius-to-Kelvin offset, local to the ideal-gas relation
const KELVIN_OFFSET: f64 = 273.15;

/// Specific enthalpy of moist air (kJ / kg dry air)
///
/// `h = cp·T + W·(hfg + cp_v·T)`
///
/// Sensible heat of the dry air plus latent and sensible heat of the vapor
/// it carries. Pure function; the zero reference is dry air at 0°C.
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `humidity_ratio` - Humidity ratio (kg vapor / kg dry air)
#[inline]
#[must_use]
pub fn enthalpy(t_c: f64, humidity_ratio: f64) -> f64 {
    CP_DRY_AIR * t_c + humidity_ratio * (LATENT_HEAT_VAPORIZATION + CP_WATER_VAPOR * t_c)
}

/// Specific enthalpy of water vapor (kJ / kg)
///
/// `h_v = hfg + cp_v·T`
#[inline]
#[must_use]
pub fn vapor_enthalpy(t_c: f64) -> f64 {
    LATENT_HEAT_VAPORIZATION + CP_WATER_VAPOR * t_c
}

/// Specific humidity (kg vapor / kg moist air)
///
/// `q = W / (1 + W)` - the vapor fraction of the total mixture mass, as
/// opposed to the humidity ratio which is referenced to dry air alone.
#[inline]
#[must_use]
pub fn specific_humidity(humidity_ratio: f64) -> f64 {
    humidity_ratio / (1.0 + humidity_ratio)
}

/// Specific volume of moist air (m³ / kg dry air)
///
/// `v = Rda·(T + 273.15)·(1 + 1.6078·W) / P`
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `humidity_ratio` - Humidity ratio (kg vapor / kg dry air)
/// * `pressure_pa` - Total pressure (Pa)
///
/// # Errors
///
/// - [`PsychroError::OutOfRangeInput`] for non-finite inputs or a
///   temperature below absolute zero
/// - [`PsychroError::InvalidPressure`] for a non-positive pressure
pub fn specific_volume(t_c: f64, humidity_ratio: f64, pressure_pa: f64) -> Result<f64> {
    let t_c = require_finite("temperature", t_c)?;
    let humidity_ratio = require_finite("humidity_ratio", humidity_ratio)?;
    let pressure_pa = require_finite("pressure", pressure_pa)?;

    if t_c <= -KELVIN_OFFSET {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "temperature",
            value: t_c,
        });
    }
    if pressure_pa <= 0.0 {
        return Err(PsychroError::InvalidPressure {
            pressure_pa,
            saturation_pa: saturation_vapor_pressure(t_c),
        });
    }

    let t_k = t_c + KELVIN_OFFSET;
    Ok(R_DRY_AIR * t_k * (1.0 + 1.6078 * humidity_ratio) / pressure_pa)
}

/// Density of moist air (kg / m³), the reciprocal of the specific volume
///
/// # Errors
///
/// Same conditions as [`specific_volume`].
pub fn density(t_c: f64, humidity_ratio: f64, pressure_pa: f64) -> Result<f64> {
    Ok(1.0 / specific_volume(t_c, humidity_ratio, pressure_pa)?)
}
