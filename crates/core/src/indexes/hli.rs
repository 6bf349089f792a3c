//! Heat load index (HLI)
//!
//! Linearized form of the Gaughan feedlot heat-load index. Unlike the
//! temperature-humidity index it accounts for wind (convective relief)
//! and solar radiation (radiant load), which makes it the better
//! screening tool for unshaded outdoor livestock.
//!
//! # Scientific References
//!
//! - Gaughan, J. B. et al. (2008). "A new heat load index for feedlot
//!   cattle". Journal of Animal Science, 86(1)

use crate::error::{require_finite, PsychroError, Result};

/// Heat load index from temperature, RH, wind speed, and solar radiation
///
/// `HLI = 8.62 + 0.38·RH% + 1.55·T - 0.5·WS + 0.02·SR`
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `relative_humidity` - Relative humidity as a fraction (0-1)
/// * `wind_m_s` - Wind speed (m/s), non-negative
/// * `solar_w_m2` - Incident solar radiation (W/m²), non-negative
///
/// # Errors
///
/// [`PsychroError::OutOfRangeInput`] for non-finite input, an RH outside
/// [0, 1], or negative wind speed or solar radiation.
pub fn heat_load_index(
    t_c: f64,
    relative_humidity: f64,
    wind_m_s: f64,
    solar_w_m2: f64,
) -> Result<f64> {
    let t_c = require_finite("temperature", t_c)?;
    let wind_m_s = require_finite("wind_speed", wind_m_s)?;
    let solar_w_m2 = require_finite("solar_radiation", solar_w_m2)?;

    if !(0.0..=1.0).contains(&relative_humidity) {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "relative_humidity",
            value: relative_humidity,
        });
    }
    if wind_m_s < 0.0 {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "wind_speed",
            value: wind_m_s,
        });
    }
    if solar_w_m2 < 0.0 {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "solar_radiation",
            value: solar_w_m2,
        });
    }

    let rh_percent = relative_humidity * 100.0;
    Ok(8.62 + 0.38 * rh_percent + 1.55 * t_c - 0.5 * wind_m_s + 0.02 * solar_w_m2)
}
