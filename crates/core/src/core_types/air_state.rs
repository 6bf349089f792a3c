//! Fully resolved psychrometric state of a moist-air sample

use serde::{Deserialize, Serialize};

use crate::error::{PsychroError, Result};
use crate::physics::{energy, humidity, wet_bulb};

use super::units::Celsius;

/// A single psychrometric point with all derived properties
///
/// Input fields are dry-bulb temperature, relative humidity (fraction 0-1)
/// and total pressure; everything else is derived through the physics
/// modules when the state is resolved. Labeled `AirState`s are what chart
/// overlays ("reference points") are made of.
///
/// # Example
/// ```
/// use psychro_chart_core::core_types::{AirState, Celsius};
///
/// let state = AirState::resolve(Celsius::new(25.0), 0.50, 101_325.0).unwrap();
/// assert!(state.humidity_ratio > 0.009 && state.humidity_ratio < 0.011);
/// assert!(*state.wet_bulb < *state.temperature);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirState {
    /// Dry-bulb temperature
    pub temperature: Celsius,
    /// Relative humidity as a fraction (0-1)
    pub relative_humidity: f64,
    /// Total atmospheric pressure (Pa)
    pub pressure_pa: f64,
    /// Humidity ratio (kg vapor / kg dry air)
    pub humidity_ratio: f64,
    /// Wet-bulb temperature from the adiabatic-saturation energy balance
    pub wet_bulb: Celsius,
    /// Dew-point temperature, `None` for perfectly dry air (no vapor means
    /// no temperature at which it condenses)
    pub dew_point: Option<Celsius>,
    /// Moist-air enthalpy (kJ / kg dry air)
    pub enthalpy: f64,
    /// Specific volume (m³ / kg dry air)
    pub specific_volume: f64,
}

impl AirState {
    /// Resolve all derived properties for a (T, RH, P) input
    ///
    /// # Errors
    ///
    /// - [`PsychroError::OutOfRangeInput`] if RH is outside [0, 1] or an
    ///   input is non-finite
    /// - [`PsychroError::InvalidPressure`] if the pressure does not exceed
    ///   the saturation vapor pressure at `temperature`
    /// - [`PsychroError::ConvergenceFailure`] if the wet-bulb solver
    ///   exhausts its iteration cap
    pub fn resolve(temperature: Celsius, relative_humidity: f64, pressure_pa: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&relative_humidity) {
            return Err(PsychroError::OutOfRangeInput {
                quantity: "relative_humidity",
                value: relative_humidity,
            });
        }

        let t_c = *temperature;
        let w = humidity::humidity_ratio(t_c, relative_humidity, pressure_pa)?;
        let twb = wet_bulb::wet_bulb(t_c, relative_humidity, pressure_pa)?;
        let tdp = if relative_humidity > 0.0 {
            Some(Celsius::new(humidity::dew_point(t_c, relative_humidity)?))
        } else {
            None
        };
        let h = energy::enthalpy(t_c, w);
        let v = energy::specific_volume(t_c, w, pressure_pa)?;

        Ok(AirState {
            temperature,
            relative_humidity,
            pressure_pa,
            humidity_ratio: w,
            wet_bulb: Celsius::new(twb),
            dew_point: tdp,
            enthalpy: h,
            specific_volume: v,
        })
    }
}
