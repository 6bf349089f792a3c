//! Classical psychrometric relationships for moist air
//!
//! Implements the thermodynamic models behind chart construction, assuming
//! ideal-gas behavior for dry air and water vapor:
//!
//! - saturation vapor pressure (Magnus-Tetens fit) and saturation humidity
//!   ratio
//! - humidity ratio from (T, RH, P) and its inverse
//! - wet-bulb temperature via the implicit adiabatic-saturation energy
//!   balance (bounded bisection, no closed form exists)
//! - moist-air enthalpy, specific volume, and density
//!
//! All functions are pure and stateless: independent curve computations may
//! run in parallel without synchronization. Temperatures are °C, pressures
//! Pa, humidity ratios kg vapor / kg dry air, enthalpies kJ / kg dry air.
//!
//! The formulations target diagram construction and comparative analysis
//! (validated to ~3% against reference tables), not HVAC-design precision.
//!
//! # Scientific References
//!
//! - ASHRAE Handbook - Fundamentals (2017), Ch. 1 "Psychrometrics"
//! - Alduchov, O.A., Eskridge, R.E. (1996). "Improved Magnus form
//!   approximation of saturation vapor pressure." J. Appl. Meteor., 35(4)
//! - Stull, R. (2011). "Wet-bulb temperature from relative humidity and air
//!   temperature." J. Appl. Meteor. Climatol., 50(11) (context for the
//!   implicit formulation solved here)

pub mod energy;
pub mod humidity;
pub mod saturation;
pub mod wet_bulb;

pub use energy::{density, enthalpy, specific_humidity, specific_volume, vapor_enthalpy};
pub use humidity::{dew_point, humidity_ratio, relative_humidity, RelativeHumiditySample};
pub use saturation::{saturation_humidity_ratio, saturation_vapor_pressure};
pub use wet_bulb::{humidity_ratio_for_wet_bulb, wet_bulb};

/// Specific heat of dry air at constant pressure (kJ kg⁻¹ °C⁻¹)
pub const CP_DRY_AIR: f64 = 1.006;

/// Specific heat of water vapor at constant pressure (kJ kg⁻¹ °C⁻¹)
pub const CP_WATER_VAPOR: f64 = 1.86;

/// Specific heat of liquid water (kJ kg⁻¹ °C⁻¹), used in the wet-bulb
/// energy balance for the condensed-phase term
pub const CP_LIQUID_WATER: f64 = 4.186;

/// Latent heat of vaporization of water at 0°C (kJ kg⁻¹)
pub const LATENT_HEAT_VAPORIZATION: f64 = 2501.0;

/// Gas constant for dry air (J kg⁻¹ K⁻¹)
pub const R_DRY_AIR: f64 = 287.055;

/// Molecular-weight ratio of water vapor to dry air (18.015 / 28.965)
pub const VAPOR_MASS_RATIO: f64 = 0.622;
