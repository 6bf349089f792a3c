//! Isoline curve generation
//!
//! Samples the chart's temperature domain and solves for the humidity ratio
//! that keeps the requested property constant at each dry-bulb temperature.
//! Enthalpy and specific volume are linear in W at fixed T and solve in
//! closed form; the wet-bulb family inverts the implicit solver; relative
//! humidity is the direct forward relation; moisture quantity is the
//! identity (a horizontal line).
//!
//! Truncation, not failure: samples above the saturation curve, below
//! W = 0, or without a wet-bulb solution are dropped, so a high-value
//! isoline that intersects saturation before `t_max` yields a shorter
//! curve. Only configuration-level errors (invalid pressure, out-of-range
//! target) abort a curve outright.

use tracing::debug;

use crate::core_types::{ChartPoint, Curve, IsolineFamily};
use crate::error::{require_finite, PsychroError, Result};
use crate::physics::{
    humidity_ratio, humidity_ratio_for_wet_bulb, saturation_humidity_ratio, vapor_enthalpy,
    CP_DRY_AIR, R_DRY_AIR,
};

use super::config::ChartConfig;

/// Relative tolerance above the saturation curve before a sample is dropped
const SATURATION_EPSILON: f64 = 1e-9;

/// Generate the saturation curve (the RH = 100% isoline)
///
/// Every other curve on the chart is bounded above by this one.
///
/// # Errors
///
/// [`PsychroError::InvalidPressure`] or [`PsychroError::OutOfRangeInput`]
/// for a configuration the upstream validation should have rejected.
pub fn saturation_curve(cfg: &ChartConfig) -> Result<Curve> {
    generate(cfg, IsolineFamily::RelativeHumidity, 1.0)
}

/// Generate one isoline curve for a (family, value) pair
///
/// # Arguments
/// * `cfg` - Chart domain, pressure, and sampling resolution
/// * `family` - Property held constant along the curve
/// * `value` - Target value in the family's units (RH as a fraction)
///
/// # Errors
///
/// - [`PsychroError::OutOfRangeInput`] for a non-finite target, or an RH
///   target outside [0, 1]
/// - [`PsychroError::InvalidPressure`] when the configured pressure fails
///   inside the domain (upstream validation catches this earlier)
///
/// Sample-local failures (unreachable wet-bulb targets, non-convergence at
/// a single temperature) drop the sample instead of failing the curve.
pub fn generate(cfg: &ChartConfig, family: IsolineFamily, value: f64) -> Result<Curve> {
    let value = require_finite("isoline_value", value)?;
    if family == IsolineFamily::RelativeHumidity && !(0.0..=1.0).contains(&value) {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "relative_humidity",
            value,
        });
    }

    let pressure_pa = cfg.pressure_pa;
    let temps = cfg.sample_temperatures();
    let mut points = Vec::with_capacity(temps.len());
    let mut dropped = 0_usize;

    for t_c in temps {
        let w_sat = saturation_humidity_ratio(t_c, pressure_pa)?;

        let solved = match family {
            IsolineFamily::RelativeHumidity => Some(humidity_ratio(t_c, value, pressure_pa)?),
            IsolineFamily::WetBulb => match humidity_ratio_for_wet_bulb(t_c, value, pressure_pa) {
                Ok(sample) => sample,
                Err(PsychroError::ConvergenceFailure {
                    residual,
                    iterations,
                }) => {
                    // One stubborn sample must not destroy the curve
                    debug!(
                        t_c,
                        residual, iterations, "wet bulb inversion failed, dropping sample"
                    );
                    None
                }
                Err(other) => return Err(other),
            },
            // h = cp·T + W·(hfg + cp_v·T) is linear in W
            IsolineFamily::Enthalpy => Some((value - CP_DRY_AIR * t_c) / vapor_enthalpy(t_c)),
            // v = Rda·Tk·(1 + 1.6078·W)/P is linear in W
            IsolineFamily::SpecificVolume => {
                let t_k = t_c + 273.15;
                Some((value * pressure_pa / (R_DRY_AIR * t_k) - 1.0) / 1.6078)
            }
            // The target already is a humidity ratio
            IsolineFamily::MoistureQuantity => Some(value),
        };

        match solved {
            Some(w) if w >= 0.0 && w <= w_sat * (1.0 + SATURATION_EPSILON) => {
                points.push(ChartPoint::new(t_c, w));
            }
            _ => dropped += 1,
        }
    }

    Ok(Curve::new(family, value, points, dropped))
}
