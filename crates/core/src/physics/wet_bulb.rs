//! Wet-bulb temperature via the adiabatic-saturation energy balance
//!
//! The wet-bulb temperature has no closed form from (T, RH, P): it is the
//! temperature at which evaporative cooling balances sensible heat exchange,
//!
//! `h(T, W) = h_sat(Twb) + (W - Ws(Twb)) · cp_w · Twb`
//!
//! solved here by bisection over `[Tdp, T]` with a fixed residual tolerance
//! and a hard iteration cap. The loop is explicit and bounded: a pathological
//! input surfaces as `ConvergenceFailure` with the last residual, never as a
//! stale estimate or unbounded work.
//!
//! The inverse direction (humidity ratio that produces a target wet-bulb
//! temperature at a fixed dry bulb) drives the `wet_bulb` isoline family and
//! reuses the same bounded solver with RH as the unknown.
//!
//! # Scientific References
//!
//! - ASHRAE Handbook - Fundamentals (2017), Ch. 1, Eq. (33)
//!   (adiabatic-saturation / thermodynamic wet-bulb relation)

use tracing::trace;

use crate::error::{require_finite, PsychroError, Result};

use super::energy::enthalpy;
use super::humidity::{dew_point, humidity_ratio};
use super::saturation::saturation_humidity_ratio;
use super::CP_LIQUID_WATER;

/// Hard iteration cap for both bisection loops
const MAX_ITERATIONS: u32 = 100;
/// Residual tolerance on the energy imbalance (kJ / kg dry air)
const ENERGY_TOLERANCE: f64 = 1e-4;
/// Tolerance on the wet-bulb match in the inverse direction (°C).
/// Kept an order of magnitude looser than the forward solver's effective
/// temperature resolution so the outer bisection sees a clean signal.
const INVERSE_TOLERANCE_C: f64 = 1e-3;
/// Lower bracket for perfectly dry air, where the dew point diverges.
/// The wet-bulb depression never approaches 60°C inside the Magnus
/// validity range, so this bound always brackets the root.
const DRY_AIR_BRACKET_MARGIN_C: f64 = 60.0;

/// Energy imbalance of the adiabatic-saturation equation at a trial `twb`
///
/// Positive when the trial wet bulb is too warm, negative when too cold;
/// the root is the thermodynamic wet-bulb temperature.
fn energy_residual(twb_c: f64, t_c: f64, w: f64, pressure_pa: f64) -> Result<f64> {
    let ws_twb = saturation_humidity_ratio(twb_c, pressure_pa)?;
    let h_sat = enthalpy(twb_c, ws_twb);
    Ok(h_sat + (w - ws_twb) * CP_LIQUID_WATER * twb_c - enthalpy(t_c, w))
}

/// Wet-bulb temperature (°C) from dry-bulb temperature, RH, and pressure
///
/// Bounded bisection of the implicit energy balance over `[Tdp, T]`. For
/// saturated air the wet bulb equals the dry bulb and is returned directly.
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `relative_humidity` - Relative humidity as a fraction (0-1)
/// * `pressure_pa` - Total pressure (Pa)
///
/// # Errors
///
/// - [`PsychroError::OutOfRangeInput`] if RH is outside [0, 1] or inputs
///   are non-finite
/// - [`PsychroError::InvalidPressure`] if the pressure does not exceed the
///   saturation vapor pressure
/// - [`PsychroError::ConvergenceFailure`] if the residual never drops below
///   tolerance within the iteration cap
pub fn wet_bulb(t_c: f64, relative_humidity: f64, pressure_pa: f64) -> Result<f64> {
    let t_c = require_finite("temperature", t_c)?;
    let pressure_pa = require_finite("pressure", pressure_pa)?;
    if !(0.0..=1.0).contains(&relative_humidity) {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "relative_humidity",
            value: relative_humidity,
        });
    }

    // Saturated air: no evaporation potential, Twb = T by definition.
    if relative_humidity >= 1.0 {
        // Still validate the pressure against this temperature
        saturation_humidity_ratio(t_c, pressure_pa)?;
        return Ok(t_c);
    }

    let w = humidity_ratio(t_c, relative_humidity, pressure_pa)?;

    let mut lo = if relative_humidity > 0.0 {
        dew_point(t_c, relative_humidity)?
    } else {
        t_c - DRY_AIR_BRACKET_MARGIN_C
    };
    let mut hi = t_c;

    let residual_lo = energy_residual(lo, t_c, w, pressure_pa)?;
    if residual_lo >= 0.0 {
        // Bracket failed to straddle the root; only reachable far outside
        // the Magnus validity range.
        return Err(PsychroError::ConvergenceFailure {
            residual: residual_lo,
            iterations: 0,
        });
    }

    let mut residual = residual_lo;
    for iteration in 0..MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        residual = energy_residual(mid, t_c, w, pressure_pa)?;

        if residual.abs() < ENERGY_TOLERANCE {
            trace!(iteration, twb = mid, residual, "wet bulb converged");
            return Ok(mid);
        }
        if residual < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(PsychroError::ConvergenceFailure {
        residual,
        iterations: MAX_ITERATIONS,
    })
}

/// Humidity ratio on a constant wet-bulb isoline at a fixed dry bulb
///
/// Solves `wet_bulb(T, RH, P) == twb_target` for RH by bisection over
/// [0, 1], then converts the matched RH to a humidity ratio. Returns
/// `Ok(None)` when no RH in [0, 1] reaches the target - either the target
/// wet bulb exceeds the dry bulb, or it lies below the wet bulb of fully
/// dry air - so the isoline generator drops the sample instead of padding.
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `twb_target_c` - Target wet-bulb temperature (°C)
/// * `pressure_pa` - Total pressure (Pa)
///
/// # Errors
///
/// Propagates the forward solver's errors; notably
/// [`PsychroError::ConvergenceFailure`] when an inner wet-bulb evaluation
/// or the outer RH bisection exhausts its cap.
pub fn humidity_ratio_for_wet_bulb(
    t_c: f64,
    twb_target_c: f64,
    pressure_pa: f64,
) -> Result<Option<f64>> {
    let t_c = require_finite("temperature", t_c)?;
    let twb_target_c = require_finite("wet_bulb", twb_target_c)?;

    // The wet bulb can never exceed the dry bulb
    if twb_target_c > t_c {
        return Ok(None);
    }
    if (twb_target_c - t_c).abs() < INVERSE_TOLERANCE_C {
        // Target coincides with the dry bulb: the saturation point
        return Ok(Some(saturation_humidity_ratio(t_c, pressure_pa)?));
    }

    // The wet bulb of fully dry air is the floor reachable at this dry bulb
    if wet_bulb(t_c, 0.0, pressure_pa)? > twb_target_c {
        return Ok(None);
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let mut mismatch = f64::MAX;
    for iteration in 0..MAX_ITERATIONS {
        let rh = 0.5 * (lo + hi);
        mismatch = wet_bulb(t_c, rh, pressure_pa)? - twb_target_c;

        if mismatch.abs() < INVERSE_TOLERANCE_C {
            trace!(iteration, rh, "wet bulb inversion converged");
            return Ok(Some(humidity_ratio(t_c, rh, pressure_pa)?));
        }
        // Wet bulb increases monotonically with RH at fixed T
        if mismatch < 0.0 {
            lo = rh;
        } else {
            hi = rh;
        }
    }

    Err(PsychroError::ConvergenceFailure {
        residual: mismatch,
        iterations: MAX_ITERATIONS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEA_LEVEL_PA: f64 = 101_325.0;

    #[test]
    fn test_wet_bulb_below_dry_bulb() {
        for &rh in &[0.0, 0.2, 0.5, 0.8, 0.99] {
            let twb = wet_bulb(30.0, rh, SEA_LEVEL_PA).unwrap();
            assert!(twb < 30.0, "Twb {twb} must stay below dry bulb at RH {rh}");
        }
    }

    #[test]
    fn test_wet_bulb_equals_dry_bulb_at_saturation() {
        let twb = wet_bulb(22.0, 1.0, SEA_LEVEL_PA).unwrap();
        assert_eq!(twb, 22.0);
    }

    #[test]
    fn test_wet_bulb_reference_value() {
        // Psychrometric table: 30°C, 50% RH, sea level -> Twb ~ 22.0°C
        let twb = wet_bulb(30.0, 0.5, SEA_LEVEL_PA).unwrap();
        assert!(
            (twb - 22.0).abs() < 0.7,
            "Twb at 30°C / 50% RH was {twb:.2}, expected ~22.0"
        );
    }

    #[test]
    fn test_wet_bulb_increases_with_rh() {
        let dry = wet_bulb(30.0, 0.2, SEA_LEVEL_PA).unwrap();
        let humid = wet_bulb(30.0, 0.8, SEA_LEVEL_PA).unwrap();
        assert!(humid > dry, "more moisture means less evaporative cooling");
    }

    #[test]
    fn test_inversion_recovers_forward_solution() {
        let t = 28.0;
        let rh = 0.45;
        let twb = wet_bulb(t, rh, SEA_LEVEL_PA).unwrap();

        let w = humidity_ratio_for_wet_bulb(t, twb, SEA_LEVEL_PA)
            .unwrap()
            .expect("target is reachable");
        let w_direct = humidity_ratio(t, rh, SEA_LEVEL_PA).unwrap();
        assert!(
            (w - w_direct).abs() < 1e-5,
            "inversion drifted: {w} vs {w_direct}"
        );
    }

    #[test]
    fn test_inversion_unreachable_target_dropped() {
        // A 25°C wet bulb is impossible at a 20°C dry bulb
        let sample = humidity_ratio_for_wet_bulb(20.0, 25.0, SEA_LEVEL_PA).unwrap();
        assert!(sample.is_none());
    }

    #[test]
    fn test_inversion_target_below_dry_air_floor_dropped() {
        // Twb(40°C, RH=0) is ~17°C at sea level; 5°C is unreachable
        let sample = humidity_ratio_for_wet_bulb(40.0, 5.0, SEA_LEVEL_PA).unwrap();
        assert!(sample.is_none());
    }
}
