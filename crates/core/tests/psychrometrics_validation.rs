//! Psychrometric Property Validation Test Suite
//!
//! Validates the property models against published reference values and
//! against each other's internal consistency.
//!
//! # Test Categories
//! 1. Saturation vapor pressure vs. reference data
//! 2. Humidity ratio vs. ASHRAE chart readings
//! 3. Forward/inverse round-trip consistency
//! 4. Wet-bulb solver behavior and bounds
//! 5. Dew-point consistency
//! 6. Enthalpy and specific volume reference points
//! 7. Heat-stress index monotonicity
//!
//! # References
//! - Alduchov & Eskridge (1996): Magnus coefficient revision
//! - ASHRAE Handbook - Fundamentals (2017), Ch. 1
//! - Thom (1959), Gaughan et al. (2008): comfort indexes
//!
//! Run tests with: `cargo test --test psychrometrics_validation`

use approx::assert_relative_eq;
use psychro_chart_core::indexes::{heat_load_index, temperature_humidity_index};
use psychro_chart_core::physics::{
    dew_point, enthalpy, humidity_ratio, relative_humidity, saturation_humidity_ratio,
    saturation_vapor_pressure, specific_volume, wet_bulb,
};

const SEA_LEVEL_PA: f64 = 101_325.0;

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: SATURATION VAPOR PRESSURE
// ═══════════════════════════════════════════════════════════════════════════════

/// Validate the Magnus formulation near the water triple point
/// Source: IAPWS reference, Pws(0.01°C) = 611.657 Pa
#[test]
fn test_saturation_pressure_triple_point() {
    let p = saturation_vapor_pressure(0.01);
    assert_relative_eq!(p, 611.657, max_relative = 0.002);
}

/// Validate against tabulated saturation pressures across the chart range
/// Source: ASHRAE Handbook - Fundamentals (2017), Table 3 (abridged)
#[test]
fn test_saturation_pressure_reference_table() {
    let references = [
        (0.0, 611.2),
        (10.0, 1228.0),
        (20.0, 2339.0),
        (30.0, 4246.0),
        (40.0, 7384.0),
        (50.0, 12352.0),
    ];
    for (t_c, expected_pa) in references {
        let p = saturation_vapor_pressure(t_c);
        assert_relative_eq!(p, expected_pa, max_relative = 0.005);
    }
}

/// Saturation pressure must increase strictly with temperature
#[test]
fn test_saturation_pressure_strictly_monotonic() {
    let mut prev = saturation_vapor_pressure(-20.0);
    let mut t = -19.5;
    while t <= 60.0 {
        let p = saturation_vapor_pressure(t);
        assert!(p > prev, "Pws must increase through T={t}");
        prev = p;
        t += 0.5;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: HUMIDITY RATIO
// ═══════════════════════════════════════════════════════════════════════════════

/// Validate humidity ratios against psychrometric chart readings
/// Source: ASHRAE sea-level chart; readings carry ~2% reading error
#[test]
fn test_humidity_ratio_chart_readings() {
    let references = [
        (20.0, 0.50, 0.0073),
        (25.0, 0.50, 0.0099),
        (30.0, 0.60, 0.0160),
    ];
    for (t_c, rh, expected_w) in references {
        let w = humidity_ratio(t_c, rh, SEA_LEVEL_PA).unwrap();
        assert_relative_eq!(w, expected_w, max_relative = 0.03);
    }
}

/// Humidity ratio at a given temperature never exceeds the saturation ratio
#[test]
fn test_humidity_ratio_bounded_by_saturation() {
    for t10 in 0..=45 {
        let t_c = f64::from(t10);
        let ws = saturation_humidity_ratio(t_c, SEA_LEVEL_PA).unwrap();
        for rh10 in 0..=10 {
            let rh = f64::from(rh10) / 10.0;
            let w = humidity_ratio(t_c, rh, SEA_LEVEL_PA).unwrap();
            assert!(
                w <= ws * (1.0 + 1e-12),
                "W({t_c}, {rh}) = {w} exceeded Ws = {ws}"
            );
        }
    }
}

/// Altitude lowers total pressure and therefore raises W at fixed (T, RH)
#[test]
fn test_humidity_ratio_increases_with_altitude() {
    let sea = humidity_ratio(25.0, 0.5, 101_325.0).unwrap();
    let mountain = humidity_ratio(25.0, 0.5, 85_000.0).unwrap();
    assert!(mountain > sea);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: ROUND-TRIP CONSISTENCY
// ═══════════════════════════════════════════════════════════════════════════════

/// RH -> W -> RH must reproduce the input to solver precision
#[test]
fn test_rh_humidity_ratio_round_trip() {
    for &t_c in &[5.0, 15.0, 25.0, 35.0, 45.0] {
        for &rh in &[0.10, 0.35, 0.60, 0.85, 1.0] {
            let w = humidity_ratio(t_c, rh, SEA_LEVEL_PA).unwrap();
            let recovered = relative_humidity(t_c, w, SEA_LEVEL_PA).unwrap();
            assert!(!recovered.clamped);
            assert_relative_eq!(recovered.value, rh, max_relative = 1e-6);
        }
    }
}

/// A humidity ratio above saturation clamps to RH = 1 and flags it
#[test]
fn test_supersaturation_clamps_with_flag() {
    let ws = saturation_humidity_ratio(20.0, SEA_LEVEL_PA).unwrap();
    let sample = relative_humidity(20.0, ws * 1.2, SEA_LEVEL_PA).unwrap();
    assert!(sample.clamped);
    assert_eq!(sample.value, 1.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: WET-BULB SOLVER
// ═══════════════════════════════════════════════════════════════════════════════

/// The wet bulb sits between dew point and dry bulb for unsaturated air
#[test]
fn test_wet_bulb_between_dew_point_and_dry_bulb() {
    for &t_c in &[10.0, 20.0, 30.0, 40.0] {
        for &rh in &[0.2, 0.5, 0.8] {
            let twb = wet_bulb(t_c, rh, SEA_LEVEL_PA).unwrap();
            let tdp = dew_point(t_c, rh).unwrap();
            assert!(
                tdp < twb && twb < t_c,
                "ordering violated at T={t_c}, RH={rh}: Tdp={tdp}, Twb={twb}"
            );
        }
    }
}

/// Validate against psychrometric table wet-bulb readings
/// Source: standard sea-level psychrometric tables, ±0.5°C reading error
#[test]
fn test_wet_bulb_table_readings() {
    let references = [
        (25.0, 0.50, 17.9),
        (30.0, 0.50, 22.0),
        (35.0, 0.40, 24.1),
    ];
    for (t_c, rh, expected_twb) in references {
        let twb = wet_bulb(t_c, rh, SEA_LEVEL_PA).unwrap();
        assert!(
            (twb - expected_twb).abs() < 0.7,
            "Twb({t_c}, {rh}) = {twb:.2}, table says ~{expected_twb}"
        );
    }
}

/// Wet bulb increases monotonically with RH at fixed dry bulb
#[test]
fn test_wet_bulb_monotonic_in_rh() {
    let mut prev = wet_bulb(32.0, 0.05, SEA_LEVEL_PA).unwrap();
    for rh20 in 2..=20 {
        let rh = f64::from(rh20) / 20.0;
        let twb = wet_bulb(32.0, rh, SEA_LEVEL_PA).unwrap();
        assert!(twb > prev, "Twb must increase through RH={rh}");
        prev = twb;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 5: DEW POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// The saturation pressure at the dew point equals the vapor pressure
#[test]
fn test_dew_point_recovers_vapor_pressure() {
    for &t_c in &[5.0, 18.0, 27.0, 40.0] {
        for &rh in &[0.15, 0.5, 0.9] {
            let tdp = dew_point(t_c, rh).unwrap();
            let pw = rh * saturation_vapor_pressure(t_c);
            assert_relative_eq!(saturation_vapor_pressure(tdp), pw, max_relative = 1e-3);
        }
    }
}

/// Reference check: 25°C at 50% RH dews at ~13.9°C
#[test]
fn test_dew_point_reference_value() {
    let tdp = dew_point(25.0, 0.50).unwrap();
    assert!((tdp - 13.9).abs() < 0.2, "Tdp was {tdp:.2}, expected ~13.9");
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 6: ENTHALPY AND SPECIFIC VOLUME
// ═══════════════════════════════════════════════════════════════════════════════

/// Validate enthalpy against ASHRAE chart readings
#[test]
fn test_enthalpy_chart_readings() {
    // (T, W, h) read off the sea-level chart
    let references = [
        (20.0, 0.0073, 38.6),
        (25.0, 0.0099, 50.3),
        (30.0, 0.0160, 71.1),
    ];
    for (t_c, w, expected_h) in references {
        assert_relative_eq!(enthalpy(t_c, w), expected_h, max_relative = 0.01);
    }
}

/// Specific volume of dry air matches the ideal-gas value
#[test]
fn test_specific_volume_ideal_gas() {
    let v = specific_volume(20.0, 0.0, SEA_LEVEL_PA).unwrap();
    assert_relative_eq!(v, 287.055 * 293.15 / 101_325.0, max_relative = 1e-12);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 7: HEAT-STRESS INDEXES
// ═══════════════════════════════════════════════════════════════════════════════

/// THI increases with temperature at fixed humidity
#[test]
fn test_thi_monotonic_in_temperature() {
    let mut prev = temperature_humidity_index(15.0, 0.6).unwrap();
    for t in 16..=45 {
        let thi = temperature_humidity_index(f64::from(t), 0.6).unwrap();
        assert!(thi > prev, "THI must increase through T={t}");
        prev = thi;
    }
}

/// HLI responds with the right sign to each of its four inputs
#[test]
fn test_hli_input_sensitivities() {
    let base = heat_load_index(30.0, 0.5, 2.0, 400.0).unwrap();
    assert!(heat_load_index(32.0, 0.5, 2.0, 400.0).unwrap() > base);
    assert!(heat_load_index(30.0, 0.7, 2.0, 400.0).unwrap() > base);
    assert!(heat_load_index(30.0, 0.5, 4.0, 400.0).unwrap() < base);
    assert!(heat_load_index(30.0, 0.5, 2.0, 600.0).unwrap() > base);
}
