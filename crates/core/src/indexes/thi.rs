//! Temperature-humidity index (THI / ITU)
//!
//! The classic Thom comfort index used for livestock heat-stress
//! assessment, combining dry-bulb temperature and relative humidity into
//! a single number with established category thresholds for dairy cattle.
//!
//! # Scientific References
//!
//! - Thom, E. C. (1959). "The discomfort index". Weatherwise, 12(2)
//! - Armstrong, D. V. (1994). "Heat stress interaction with shade and
//!   cooling". Journal of Dairy Science, 77(7)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{require_finite, PsychroError, Result};

/// Heat-stress severity band for a THI value
///
/// Thresholds follow the dairy-cattle convention: stress begins at
/// THI 72 and becomes an emergency above 84.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatStressCategory {
    /// THI below 72: no measurable stress response
    Comfort,
    /// THI 72 to 78: mild stress, reduced feed intake begins
    Mild,
    /// THI 78 to 84: moderate stress, measurable production loss
    Moderate,
    /// THI above 84: severe stress, emergency measures warranted
    Severe,
}

impl HeatStressCategory {
    /// Classify a THI value into its severity band
    #[must_use]
    pub fn from_thi(thi: f64) -> Self {
        if thi < 72.0 {
            HeatStressCategory::Comfort
        } else if thi < 78.0 {
            HeatStressCategory::Mild
        } else if thi < 84.0 {
            HeatStressCategory::Moderate
        } else {
            HeatStressCategory::Severe
        }
    }
}

impl fmt::Display for HeatStressCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeatStressCategory::Comfort => "comfort",
            HeatStressCategory::Mild => "mild",
            HeatStressCategory::Moderate => "moderate",
            HeatStressCategory::Severe => "severe",
        };
        write!(f, "{name}")
    }
}

/// Temperature-humidity index from dry-bulb temperature and RH
///
/// `THI = T - (0.55 - 0.0055·RH%) · (T - 14.5)`
///
/// with temperature in °C and relative humidity in percent. Humidity
/// matters more the further the temperature sits above 14.5°C; below
/// that pivot the index tracks the dry bulb closely.
///
/// # Arguments
/// * `t_c` - Dry-bulb temperature (°C)
/// * `relative_humidity` - Relative humidity as a fraction (0-1)
///
/// # Errors
///
/// [`PsychroError::OutOfRangeInput`] for non-finite input or an RH
/// outside [0, 1].
pub fn temperature_humidity_index(t_c: f64, relative_humidity: f64) -> Result<f64> {
    let t_c = require_finite("temperature", t_c)?;
    if !(0.0..=1.0).contains(&relative_humidity) {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "relative_humidity",
            value: relative_humidity,
        });
    }

    let rh_percent = relative_humidity * 100.0;
    Ok(t_c - (0.55 - 0.0055 * rh_percent) * (t_c - 14.5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_thi_reference_value() {
        // 30°C at 60% RH: 30 - (0.55 - 0.33) * 15.5 = 26.59
        let thi = temperature_humidity_index(30.0, 0.60).unwrap();
        assert_relative_eq!(thi, 26.59, epsilon = 0.01);
    }

    #[test]
    fn test_thi_increases_with_humidity_above_pivot() {
        let dry = temperature_humidity_index(30.0, 0.30).unwrap();
        let humid = temperature_humidity_index(30.0, 0.80).unwrap();
        assert!(humid > dry, "humidity worsens heat stress above 14.5°C");
    }

    #[test]
    fn test_thi_humidity_irrelevant_at_pivot() {
        let a = temperature_humidity_index(14.5, 0.20).unwrap();
        let b = temperature_humidity_index(14.5, 0.90).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, 14.5);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(HeatStressCategory::from_thi(70.0), HeatStressCategory::Comfort);
        assert_eq!(HeatStressCategory::from_thi(72.0), HeatStressCategory::Mild);
        assert_eq!(HeatStressCategory::from_thi(78.0), HeatStressCategory::Moderate);
        assert_eq!(HeatStressCategory::from_thi(84.0), HeatStressCategory::Severe);
    }

    #[test]
    fn test_thi_rejects_percent_style_rh() {
        assert!(temperature_humidity_index(30.0, 60.0).is_err());
    }
}
