//! Declarative chart configuration
//!
//! Plain serde-ready data types describing what a chart should contain:
//! the temperature domain and pressure, the isoline families and their
//! target values, comfort/stress zones, and labeled reference points. The
//! engine consumes these as read-only shared configuration; no file parsing
//! happens here - an embedding application deserializes them from whatever
//! format it prefers.
//!
//! Relative-humidity values arriving from user configuration may be percent
//! (40, 70) or fractions (0.4, 0.7); [`normalize_rh`] folds both into the
//! fraction convention used everywhere else, and the engine re-validates
//! the [0, 1] range independently of any upstream loader.

use serde::{Deserialize, Serialize};

use crate::core_types::{Celsius, IsolineFamily};
use crate::error::{require_finite, PsychroError, Result};
use crate::physics::saturation_vapor_pressure;

/// Default number of samples per generated curve
pub const DEFAULT_SAMPLES: usize = 200;

/// Global configuration of a psychrometric chart
///
/// # Example
/// ```
/// use psychro_chart_core::chart::ChartConfig;
/// use psychro_chart_core::core_types::Celsius;
///
/// let cfg = ChartConfig {
///     t_min: Celsius::new(0.0),
///     t_max: Celsius::new(35.0),
///     ..ChartConfig::default()
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Lower bound of the dry-bulb temperature domain
    pub t_min: Celsius,
    /// Upper bound of the dry-bulb temperature domain
    pub t_max: Celsius,
    /// Total atmospheric pressure (Pa)
    pub pressure_pa: f64,
    /// Samples per curve across the temperature domain
    pub samples: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            t_min: Celsius::new(0.0),
            t_max: Celsius::new(50.0),
            pressure_pa: 101_325.0,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl ChartConfig {
    /// Indoor comfort analysis preset: the range where ASHRAE-style comfort
    /// zones live, at sea-level pressure
    #[must_use]
    pub fn comfort_analysis() -> Self {
        ChartConfig {
            t_min: Celsius::new(0.0),
            t_max: Celsius::new(40.0),
            pressure_pa: 101_325.0,
            samples: DEFAULT_SAMPLES,
        }
    }

    /// Livestock heat-stress preset: extended warm range for THI/HLI work
    /// in tropical and subtropical climates
    #[must_use]
    pub fn livestock_heat_stress() -> Self {
        ChartConfig {
            t_min: Celsius::new(5.0),
            t_max: Celsius::new(45.0),
            pressure_pa: 101_325.0,
            samples: DEFAULT_SAMPLES,
        }
    }

    /// Validate the configuration once, before any curve is generated
    ///
    /// The pressure check against the saturation pressure at `t_max` covers
    /// the whole domain: `Pws` increases monotonically with temperature, so
    /// a pressure valid at the hot end is valid everywhere on the chart.
    ///
    /// # Errors
    ///
    /// - [`PsychroError::OutOfRangeInput`] for non-finite bounds, an empty
    ///   or inverted temperature range, or fewer than 2 samples
    /// - [`PsychroError::InvalidPressure`] when the pressure does not
    ///   exceed the saturation vapor pressure anywhere in the domain
    pub fn validate(&self) -> Result<()> {
        require_finite("t_min", *self.t_min)?;
        require_finite("t_max", *self.t_max)?;
        require_finite("pressure", self.pressure_pa)?;

        if *self.t_min >= *self.t_max {
            return Err(PsychroError::OutOfRangeInput {
                quantity: "t_max",
                value: *self.t_max,
            });
        }
        if self.samples < 2 {
            return Err(PsychroError::OutOfRangeInput {
                quantity: "samples",
                value: self.samples as f64,
            });
        }

        let p_ws_hot = saturation_vapor_pressure(*self.t_max);
        if self.pressure_pa <= p_ws_hot {
            return Err(PsychroError::InvalidPressure {
                pressure_pa: self.pressure_pa,
                saturation_pa: p_ws_hot,
            });
        }
        Ok(())
    }

    /// Evenly spaced sample temperatures across `[t_min, t_max]`, inclusive
    #[must_use]
    pub fn sample_temperatures(&self) -> Vec<f64> {
        linspace(*self.t_min, *self.t_max, self.samples)
    }
}

/// Evenly spaced values over `[lo, hi]`, endpoints included
///
/// Counts below 2 cannot span an interval: 0 yields nothing, 1 yields the
/// lower endpoint. `validate()` rejects such configurations up front, but
/// the grid must stay panic-free when called on an unvalidated config.
pub(crate) fn linspace(lo: f64, hi: f64, samples: usize) -> Vec<f64> {
    if samples < 2 {
        return vec![lo; samples];
    }
    let step = (hi - lo) / (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            if i == samples - 1 {
                hi // avoid accumulating float error at the far endpoint
            } else {
                lo + i as f64 * step
            }
        })
        .collect()
}

/// Normalize a relative-humidity value to the fraction convention
///
/// Values above 1 are interpreted as percent and divided by 100; the
/// result must land in [0, 1].
///
/// # Errors
///
/// [`PsychroError::OutOfRangeInput`] for non-finite input or a value that
/// is negative or above 100.
pub fn normalize_rh(value: f64) -> Result<f64> {
    let raw = require_finite("relative_humidity", value)?;
    let rh = if raw > 1.0 { raw / 100.0 } else { raw };
    if !(0.0..=1.0).contains(&rh) {
        return Err(PsychroError::OutOfRangeInput {
            quantity: "relative_humidity",
            value: raw,
        });
    }
    Ok(rh)
}

/// One family of isolines and the values to draw it at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsolineSet {
    /// Property held constant along each curve
    pub family: IsolineFamily,
    /// Target values, in the family's units
    pub values: Vec<f64>,
    /// Disabled sets are kept in configuration but not computed
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl IsolineSet {
    /// Create an enabled isoline set
    #[must_use]
    pub fn new(family: IsolineFamily, values: Vec<f64>) -> Self {
        IsolineSet {
            family,
            values,
            enabled: true,
        }
    }

    /// Normalize the target values where the family calls for it
    ///
    /// Relative-humidity targets accept percent or fraction input; all
    /// other families take their values verbatim.
    ///
    /// # Errors
    ///
    /// [`PsychroError::OutOfRangeInput`] if an RH target cannot be
    /// normalized into [0, 1].
    pub fn normalized(mut self) -> Result<Self> {
        if self.family == IsolineFamily::RelativeHumidity {
            self.values = self
                .values
                .iter()
                .map(|&v| normalize_rh(v))
                .collect::<Result<Vec<_>>>()?;
        }
        Ok(self)
    }
}

/// A comfort or stress zone over the chart
///
/// Defined by a temperature range and an RH range. With `follow_rh` the
/// upper and lower boundaries follow the RH isolines at the range bounds;
/// otherwise the zone is the straight-edged quadrilateral those ranges
/// imply in (T, W) space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Zone name, used in legends and reports
    pub name: String,
    /// Temperature range `[t_lo, t_hi]` (°C)
    pub t_range: [f64; 2],
    /// Relative-humidity range `[rh_lo, rh_hi]` (fraction or percent)
    pub rh_range: [f64; 2],
    /// Replace the RH edges with curved isoline segments
    #[serde(default)]
    pub follow_rh: bool,
}

impl ZoneConfig {
    /// Normalize the RH bounds and validate the ranges
    ///
    /// # Errors
    ///
    /// [`PsychroError::OutOfRangeInput`] for non-finite bounds, an empty
    /// or inverted range, or RH bounds outside [0, 1] after normalization.
    pub fn normalized(mut self) -> Result<Self> {
        require_finite("t_range", self.t_range[0])?;
        require_finite("t_range", self.t_range[1])?;
        if self.t_range[0] <= -273.15 {
            return Err(PsychroError::OutOfRangeInput {
                quantity: "t_range",
                value: self.t_range[0],
            });
        }
        if self.t_range[0] >= self.t_range[1] {
            return Err(PsychroError::OutOfRangeInput {
                quantity: "t_range",
                value: self.t_range[1],
            });
        }

        self.rh_range = [normalize_rh(self.rh_range[0])?, normalize_rh(self.rh_range[1])?];
        if self.rh_range[0] >= self.rh_range[1] {
            return Err(PsychroError::OutOfRangeInput {
                quantity: "rh_range",
                value: self.rh_range[1],
            });
        }
        Ok(self)
    }
}

/// A labeled reference point (observed or design condition)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointConfig {
    /// Text label shown next to the marker
    pub label: String,
    /// Dry-bulb temperature (°C)
    pub t: f64,
    /// Relative humidity (fraction or percent)
    pub rh: f64,
}

impl PointConfig {
    /// Normalize the RH value
    ///
    /// # Errors
    ///
    /// [`PsychroError::OutOfRangeInput`] if the RH cannot be normalized
    /// into [0, 1] or the temperature is non-finite.
    pub fn normalized(mut self) -> Result<Self> {
        require_finite("temperature", self.t)?;
        if self.t <= -273.15 {
            return Err(PsychroError::OutOfRangeInput {
                quantity: "temperature",
                value: self.t,
            });
        }
        self.rh = normalize_rh(self.rh)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rh_accepts_percent_and_fraction() {
        assert_eq!(normalize_rh(0.4).unwrap(), 0.4);
        assert_eq!(normalize_rh(40.0).unwrap(), 0.4);
        assert_eq!(normalize_rh(1.0).unwrap(), 1.0);
        assert!(normalize_rh(140.0).is_err());
        assert!(normalize_rh(-0.1).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_pressure() {
        let cfg = ChartConfig {
            pressure_pa: 0.0,
            ..ChartConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PsychroError::InvalidPressure { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_domain() {
        let cfg = ChartConfig {
            t_min: Celsius::new(30.0),
            t_max: Celsius::new(10.0),
            ..ChartConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_sample_temperatures_cover_domain() {
        let cfg = ChartConfig {
            t_min: Celsius::new(0.0),
            t_max: Celsius::new(35.0),
            samples: 8,
            ..ChartConfig::default()
        };
        let temps = cfg.sample_temperatures();
        assert_eq!(temps.len(), 8);
        assert_eq!(temps[0], 0.0);
        assert_eq!(*temps.last().unwrap(), 35.0);
    }

    #[test]
    fn test_sample_temperatures_degenerate_counts_do_not_panic() {
        let mut cfg = ChartConfig {
            samples: 0,
            ..ChartConfig::default()
        };
        assert!(cfg.validate().is_err());
        assert!(cfg.sample_temperatures().is_empty());

        cfg.samples = 1;
        assert!(cfg.validate().is_err());
        assert_eq!(cfg.sample_temperatures(), vec![*cfg.t_min]);
    }

    #[test]
    fn test_zone_rh_bounds_normalized_from_percent() {
        let zone = ZoneConfig {
            name: "comfort".to_string(),
            t_range: [18.0, 26.0],
            rh_range: [40.0, 70.0],
            follow_rh: true,
        }
        .normalized()
        .unwrap();
        assert_eq!(zone.rh_range, [0.40, 0.70]);
    }
}
