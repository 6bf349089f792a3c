//! Isoline families and computed chart curves
//!
//! A [`Curve`] is the ordered sequence of (T, W) samples produced for one
//! (family, value) pair across the chart's temperature domain. Curves are
//! computed on demand, immutable once produced, and carry their own
//! truncation bookkeeping: samples that would land above the saturation
//! curve (or where the wet-bulb inversion has no solution) are dropped, not
//! padded, so a curve may legitimately span less than the full domain.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::ChartPoint;

/// Isoline family: the psychrometric property held constant along a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolineFamily {
    /// Constant relative humidity (target value is a fraction 0-1)
    RelativeHumidity,
    /// Constant wet-bulb temperature (target value in °C)
    WetBulb,
    /// Constant moist-air enthalpy (target value in kJ/kg dry air)
    Enthalpy,
    /// Constant specific volume (target value in m³/kg dry air)
    SpecificVolume,
    /// Constant humidity ratio (target value in kg vapor / kg dry air)
    MoistureQuantity,
}

impl fmt::Display for IsolineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IsolineFamily::RelativeHumidity => "relative_humidity",
            IsolineFamily::WetBulb => "wet_bulb",
            IsolineFamily::Enthalpy => "enthalpy",
            IsolineFamily::SpecificVolume => "specific_volume",
            IsolineFamily::MoistureQuantity => "moisture_quantity",
        };
        write!(f, "{name}")
    }
}

/// A computed isoline curve in (T, W) chart coordinates
///
/// Samples are ordered by increasing dry-bulb temperature. The curve is a
/// plain value: it holds no references into the configuration it was
/// computed from and is safe to hand to a rendering layer as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    /// Family this curve belongs to
    pub family: IsolineFamily,
    /// Target value of the constant property (family units)
    pub value: f64,
    /// Retained samples, ordered by temperature
    pub points: Vec<ChartPoint>,
    /// Samples dropped for being above saturation or unsolvable
    pub dropped_samples: usize,
}

impl Curve {
    /// Build a curve from retained samples and the dropped-sample count
    #[must_use]
    pub fn new(
        family: IsolineFamily,
        value: f64,
        points: Vec<ChartPoint>,
        dropped_samples: usize,
    ) -> Self {
        Curve {
            family,
            value,
            points,
            dropped_samples,
        }
    }

    /// Number of retained samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no sample survived (the isoline lies entirely outside the
    /// valid region of the chart)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when at least one sample was dropped
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.dropped_samples > 0
    }

    /// Temperature span actually covered, `None` for an empty curve
    #[must_use]
    pub fn temperature_span(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.x, last.x))
    }

    /// Largest humidity ratio on the curve, `None` for an empty curve
    #[must_use]
    pub fn max_humidity_ratio(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.y)
            .max_by(f64::total_cmp)
    }
}
