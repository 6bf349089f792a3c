//! Chart assembly
//!
//! Turns a validated [`ChartConfig`] plus isoline, zone, and point
//! definitions into a complete [`ChartData`]: the saturation boundary,
//! every requested isoline curve, resolved zone polygons, and fully
//! resolved reference points. Curves within a chart are independent of
//! each other, so they are generated in parallel with rayon; each curve
//! itself is sampled sequentially in temperature order.
//!
//! The output is plain data in (T, W) chart coordinates. Rendering,
//! axes, and styling belong to the embedding application.

pub mod config;
pub mod isoline;
pub mod zone;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core_types::{AirState, Celsius, ChartPoint, Curve, IsolineFamily};
use crate::error::Result;

pub use config::{
    normalize_rh, ChartConfig, IsolineSet, PointConfig, ZoneConfig, DEFAULT_SAMPLES,
};
pub use isoline::{generate, saturation_curve};
pub use zone::{resolve_zone, ZoneEdge, ZonePolygon};

/// A labeled reference point with its fully resolved air state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Label carried over from the configuration
    pub label: String,
    /// All psychrometric properties at this condition
    pub state: AirState,
}

impl ReferencePoint {
    /// Chart coordinates of this point (dry bulb, humidity ratio)
    #[must_use]
    pub fn position(&self) -> ChartPoint {
        ChartPoint::new(*self.state.temperature, self.state.humidity_ratio)
    }
}

/// A fully computed psychrometric chart
///
/// Everything a rendering layer needs, already in chart coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    /// Configuration the chart was computed from
    pub config: ChartConfig,
    /// The RH = 100% boundary curve
    pub saturation: Curve,
    /// All requested isoline curves, grouped by nothing in particular;
    /// each carries its own family and target value
    pub isolines: Vec<Curve>,
    /// Resolved zone boundary polygons
    pub zones: Vec<ZonePolygon>,
    /// Resolved reference points
    pub points: Vec<ReferencePoint>,
}

impl ChartData {
    /// Compute a complete chart
    ///
    /// Validates the configuration once up front, normalizes all RH
    /// inputs (percent or fraction), then generates the saturation curve,
    /// the enabled isoline sets (in parallel), the zone polygons, and the
    /// reference points. Truncated or empty curves are reported through
    /// tracing but are not errors.
    ///
    /// # Errors
    ///
    /// - [`crate::error::PsychroError::InvalidPressure`] /
    ///   [`crate::error::PsychroError::OutOfRangeInput`] for a
    ///   configuration, target value, zone, or point that fails validation
    /// - [`crate::error::PsychroError::ConvergenceFailure`] if a reference
    ///   point's wet-bulb solve exhausts its iteration cap
    pub fn compute(
        cfg: &ChartConfig,
        isoline_sets: &[IsolineSet],
        zones: &[ZoneConfig],
        points: &[PointConfig],
    ) -> Result<Self> {
        cfg.validate()?;

        let sets = isoline_sets
            .iter()
            .filter(|set| set.enabled)
            .cloned()
            .map(IsolineSet::normalized)
            .collect::<Result<Vec<_>>>()?;

        let saturation = saturation_curve(cfg)?;

        let targets: Vec<_> = sets
            .iter()
            .flat_map(|set| set.values.iter().map(|&value| (set.family, value)))
            .collect();
        debug!(curves = targets.len(), "generating isolines");

        let isolines = targets
            .par_iter()
            .map(|&(family, value)| generate(cfg, family, value))
            .collect::<Result<Vec<_>>>()?;

        for curve in &isolines {
            if curve.is_empty() {
                warn!(
                    family = %curve.family,
                    value = curve.value,
                    "isoline lies entirely outside the valid region"
                );
            } else if curve.is_truncated() {
                debug!(
                    family = %curve.family,
                    value = curve.value,
                    dropped = curve.dropped_samples,
                    "isoline truncated at saturation"
                );
            }
        }

        let zones = zones
            .iter()
            .cloned()
            .map(|z| resolve_zone(&z.normalized()?, cfg))
            .collect::<Result<Vec<_>>>()?;
        for polygon in &zones {
            if polygon.truncated {
                warn!(zone = %polygon.name, "zone boundary truncated at saturation");
            }
        }

        let points = points
            .iter()
            .cloned()
            .map(|p| {
                let p = p.normalized()?;
                Ok(ReferencePoint {
                    label: p.label,
                    state: AirState::resolve(Celsius::new(p.t), p.rh, cfg.pressure_pa)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            isolines = isolines.len(),
            zones = zones.len(),
            points = points.len(),
            "chart computed"
        );

        Ok(ChartData {
            config: cfg.clone(),
            saturation,
            isolines,
            zones,
            points,
        })
    }

    /// Curves of one family, in configuration order
    pub fn family_curves(&self, family: IsolineFamily) -> impl Iterator<Item = &Curve> {
        self.isolines.iter().filter(move |c| c.family == family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Celsius, IsolineFamily};

    fn small_config() -> ChartConfig {
        ChartConfig {
            t_min: Celsius::new(0.0),
            t_max: Celsius::new(35.0),
            samples: 36,
            ..ChartConfig::default()
        }
    }

    #[test]
    fn test_compute_assembles_all_layers() {
        let cfg = small_config();
        let sets = [IsolineSet::new(
            IsolineFamily::RelativeHumidity,
            vec![20.0, 40.0, 60.0, 80.0],
        )];
        let zones = [ZoneConfig {
            name: "comfort".to_string(),
            t_range: [18.0, 26.0],
            rh_range: [40.0, 70.0],
            follow_rh: true,
        }];
        let points = [PointConfig {
            label: "design".to_string(),
            t: 24.0,
            rh: 50.0,
        }];

        let chart = ChartData::compute(&cfg, &sets, &zones, &points).unwrap();
        assert_eq!(chart.isolines.len(), 4);
        assert_eq!(chart.zones.len(), 1);
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.saturation.len(), cfg.samples);

        let design = &chart.points[0];
        assert_eq!(design.label, "design");
        assert_eq!(design.position().x, 24.0);
        assert!(design.position().y > 0.0);
    }

    #[test]
    fn test_disabled_sets_are_skipped() {
        let cfg = small_config();
        let mut set = IsolineSet::new(IsolineFamily::Enthalpy, vec![20.0, 40.0]);
        set.enabled = false;
        let chart = ChartData::compute(&cfg, &[set], &[], &[]).unwrap();
        assert!(chart.isolines.is_empty());
    }

    #[test]
    fn test_invalid_pressure_aborts_before_output() {
        let cfg = ChartConfig {
            pressure_pa: 0.0,
            ..small_config()
        };
        let sets = [IsolineSet::new(IsolineFamily::RelativeHumidity, vec![50.0])];
        assert!(ChartData::compute(&cfg, &sets, &[], &[]).is_err());
    }

    #[test]
    fn test_family_curves_filters() {
        let cfg = small_config();
        let sets = [
            IsolineSet::new(IsolineFamily::RelativeHumidity, vec![40.0, 80.0]),
            IsolineSet::new(IsolineFamily::Enthalpy, vec![30.0]),
        ];
        let chart = ChartData::compute(&cfg, &sets, &[], &[]).unwrap();
        assert_eq!(
            chart.family_curves(IsolineFamily::RelativeHumidity).count(),
            2
        );
        assert_eq!(chart.family_curves(IsolineFamily::Enthalpy).count(), 1);
    }
}
