//! Comfort-zone boundary resolution
//!
//! Converts a [`ZoneConfig`] into a closed polygon in (T, W) space. The
//! lower and upper boundaries are a tagged edge variant - straight segments
//! between converted corners, or segments of the RH isoline at the bound
//! value - resolved once into concrete vertices rather than branching at
//! render time. Each zone owns its resolved polygon; nothing is shared
//! across zones.

use serde::{Deserialize, Serialize};

use crate::core_types::{Celsius, ChartPoint, IsolineFamily};
use crate::error::Result;
use crate::physics::humidity_ratio;

use super::config::{ChartConfig, ZoneConfig};
use super::isoline;

/// How one RH boundary of a zone is realized geometrically
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoneEdge {
    /// Straight segment between the two corners at this RH bound
    Straight(f64),
    /// Segment of the RH isoline at this bound value
    FollowsIsoline(f64),
}

/// A resolved zone boundary: closed vertex loop in chart coordinates
///
/// The loop runs along the lower boundary with increasing temperature,
/// back along the upper boundary, and repeats the first vertex to close.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonePolygon {
    /// Zone name carried over from the configuration
    pub name: String,
    /// Closed vertex loop (first vertex repeated at the end)
    pub vertices: Vec<ChartPoint>,
    /// True when a follow-RH edge was cut short by saturation and the
    /// polygon closed early at the truncation point
    pub truncated: bool,
}

impl ZonePolygon {
    /// Number of vertices including the closing duplicate
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when no vertex could be resolved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Resolve a zone definition into its boundary polygon
///
/// Expects an already [normalized](ZoneConfig::normalized) zone. With
/// `follow_rh` unset the result is the quadrilateral through the four
/// converted corners (bottom-left, bottom-right, top-right, top-left);
/// with it set, both RH edges are sampled along the isoline at the bound
/// value, restricted to the zone's temperature range. A follow edge
/// truncated by saturation closes the polygon early instead of
/// extrapolating past the valid region.
///
/// # Errors
///
/// Configuration-level model failures ([`crate::error::PsychroError`])
/// propagate; in a validated chart these indicate RH bounds or pressure
/// the upstream checks should have rejected.
pub fn resolve_zone(zone: &ZoneConfig, cfg: &ChartConfig) -> Result<ZonePolygon> {
    let [t_lo, t_hi] = zone.t_range;
    let [rh_lo, rh_hi] = zone.rh_range;

    let (lower, upper) = if zone.follow_rh {
        (ZoneEdge::FollowsIsoline(rh_lo), ZoneEdge::FollowsIsoline(rh_hi))
    } else {
        (ZoneEdge::Straight(rh_lo), ZoneEdge::Straight(rh_hi))
    };

    let (bottom, bottom_truncated) = edge_points(lower, t_lo, t_hi, cfg)?;
    let (mut top, top_truncated) = edge_points(upper, t_lo, t_hi, cfg)?;
    top.reverse();

    let mut vertices = bottom;
    vertices.extend(top);
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }

    Ok(ZonePolygon {
        name: zone.name.clone(),
        vertices,
        truncated: bottom_truncated || top_truncated,
    })
}

/// Concrete vertices for one edge, ordered by increasing temperature,
/// plus whether the edge was truncated
fn edge_points(
    edge: ZoneEdge,
    t_lo: f64,
    t_hi: f64,
    cfg: &ChartConfig,
) -> Result<(Vec<ChartPoint>, bool)> {
    match edge {
        ZoneEdge::Straight(rh) => {
            let w_lo = humidity_ratio(t_lo, rh, cfg.pressure_pa)?;
            let w_hi = humidity_ratio(t_hi, rh, cfg.pressure_pa)?;
            Ok((
                vec![ChartPoint::new(t_lo, w_lo), ChartPoint::new(t_hi, w_hi)],
                false,
            ))
        }
        ZoneEdge::FollowsIsoline(rh) => {
            let edge_cfg = ChartConfig {
                t_min: Celsius::new(t_lo),
                t_max: Celsius::new(t_hi),
                ..cfg.clone()
            };
            let curve = isoline::generate(&edge_cfg, IsolineFamily::RelativeHumidity, rh)?;
            let truncated = curve.is_truncated();
            Ok((curve.points, truncated))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn chart() -> ChartConfig {
        ChartConfig::default()
    }

    fn comfort_zone(follow_rh: bool) -> ZoneConfig {
        ZoneConfig {
            name: "comfort".to_string(),
            t_range: [15.0, 25.0],
            rh_range: [0.40, 0.70],
            follow_rh,
        }
        .normalized()
        .unwrap()
    }

    #[test]
    fn test_straight_zone_is_closed_quadrilateral() {
        let polygon = resolve_zone(&comfort_zone(false), &chart()).unwrap();
        assert_eq!(polygon.len(), 5, "4 corners plus closing vertex");
        assert_eq!(polygon.vertices[0], *polygon.vertices.last().unwrap());
        assert!(!polygon.truncated);

        // Corner order: BL, BR, TR, TL
        assert_eq!(polygon.vertices[0].x, 15.0);
        assert_eq!(polygon.vertices[1].x, 25.0);
        assert_eq!(polygon.vertices[2].x, 25.0);
        assert_eq!(polygon.vertices[3].x, 15.0);
        assert!(polygon.vertices[2].y > polygon.vertices[1].y);
    }

    #[test]
    fn test_follow_rh_edges_match_isolines() {
        let cfg = chart();
        let polygon = resolve_zone(&comfort_zone(true), &cfg).unwrap();
        assert!(!polygon.truncated);

        // The polygon's lower run must coincide with the standalone
        // RH=40% isoline over the same temperature range.
        let edge_cfg = ChartConfig {
            t_min: Celsius::new(15.0),
            t_max: Celsius::new(25.0),
            ..cfg.clone()
        };
        let reference = isoline::generate(&edge_cfg, IsolineFamily::RelativeHumidity, 0.40).unwrap();
        for (vertex, sample) in polygon.vertices.iter().zip(&reference.points) {
            assert_eq!(vertex.x, sample.x);
            assert_relative_eq!(vertex.y, sample.y, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_follow_rh_vertical_sides() {
        let cfg = chart();
        let polygon = resolve_zone(&comfort_zone(true), &cfg).unwrap();
        let n = cfg.samples;
        // bottom edge ends at t_hi, top (reversed) starts at t_hi
        assert_eq!(polygon.vertices[n - 1].x, 25.0);
        assert_eq!(polygon.vertices[n].x, 25.0);
        // and the loop closes along the t_lo side
        assert_eq!(polygon.vertices[2 * n - 1].x, 15.0);
        assert_eq!(polygon.vertices[2 * n].x, 15.0);
    }
}
