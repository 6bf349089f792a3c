//! Point type alias for chart coordinates.

use nalgebra::Point2;

/// 2D point in chart coordinates.
///
/// This is a simple alias for `nalgebra::Point2<f64>`, used throughout the
/// engine for curve samples and zone polygon vertices: `x` is the dry-bulb
/// temperature in °C, `y` is the humidity ratio in kg vapor / kg dry air.
pub type ChartPoint = Point2<f64>;
