//! Core types and utilities

pub mod air_state;
pub mod curve;
pub mod point;
pub mod units;

pub use air_state::AirState;
pub use curve::{Curve, IsolineFamily};
pub use point::ChartPoint;
pub use units::{Celsius, Kelvin};
