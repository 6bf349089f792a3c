//! Psychrometric Chart Core Library
//!
//! Computation engine for psychrometric charts of moist air: saturation
//! and humidity-ratio models on the Magnus-Tetens formulation, an
//! implicit wet-bulb solver, enthalpy and specific-volume relations,
//! isoline generation with saturation truncation, comfort-zone boundary
//! resolution, and livestock heat-stress indexes (THI, HLI).
//!
//! ## Chart coordinates
//!
//! Everything resolves into (T, W) space: dry-bulb temperature in °C on
//! the x-axis, humidity ratio in kg vapor per kg dry air on the y-axis.
//! Rendering is out of scope; [`chart::ChartData`] is plain data an
//! embedding application draws however it likes.

// Core types and utilities
pub mod core_types;

// Error taxonomy shared by every layer
pub mod error;

// Psychrometric property models
pub mod physics;

// Chart configuration, isolines, zones, and assembly
pub mod chart;

// Bioclimatic comfort/stress indexes
pub mod indexes;

// Re-export core types
pub use core_types::{AirState, Celsius, ChartPoint, Curve, IsolineFamily, Kelvin};

// Re-export the error taxonomy
pub use error::{PsychroError, Result};

// Re-export the chart surface
pub use chart::{ChartConfig, ChartData, IsolineSet, PointConfig, ZoneConfig, ZonePolygon};

// Re-export the index surface
pub use indexes::{heat_load_index, temperature_humidity_index, HeatStressCategory};
