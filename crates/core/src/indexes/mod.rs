//! Bioclimatic comfort and heat-stress indexes
//!
//! Empirical screening indexes layered on the same (T, RH) inputs the
//! chart works from. These are diagnostics for interpreting chart
//! regions, not psychrometric state functions; they live in their own
//! module so the physics layer stays purely thermodynamic.

pub mod hli;
pub mod thi;

pub use hli::heat_load_index;
pub use thi::{temperature_humidity_index, HeatStressCategory};
