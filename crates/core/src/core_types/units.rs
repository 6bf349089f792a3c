//! Semantic unit types for type-safe temperature handling
//!
//! Newtype wrappers prevent accidental mixing of Celsius and Kelvin in the
//! psychrometric formulas (the ideal-gas relations need absolute temperature,
//! the empirical Magnus-Tetens fit needs Celsius).
//!
//! # Design Philosophy
//! - Temperatures use f64: the chart engine round-trips humidity ratios to
//!   1e-6, which f32 cannot hold across the full domain
//! - Implements common traits (`Deref`, `Display`, `Ord`, serde)
//! - Total ordering via `total_cmp` (NaN sorts above all values)
//! - Private inner fields with validated constructors
//!
//! # Usage
//! ```
//! use psychro_chart_core::core_types::{Celsius, Kelvin};
//!
//! let temp = Celsius::new(25.0);
//! let kelvin: Kelvin = temp.into();
//! assert!((*kelvin - 298.15).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Temperature in degrees Celsius
///
/// Dry-bulb and wet-bulb temperatures on the chart axes are Celsius; the
/// saturation-pressure fit is parameterized in Celsius directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Celsius {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Celsius to Kelvin conversion offset (0°C = 273.15 K)
    pub(crate) const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

    /// Create a new Celsius temperature. Asserts value >= absolute zero (-273.15°C).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= -Self::CELSIUS_KELVIN_OFFSET,
            "Celsius::new: value is below absolute zero (-273.15°C)"
        );
        Celsius(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= -273.15 (absolute zero).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Celsius(value)
    }

    /// Convert to Kelvin
    #[inline]
    #[must_use]
    pub fn to_kelvin(self) -> Kelvin {
        Kelvin(self.0 + Self::CELSIUS_KELVIN_OFFSET)
    }

    /// Raw value in °C
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Kelvin {
        c.to_kelvin()
    }
}

impl From<f64> for Celsius {
    fn from(v: f64) -> Self {
        Celsius(v)
    }
}

impl From<Celsius> for f64 {
    fn from(c: Celsius) -> f64 {
        c.0
    }
}

impl PartialEq<f64> for Celsius {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for Celsius {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Temperature in Kelvin (absolute scale)
///
/// Used by the ideal-gas specific-volume relation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kelvin(f64);

impl Eq for Kelvin {}

impl PartialOrd for Kelvin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kelvin {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Kelvin {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kelvin {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Kelvin = Kelvin(0.0);

    /// Create a new Kelvin temperature. Asserts value >= absolute zero (0 K).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "Kelvin::new: value is below absolute zero (0 K)"
        );
        Kelvin(value)
    }

    /// Convert to Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius::new(self.0 - Celsius::CELSIUS_KELVIN_OFFSET)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Celsius {
        k.to_celsius()
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} K", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_kelvin_round_trip() {
        let t = Celsius::new(36.6);
        let back = t.to_kelvin().to_celsius();
        assert!((*t - *back).abs() < 1e-12, "round trip drifted: {back}");
    }

    #[test]
    fn test_total_ordering_handles_nan() {
        let mut temps = [
            Celsius::from(f64::NAN),
            Celsius::new(10.0),
            Celsius::new(-5.0),
        ];
        temps.sort();
        assert_eq!(temps[0], Celsius::new(-5.0));
        assert_eq!(temps[1], Celsius::new(10.0));
        assert!(temps[2].is_nan());
    }

    #[test]
    #[should_panic(expected = "below absolute zero")]
    fn test_celsius_rejects_below_absolute_zero() {
        let _ = Celsius::new(-300.0);
    }
}
