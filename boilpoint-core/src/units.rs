//! Unit Conversion and Display Formatting
//!
//! ## Overview
//!
//! The estimator speaks metric only: meters, kilopascals, degrees Celsius.
//! Everything a display layer needs beyond that is a pure, stateless
//! formatting concern and lives here: unit enums, conversion functions,
//! and heap-free formatting into [`heapless::String`] buffers.
//!
//! Each displayed quantity has its own unit toggle, mirroring how people
//! actually mix units (a °F display alongside a kPa pressure readout is a
//! perfectly normal preference). The three toggles are bundled in
//! [`UnitPreferences`].
//!
//! ## Formats
//!
//! The formats are fixed per quantity:
//!
//! ```text
//! Quantity     Metric        Imperial
//! -------------------------------------
//! Temperature  "95.2°"       "203.4°"
//! Altitude     "1600 m"      "5249 ft"
//! Pressure     "83.5 kPa"    "24.66 inHg"
//! ```

use core::fmt::Write;

use crate::constants::physics::{KPA_TO_INHG, METERS_TO_FEET};

/// Fixed-capacity buffer for one formatted quantity.
///
/// 16 bytes covers the widest realistic rendering ("-9999.9°" is 9).
pub type DisplayBuf = heapless::String<16>;

/// Temperature display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

/// Altitude display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AltitudeUnit {
    /// Meters
    Meters,
    /// Feet
    Feet,
}

/// Pressure display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    /// Kilopascals
    Kilopascals,
    /// Inches of mercury
    InchesOfMercury,
}

/// One unit toggle per displayed quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPreferences {
    /// Unit for the boiling-point readout
    pub temperature: TemperatureUnit,
    /// Unit for the altitude readout
    pub altitude: AltitudeUnit,
    /// Unit for the pressure readout
    pub pressure: PressureUnit,
}

impl Default for UnitPreferences {
    /// Imperial across the board, matching the shipped app default
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Fahrenheit,
            altitude: AltitudeUnit::Feet,
            pressure: PressureUnit::InchesOfMercury,
        }
    }
}

impl UnitPreferences {
    /// All-metric preferences
    pub const fn metric() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            altitude: AltitudeUnit::Meters,
            pressure: PressureUnit::Kilopascals,
        }
    }

    /// Format a temperature given in °C per the temperature preference
    pub fn format_temperature(&self, celsius: f32) -> DisplayBuf {
        format_temperature(celsius, self.temperature)
    }

    /// Format an altitude given in meters per the altitude preference
    pub fn format_altitude(&self, meters: f32) -> DisplayBuf {
        format_altitude(meters, self.altitude)
    }

    /// Format a pressure given in kPa per the pressure preference
    pub fn format_pressure(&self, kpa: f32) -> DisplayBuf {
        format_pressure(kpa, self.pressure)
    }
}

/// Convert °C to °F
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert meters to feet
pub fn meters_to_feet(meters: f32) -> f32 {
    meters * METERS_TO_FEET
}

/// Convert kilopascals to inches of mercury
pub fn kpa_to_inhg(kpa: f32) -> f32 {
    kpa * KPA_TO_INHG
}

/// Format a temperature in °C for display in the given unit
pub fn format_temperature(celsius: f32, unit: TemperatureUnit) -> DisplayBuf {
    let mut out = DisplayBuf::new();
    let value = match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    };
    let _ = write!(out, "{value:.1}°");
    out
}

/// Format an altitude in meters for display in the given unit
pub fn format_altitude(meters: f32, unit: AltitudeUnit) -> DisplayBuf {
    let mut out = DisplayBuf::new();
    let _ = match unit {
        AltitudeUnit::Meters => write!(out, "{meters:.0} m"),
        AltitudeUnit::Feet => write!(out, "{:.0} ft", meters_to_feet(meters)),
    };
    out
}

/// Format a pressure in kPa for display in the given unit
pub fn format_pressure(kpa: f32, unit: PressureUnit) -> DisplayBuf {
    let mut out = DisplayBuf::new();
    let _ = match unit {
        PressureUnit::Kilopascals => write!(out, "{kpa:.1} kPa"),
        PressureUnit::InchesOfMercury => write!(out, "{:.2} inHg", kpa_to_inhg(kpa)),
    };
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 1e-4);
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < 1e-4);
        assert!((meters_to_feet(1600.0) - 5249.3).abs() < 0.1);
        assert!((kpa_to_inhg(101.325) - 29.92).abs() < 0.01);
    }

    #[test]
    fn temperature_formats() {
        assert_eq!(
            format_temperature(95.25, TemperatureUnit::Celsius).as_str(),
            "95.2°"
        );
        assert_eq!(
            format_temperature(100.0, TemperatureUnit::Fahrenheit).as_str(),
            "212.0°"
        );
    }

    #[test]
    fn altitude_formats() {
        assert_eq!(format_altitude(1600.4, AltitudeUnit::Meters).as_str(), "1600 m");
        assert_eq!(format_altitude(1600.0, AltitudeUnit::Feet).as_str(), "5249 ft");
    }

    #[test]
    fn pressure_formats() {
        assert_eq!(
            format_pressure(83.54, PressureUnit::Kilopascals).as_str(),
            "83.5 kPa"
        );
        assert_eq!(
            format_pressure(101.325, PressureUnit::InchesOfMercury).as_str(),
            "29.92 inHg"
        );
    }

    #[test]
    fn preferences_bundle() {
        let prefs = UnitPreferences::metric();
        assert_eq!(prefs.format_temperature(100.0).as_str(), "100.0°");
        assert_eq!(prefs.format_altitude(0.0).as_str(), "0 m");
        assert_eq!(prefs.format_pressure(101.3).as_str(), "101.3 kPa");

        // Shipped default is imperial
        let default = UnitPreferences::default();
        assert_eq!(default.temperature, TemperatureUnit::Fahrenheit);
    }
}
