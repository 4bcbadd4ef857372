//! Boiling-Point Physics
//!
//! ## Physics Background
//!
//! ### Why Altitude Changes the Boiling Point
//!
//! Water boils when its vapor pressure equals the ambient pressure. Lower
//! the ambient pressure and less thermal energy is needed to get there, so
//! the boiling temperature drops. The relationship between vapor pressure
//! and temperature is governed by the Clausius-Clapeyron relation, which
//! over the terrestrial pressure range is captured well by a logarithmic
//! fit:
//!
//! ```text
//! bp_F = 49.161 × ln(pressure_inHg) + 44.932
//! ```
//!
//! Some reference points the fit reproduces:
//!
//! ```text
//! Location        Pressure     Boiling point
//! ----------------------------------------------
//! Dead Sea        ~31.8 inHg   ~101°C
//! Sea level       29.92 inHg   100.0°C
//! Denver (1600m)  ~24.7 inHg   ~94.7°C
//! La Paz (3600m)  ~19.3 inHg   ~87.5°C
//! Everest summit  ~9.3 inHg    ~70°C
//! ```
//!
//! ### The Altitude Fallback
//!
//! Before the first barometric sample arrives, ambient pressure can be
//! predicted from GPS altitude alone using the standard pressure-altitude
//! relation for the troposphere:
//!
//! ```text
//! pressure_inHg = 29.921 × (1 - 0.0000068753 × altitude_ft)^5.2559
//! ```
//!
//! This assumes a standard atmosphere, so a weather system can shift the
//! real pressure by a few percent (roughly ±1°C of boiling point). The
//! measured pressure therefore takes precedence as soon as it exists.
//!
//! ## Domain Guard
//!
//! `ln` is undefined for non-positive input. A pressure of zero or below
//! is physically impossible and means the sensor is faulting, so it is
//! rejected as [`EstimatorError::InvalidReading`] instead of being fed to
//! the logarithm.
//!
//! ## Why libm?
//!
//! This crate is `no_std` compatible; `libm` provides the software
//! `logf`/`powf` implementations that work on targets without an FPU or a
//! standard library.

use crate::constants::physics::{
    ALTITUDE_PRESSURE_COEFF_PER_FT, BOILING_FIT_OFFSET_F, BOILING_FIT_SLOPE_F, KPA_TO_INHG,
    METERS_TO_FEET, PRESSURE_ALTITUDE_EXPONENT, SEA_LEVEL_PRESSURE_INHG,
};
use crate::errors::{EstimatorError, EstimatorResult};

/// Boiling point of water in °F at the given pressure in inHg.
///
/// Callers must guarantee `pressure_inhg > 0`; the public kPa entry point
/// below enforces that.
fn boiling_point_f_from_inhg(pressure_inhg: f32) -> f32 {
    BOILING_FIT_SLOPE_F * libm::logf(pressure_inhg) + BOILING_FIT_OFFSET_F
}

/// Boiling point of water in °C at the given ambient pressure in kPa.
///
/// Non-finite or non-positive pressures are a sensor-fault condition and
/// return [`EstimatorError::InvalidReading`] rather than reaching the
/// logarithm.
///
/// ## Example
///
/// ```rust
/// use boilpoint_core::boiling::boiling_point_c_from_pressure_kpa;
///
/// let bp = boiling_point_c_from_pressure_kpa(101.325).unwrap();
/// assert!((bp - 100.0).abs() < 0.5);
/// ```
pub fn boiling_point_c_from_pressure_kpa(pressure_kpa: f32) -> EstimatorResult<f32> {
    if !pressure_kpa.is_finite() || pressure_kpa <= 0.0 {
        return Err(EstimatorError::InvalidReading {
            value: pressure_kpa,
        });
    }

    let pressure_inhg = pressure_kpa * KPA_TO_INHG;
    let bp_f = boiling_point_f_from_inhg(pressure_inhg);
    Ok(fahrenheit_to_celsius(bp_f))
}

/// Predicted ambient pressure in inHg at the given altitude in feet.
///
/// Standard pressure-altitude relation, valid through the troposphere.
/// The base of the power term is clamped at zero so altitudes beyond the
/// model's validity degrade to zero pressure instead of producing NaN
/// from a negative base.
pub fn pressure_inhg_at_altitude_ft(altitude_ft: f32) -> f32 {
    let base = 1.0 - ALTITUDE_PRESSURE_COEFF_PER_FT * altitude_ft;
    let base = if base > 0.0 { base } else { 0.0 };
    SEA_LEVEL_PRESSURE_INHG * libm::powf(base, PRESSURE_ALTITUDE_EXPONENT)
}

/// Boiling point of water in °C at the given altitude in meters.
///
/// Fallback path used before any barometric sample has arrived: predicts
/// ambient pressure from altitude under a standard atmosphere, then
/// applies the same boiling-point fit as the pressure path.
///
/// Altitudes outside the plausibility envelope are a fault condition, as
/// with pressure.
pub fn boiling_point_c_from_altitude_m(altitude_m: f32) -> EstimatorResult<f32> {
    if !altitude_m.is_finite() {
        return Err(EstimatorError::InvalidReading { value: altitude_m });
    }

    let altitude_ft = altitude_m * METERS_TO_FEET;
    let pressure_inhg = pressure_inhg_at_altitude_ft(altitude_ft);
    if pressure_inhg <= 0.0 {
        return Err(EstimatorError::InvalidReading { value: altitude_m });
    }

    Ok(fahrenheit_to_celsius(boiling_point_f_from_inhg(
        pressure_inhg,
    )))
}

/// Convert °F to °C
fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
