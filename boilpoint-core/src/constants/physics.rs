//! Physical Constants for BoilPoint
//!
//! Conversion factors and fit coefficients used by the boiling-point
//! calculation. All values are based on established physics references or
//! the published empirical fit noted per constant.

// ===== UNIT CONVERSION FACTORS =====

/// Kilopascals to inches of mercury (inHg/kPa).
///
/// The boiling-point fit below is parameterized in inHg, so every pressure
/// reading passes through this factor first.
///
/// Source: NIST Special Publication 811, Appendix B
pub const KPA_TO_INHG: f32 = 0.2953;

/// Meters to feet (ft/m).
///
/// The altitude-pressure fit below is parameterized in feet.
///
/// Source: International yard and pound agreement (1959), exact value
pub const METERS_TO_FEET: f32 = 3.28084;

// ===== STANDARD ATMOSPHERE =====

/// Standard sea-level atmospheric pressure (kPa).
///
/// Reference pressure of the International Standard Atmosphere. Water
/// boils at 100°C at exactly this pressure.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_KPA: f32 = 101.325;

/// Standard sea-level atmospheric pressure (inHg).
///
/// Same reference point as [`SEA_LEVEL_PRESSURE_KPA`], expressed in the
/// unit the altitude-pressure fit works in.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_INHG: f32 = 29.921;

/// Boiling point of water at standard sea-level pressure (°C).
///
/// Used as a reference value in documentation and tests.
pub const WATER_BOILING_POINT_SEA_LEVEL_C: f32 = 100.0;

// ===== EMPIRICAL BOILING-POINT FIT =====
//
// The boiling temperature of water as a function of ambient pressure is
// well approximated over the terrestrial pressure range by a logarithmic
// fit of the Clausius-Clapeyron relation:
//
//     bp_F = SLOPE * ln(pressure_inHg) + OFFSET
//
// The fit is accurate to within ~0.1°F between 10 and 32 inHg, which
// covers every altitude a person can carry a stove to.

/// Slope of the logarithmic boiling-point fit (°F per ln(inHg)).
///
/// Source: Engineering fit of the CRC Handbook steam tables
pub const BOILING_FIT_SLOPE_F: f32 = 49.161;

/// Offset of the logarithmic boiling-point fit (°F).
///
/// Source: Engineering fit of the CRC Handbook steam tables
pub const BOILING_FIT_OFFSET_F: f32 = 44.932;

// ===== PRESSURE ALTITUDE MODEL =====
//
// Ambient pressure as a function of altitude in the troposphere, per the
// standard pressure-altitude relation:
//
//     pressure_inHg = SEA_LEVEL_PRESSURE_INHG
//                   * (1 - ALTITUDE_PRESSURE_COEFF_PER_FT * altitude_ft) ^ PRESSURE_ALTITUDE_EXPONENT
//
// Valid through the troposphere (~36,000 ft); above that the lapse-rate
// assumption behind the exponent no longer holds.

/// Linear altitude coefficient of the pressure-altitude relation (1/ft).
///
/// Equals the temperature lapse rate divided by the standard sea-level
/// temperature (0.0065 K/m over 288.15 K, converted to feet).
///
/// Source: NOAA pressure altitude formula, U.S. Standard Atmosphere 1976
pub const ALTITUDE_PRESSURE_COEFF_PER_FT: f32 = 0.000_006_875_3;

/// Exponent of the pressure-altitude relation (dimensionless).
///
/// Equals g·M/(R·L) for dry air under the standard lapse rate.
///
/// Source: NOAA pressure altitude formula, U.S. Standard Atmosphere 1976
pub const PRESSURE_ALTITUDE_EXPONENT: f32 = 5.2559;
