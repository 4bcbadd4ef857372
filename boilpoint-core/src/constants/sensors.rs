//! Sensor Plausibility Limits for BoilPoint
//!
//! Envelopes for what a healthy barometer or GPS receiver can physically
//! report. Readings outside these bounds are rejected as faults rather
//! than fed into the boiling-point math, where a bad value would either
//! produce nonsense or leave the logarithm's domain entirely.
//!
//! The limits are deliberately generous: they must accept every place a
//! person can stand on Earth while still catching stuck sensors, sign
//! errors, and uninitialized readings.

// ===== BAROMETRIC PRESSURE ENVELOPE =====

/// Minimum plausible ambient pressure (kPa).
///
/// Ambient pressure at the summit of Everest is ~31.5 kPa, the lowest a
/// surface-dwelling user can experience. Readings below this indicate a
/// sensor fault.
///
/// Source: Measured summit pressure, West et al., J. Appl. Physiol. 1983
pub const BARO_PRESSURE_MIN_KPA: f32 = 30.0;

/// Maximum plausible ambient pressure (kPa).
///
/// The highest sea-level pressure ever recorded is ~108.5 kPa (Siberian
/// high, Agata 1968); the Dead Sea shore adds another ~5 kPa of margin
/// below this limit. Readings above it indicate a sensor fault.
///
/// Source: WMO pressure records
pub const BARO_PRESSURE_MAX_KPA: f32 = 110.0;

// ===== GPS ALTITUDE ENVELOPE =====

/// Minimum plausible GPS altitude (m).
///
/// The lowest dry land on Earth is the Dead Sea shore at -430 m; the
/// margin covers GPS vertical error, which can reach tens of meters.
///
/// Source: Surveyed Dead Sea elevation
pub const GPS_ALTITUDE_MIN_M: f32 = -500.0;

/// Maximum plausible GPS altitude (m).
///
/// Capped at the tropopause, which is also where the pressure-altitude
/// relation used for the fallback boiling point stops being valid.
///
/// Source: U.S. Standard Atmosphere 1976, troposphere upper bound
pub const GPS_ALTITUDE_MAX_M: f32 = 11_000.0;

// ===== RELATIVE ALTITUDE ENVELOPE =====

/// Maximum plausible relative-altitude excursion (m).
///
/// Relative altitude is the barometer's integrated delta since the sensor
/// started. No continuous session on the surface can move more than the
/// full Everest ascent; larger magnitudes indicate drift or a fault.
pub const RELATIVE_ALTITUDE_LIMIT_M: f32 = 10_000.0;
