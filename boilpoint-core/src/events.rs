//! Event Types for the Sensor Fusion Pipeline
//!
//! ## Overview
//!
//! Two independent platform streams feed the estimator: satellite position
//! fixes and barometric samples. Both are represented here as small `Copy`
//! structs, plus a tagged [`SensorEvent`] union for code that wants to
//! script or replay a single merged stream (tests, demos, storage).
//!
//! ## Memory Model
//!
//! Events are designed for embedded delivery paths:
//! - **Size**: every variant is a handful of words, stack-friendly
//! - **Copy**: events can be handed through queues and callbacks without
//!   ownership ceremony
//! - **No references**: events own all their data, so they can outlive the
//!   callback that produced them
//!
//! ## Sanity Checking
//!
//! Each sample type knows its own plausibility envelope (from
//! [`constants::sensors`](crate::constants::sensors)) and exposes it as a
//! `sanity_check` method. The estimator rejects failing samples as
//! [`EstimatorError::InvalidReading`] before any physics runs on them;
//! in particular this keeps non-positive pressures out of the logarithm
//! in the boiling-point fit.

use crate::constants::sensors;
use crate::errors::{EstimatorError, EstimatorResult, SourceFault};
use crate::time::Timestamp;

/// A satellite position fix.
///
/// Only the vertical component matters here: the first fix of a session
/// latches the baseline altitude that anchors subsequent barometric
/// deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionFix {
    /// Altitude above mean sea level in meters
    pub altitude_m: f32,
    /// When the fix was obtained, in milliseconds
    pub timestamp: Timestamp,
}

impl PositionFix {
    /// Check the fix against the GPS plausibility envelope.
    ///
    /// Rejects non-finite altitudes and altitudes outside the range a
    /// person on Earth's surface can report. The upper bound doubles as
    /// the validity limit of the altitude-fallback pressure model.
    pub fn sanity_check(&self) -> EstimatorResult<()> {
        if !self.altitude_m.is_finite()
            || self.altitude_m < sensors::GPS_ALTITUDE_MIN_M
            || self.altitude_m > sensors::GPS_ALTITUDE_MAX_M
        {
            return Err(EstimatorError::InvalidReading {
                value: self.altitude_m,
            });
        }
        Ok(())
    }
}

/// A barometric altimeter sample.
///
/// The barometer reports absolute pressure plus the integrated altitude
/// change since the sensor started (not absolute altitude).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressureSample {
    /// Altitude change since the sensor started, in meters
    pub relative_altitude_m: f32,
    /// Ambient pressure in kilopascals
    pub pressure_kpa: f32,
    /// When the sample was taken, in milliseconds
    pub timestamp: Timestamp,
}

impl PressureSample {
    /// Check the sample against the barometric plausibility envelope.
    ///
    /// Rejects non-finite values, pressures outside the terrestrial range
    /// (which also guards the `ln` in the boiling-point fit against
    /// non-positive input), and relative-altitude excursions no surface
    /// session can produce.
    pub fn sanity_check(&self) -> EstimatorResult<()> {
        if !self.pressure_kpa.is_finite()
            || self.pressure_kpa < sensors::BARO_PRESSURE_MIN_KPA
            || self.pressure_kpa > sensors::BARO_PRESSURE_MAX_KPA
        {
            return Err(EstimatorError::InvalidReading {
                value: self.pressure_kpa,
            });
        }
        if !self.relative_altitude_m.is_finite()
            || self.relative_altitude_m.abs() > sensors::RELATIVE_ALTITUDE_LIMIT_M
        {
            return Err(EstimatorError::InvalidReading {
                value: self.relative_altitude_m,
            });
        }
        Ok(())
    }
}

/// A single event from either input stream.
///
/// The estimator itself exposes one handler per stream; this union exists
/// for callers that merge both streams into one ordered sequence, such as
/// the integration tests and the replay demos.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorEvent {
    /// A satellite position fix arrived
    Fix(PositionFix),
    /// A barometric sample arrived
    Sample(PressureSample),
    /// An input stream reported a failure
    Fault(SourceFault),
}

impl SensorEvent {
    /// Get the event timestamp, if the event carries one
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            SensorEvent::Fix(fix) => Some(fix.timestamp),
            SensorEvent::Sample(sample) => Some(sample.timestamp),
            SensorEvent::Fault(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausible_fix_accepted() {
        let fix = PositionFix {
            altitude_m: 1600.0,
            timestamp: 1000,
        };
        assert!(fix.sanity_check().is_ok());

        // Dead Sea shore is the lowest walkable point
        let low = PositionFix {
            altitude_m: -430.0,
            timestamp: 1000,
        };
        assert!(low.sanity_check().is_ok());
    }

    #[test]
    fn implausible_fix_rejected() {
        for altitude_m in [f32::NAN, f32::INFINITY, -2000.0, 25_000.0] {
            let fix = PositionFix {
                altitude_m,
                timestamp: 0,
            };
            assert!(
                matches!(
                    fix.sanity_check(),
                    Err(EstimatorError::InvalidReading { .. })
                ),
                "altitude {altitude_m} should be rejected"
            );
        }
    }

    #[test]
    fn plausible_sample_accepted() {
        let sample = PressureSample {
            relative_altitude_m: -12.5,
            pressure_kpa: 101.3,
            timestamp: 1000,
        };
        assert!(sample.sanity_check().is_ok());
    }

    #[test]
    fn non_positive_pressure_rejected() {
        for pressure_kpa in [0.0, -5.0, f32::NAN, f32::NEG_INFINITY] {
            let sample = PressureSample {
                relative_altitude_m: 0.0,
                pressure_kpa,
                timestamp: 0,
            };
            assert!(
                matches!(
                    sample.sanity_check(),
                    Err(EstimatorError::InvalidReading { .. })
                ),
                "pressure {pressure_kpa} should be rejected"
            );
        }
    }

    #[test]
    fn out_of_envelope_pressure_rejected() {
        // Below Everest-summit ambient and above the strongest recorded high
        for pressure_kpa in [20.0, 150.0] {
            let sample = PressureSample {
                relative_altitude_m: 0.0,
                pressure_kpa,
                timestamp: 0,
            };
            assert!(sample.sanity_check().is_err());
        }
    }

    #[test]
    fn runaway_relative_altitude_rejected() {
        let sample = PressureSample {
            relative_altitude_m: 50_000.0,
            pressure_kpa: 90.0,
            timestamp: 0,
        };
        assert!(sample.sanity_check().is_err());
    }

    #[test]
    fn event_timestamp_accessor() {
        let event = SensorEvent::Fix(PositionFix {
            altitude_m: 10.0,
            timestamp: 42,
        });
        assert_eq!(event.timestamp(), Some(42));

        let fault = SensorEvent::Fault(SourceFault::new("gps lost"));
        assert_eq!(fault.timestamp(), None);
    }
}
