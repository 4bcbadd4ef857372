//! Error Types for the Estimation Pipeline
//!
//! ## Design Philosophy
//!
//! BoilPoint's error system follows the constraints of the embedded
//! targets it runs on:
//!
//! 1. **Small Size**: Every variant is a few bytes of inline data, so
//!    errors can be stored directly in the estimator state.
//!
//! 2. **No Heap Allocation**: Messages are `&'static str` only. The
//!    human-readable rendering comes from the `Display` impl, not from
//!    formatted strings built at failure time.
//!
//! 3. **Copy Semantics**: Errors are `Copy` so the latest one can be held
//!    in state and handed out to callers without ownership ceremony.
//!
//! ## Error Semantics
//!
//! The variants split by how the session reacts to them:
//!
//! - `PermissionDenied` - start precondition failed; terminal until the
//!   user grants location access externally (grants are observed
//!   reactively and re-trigger the start).
//! - `SensorUnavailable` - start precondition failed; terminal for the
//!   session, the hardware simply is not there.
//! - `InvalidReading` - one sample was non-physical; the sample is
//!   skipped, prior readings are retained, updates continue.
//! - `SourceFault` - an input stream reported a failure; updates halt
//!   until the next explicit start.
//!
//! None of these cross the public start/stop boundary as `Err`. They
//! surface on the estimator state for the presentation layer to render.

use thiserror_no_std::Error;

/// Result type for estimation operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;

/// A described failure reported by a platform input stream.
///
/// Platform adapters produce these from whatever their native error type
/// is; the reason string must be static so the fault can live in state
/// without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SourceFault {
    /// Human-readable description of the failure
    pub reason: &'static str,
}

impl SourceFault {
    /// Create a fault with the given description
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Estimation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EstimatorError {
    /// Location access refused by the user or platform policy
    #[error("Location access denied. Enable it in system settings to measure altitude")]
    PermissionDenied,

    /// No barometric hardware on this device
    #[error("Barometric sensor not available on this device")]
    SensorUnavailable,

    /// Sample was non-physical (NaN, non-positive, or outside the sensor envelope)
    #[error("Invalid sensor reading: {value}")]
    InvalidReading {
        /// The offending raw value
        value: f32,
    },

    /// An input stream reported a failure
    #[error("Sensor error: {reason}")]
    SourceFault {
        /// Description supplied by the platform adapter
        reason: &'static str,
    },
}

impl From<SourceFault> for EstimatorError {
    fn from(fault: SourceFault) -> Self {
        Self::SourceFault {
            reason: fault.reason,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EstimatorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::PermissionDenied => defmt::write!(fmt, "Location access denied"),
            Self::SensorUnavailable => defmt::write!(fmt, "Barometer not available"),
            Self::InvalidReading { value } => defmt::write!(fmt, "Invalid reading: {}", value),
            Self::SourceFault { reason } => defmt::write!(fmt, "Sensor error: {}", reason),
        }
    }
}
