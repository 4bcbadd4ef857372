//! Platform Capability Traits
//!
//! ## Overview
//!
//! The estimator never talks to hardware or OS services directly. Each
//! platform provides two capabilities behind small traits, and the
//! monitor consumes them through those traits only:
//!
//! - [`LocationSource`] - satellite positioning plus the permission model
//!   that gates it
//! - [`BarometricSource`] - the relative altimeter, with an availability
//!   probe for devices that lack the hardware
//!
//! ## Delivery Model
//!
//! Platform sensor APIs are callback-driven; this crate flattens them
//! into non-blocking polls in the `nb` style used across the embedded
//! HAL ecosystem:
//!
//! ```text
//! OS callback → adapter's internal buffer → poll_*() → estimator
//! ```
//!
//! `Err(nb::Error::WouldBlock)` means "no new data yet". A real failure is
//! `Err(nb::Error::Other(SourceFault))` with a static description. The
//! monitor drains each source to `WouldBlock` on every poll, which gives
//! the serialization the estimator state requires: both streams are
//! reduced from exactly one call site.

use crate::errors::SourceFault;
use crate::events::{PositionFix, PressureSample};

/// Location permission as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PermissionState {
    /// The user has not been asked yet
    NotDetermined,
    /// Access granted
    Granted,
    /// The user refused access
    Denied,
    /// Access blocked by device policy (parental controls, MDM)
    Restricted,
}

impl PermissionState {
    /// Whether this state blocks monitoring until an external change
    pub const fn is_blocked(&self) -> bool {
        matches!(self, PermissionState::Denied | PermissionState::Restricted)
    }
}

/// Satellite positioning capability.
///
/// Implementations wrap the platform location service. `start`/`stop`
/// bracket the platform subscription; fixes buffered in between are
/// handed out through `poll_fix`.
pub trait LocationSource {
    /// Current permission state, re-read on every poll cycle
    fn permission(&self) -> PermissionState;

    /// Ask the platform to prompt the user for access.
    ///
    /// The answer arrives asynchronously as a [`permission`] change; the
    /// monitor observes it on a later poll.
    ///
    /// [`permission`]: LocationSource::permission
    fn request_permission(&mut self);

    /// Subscribe to position updates
    fn start(&mut self);

    /// Unsubscribe from position updates
    fn stop(&mut self);

    /// Take the next buffered fix, if any
    fn poll_fix(&mut self) -> nb::Result<PositionFix, SourceFault>;
}

/// Barometric altimeter capability.
///
/// Implementations wrap the platform motion/pressure service.
pub trait BarometricSource {
    /// Whether this device has barometric hardware at all
    fn is_available(&self) -> bool;

    /// Subscribe to altimeter updates.
    ///
    /// Starting the sensor also resets its relative-altitude origin;
    /// samples report deltas from this moment.
    fn start(&mut self);

    /// Unsubscribe from altimeter updates
    fn stop(&mut self);

    /// Take the next buffered sample, if any
    fn poll_sample(&mut self) -> nb::Result<PressureSample, SourceFault>;
}
