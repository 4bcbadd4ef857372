//! Monitoring Session Management
//!
//! ## Overview
//!
//! [`AltitudeMonitor`] is the session owner around the estimator. It
//! holds the two platform sources, runs the start preconditions, brackets
//! their subscriptions, and drains both streams into the estimator from a
//! single call site:
//!
//! ```text
//!            ┌────────────────── AltitudeMonitor ──────────────────┐
//!            │                                                     │
//! LocationSource ── poll_fix ────┐                                 │
//!            │                   ├──→ BoilingPointEstimator        │
//! BarometricSource ─ poll_sample ┘         (serialized)            │
//!            │                                                     │
//!            └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! Exactly two operational states, Inactive and Active:
//!
//! - `start()` - Inactive → Active when the preconditions hold
//!   (location permission not refused, barometric hardware present);
//!   otherwise stays Inactive with the error surfaced on state. Calling
//!   `start()` while active is a no-op, so the sources can never be
//!   double-subscribed.
//! - `stop()` - Active → Inactive. Sources are unsubscribed; the last
//!   readings stay visible.
//! - A stream fault mid-session also drops to Inactive, with the fault
//!   description on state.
//!
//! Permission is observed reactively on every poll: a grant that arrives
//! after a `PermissionDenied` start failure re-triggers `start()`
//! automatically, and a mid-session revocation halts the session.

use crate::errors::EstimatorError;
use crate::estimator::{BoilingPointEstimator, EstimatorState};
use crate::log_info;
use crate::traits::{BarometricSource, LocationSource, PermissionState};

/// Session owner: preconditions, source lifecycle, and serialized
/// delivery into the estimator.
///
/// Generic over the two platform capabilities so hosts, firmware, and
/// tests each bring their own adapters.
#[derive(Debug)]
pub struct AltitudeMonitor<L: LocationSource, B: BarometricSource> {
    location: L,
    barometer: B,
    estimator: BoilingPointEstimator,
}

impl<L: LocationSource, B: BarometricSource> AltitudeMonitor<L, B> {
    /// Create an inactive monitor over the given platform sources
    pub fn new(location: L, barometer: B) -> Self {
        Self {
            location,
            barometer,
            estimator: BoilingPointEstimator::new(),
        }
    }

    /// Start a monitoring session.
    ///
    /// No-op while already active. Precondition failures do not return an
    /// error; they surface on [`state`](AltitudeMonitor::state) like
    /// every other failure. A `NotDetermined` permission triggers the
    /// platform prompt and start proceeds; updates begin once the grant
    /// arrives.
    pub fn start(&mut self) {
        if self.estimator.is_active() {
            return;
        }

        let permission = self.location.permission();
        if permission.is_blocked() {
            self.estimator.halt(EstimatorError::PermissionDenied);
            return;
        }
        if permission == PermissionState::NotDetermined {
            self.location.request_permission();
        }

        if !self.barometer.is_available() {
            self.estimator.halt(EstimatorError::SensorUnavailable);
            return;
        }

        log_info!("monitoring session started");
        self.estimator.begin_session();
        self.location.start();
        self.barometer.start();
    }

    /// Stop the session, retaining the last readings for display
    pub fn stop(&mut self) {
        self.location.stop();
        self.barometer.stop();
        self.estimator.end_session();
        log_info!("monitoring session stopped");
    }

    /// Drain both sources into the estimator.
    ///
    /// Call from the application's update loop. All estimator mutation
    /// happens inside this method and `start`/`stop`, on the caller's
    /// thread; that is the serialization the state model requires.
    pub fn poll(&mut self) {
        self.observe_permission();

        if !self.estimator.is_active() {
            return;
        }

        loop {
            match self.location.poll_fix() {
                Ok(fix) => self.estimator.on_position_fix(fix),
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(fault)) => {
                    self.halt_session(fault.into());
                    return;
                }
            }
        }

        loop {
            match self.barometer.poll_sample() {
                Ok(sample) => self.estimator.on_pressure_sample(sample),
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(fault)) => {
                    self.halt_session(fault.into());
                    return;
                }
            }
        }
    }

    /// Current fused state
    pub fn state(&self) -> &EstimatorState {
        self.estimator.state()
    }

    /// Copy of the current fused state
    pub fn snapshot(&self) -> EstimatorState {
        self.estimator.snapshot()
    }

    /// Whether a session is active
    pub fn is_active(&self) -> bool {
        self.estimator.is_active()
    }

    /// Most recent boiling-point estimate (°C)
    pub fn boiling_point_c(&self) -> Option<f32> {
        self.estimator.boiling_point_c()
    }

    /// Most recent fused altitude (m)
    pub fn altitude_m(&self) -> Option<f32> {
        self.estimator.altitude_m()
    }

    /// Most recent accepted pressure (kPa)
    pub fn pressure_kpa(&self) -> Option<f32> {
        self.estimator.pressure_kpa()
    }

    /// Most recent error, if any
    pub fn error(&self) -> Option<EstimatorError> {
        self.estimator.error()
    }

    /// Access the location adapter (platform glue, tests)
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Access the barometer adapter (platform glue, tests)
    pub fn barometer_mut(&mut self) -> &mut B {
        &mut self.barometer
    }

    /// React to permission transitions since the last poll.
    ///
    /// A grant after a denied start re-attempts the session; a
    /// revocation mid-session halts it.
    fn observe_permission(&mut self) {
        let permission = self.location.permission();

        if permission.is_blocked() {
            if self.estimator.is_active() {
                self.halt_session(EstimatorError::PermissionDenied);
            }
            return;
        }

        if permission == PermissionState::Granted
            && !self.estimator.is_active()
            && self.estimator.error() == Some(EstimatorError::PermissionDenied)
        {
            self.start();
        }
    }

    /// Halt the session and unsubscribe the sources
    fn halt_session(&mut self, error: EstimatorError) {
        self.location.stop();
        self.barometer.stop();
        self.estimator.halt(error);
    }
}
