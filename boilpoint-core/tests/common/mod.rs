//! Common test utilities for integration tests
//!
//! Provides scripted mock implementations of the two platform
//! capabilities. Each mock hands out a pre-loaded sequence of results
//! and records lifecycle calls so tests can assert on subscription
//! behavior (no double-subscribe, unsubscribe on stop, etc).

#![allow(dead_code)]

use std::collections::VecDeque;

use boilpoint_core::{
    BarometricSource, LocationSource, PermissionState, PositionFix, PressureSample, SourceFault,
};

/// Scripted location service.
///
/// `poll_fix` pops the front of the script; an empty script reads as
/// `WouldBlock`, matching a live service with no new fix.
pub struct MockLocation {
    /// Permission reported to the monitor; tests flip this to simulate
    /// the user answering the platform prompt
    pub permission: PermissionState,
    script: VecDeque<Result<PositionFix, SourceFault>>,
    pub start_count: usize,
    pub stop_count: usize,
    pub permission_requests: usize,
}

impl MockLocation {
    pub fn granted() -> Self {
        Self::with_permission(PermissionState::Granted)
    }

    pub fn with_permission(permission: PermissionState) -> Self {
        Self {
            permission,
            script: VecDeque::new(),
            start_count: 0,
            stop_count: 0,
            permission_requests: 0,
        }
    }

    /// Queue a fix for the next polls
    pub fn push_fix(&mut self, altitude_m: f32, timestamp: u64) {
        self.script.push_back(Ok(PositionFix {
            altitude_m,
            timestamp,
        }));
    }

    /// Queue a stream failure
    pub fn push_fault(&mut self, reason: &'static str) {
        self.script.push_back(Err(SourceFault::new(reason)));
    }

    /// Whether the service currently has an active subscription
    pub fn subscribed(&self) -> bool {
        self.start_count > self.stop_count
    }
}

impl LocationSource for MockLocation {
    fn permission(&self) -> PermissionState {
        self.permission
    }

    fn request_permission(&mut self) {
        self.permission_requests += 1;
    }

    fn start(&mut self) {
        self.start_count += 1;
    }

    fn stop(&mut self) {
        self.stop_count += 1;
    }

    fn poll_fix(&mut self) -> nb::Result<PositionFix, SourceFault> {
        match self.script.pop_front() {
            Some(Ok(fix)) => Ok(fix),
            Some(Err(fault)) => Err(nb::Error::Other(fault)),
            None => Err(nb::Error::WouldBlock),
        }
    }
}

/// Scripted barometric altimeter.
pub struct MockBarometer {
    /// Hardware availability reported to the monitor
    pub available: bool,
    script: VecDeque<Result<PressureSample, SourceFault>>,
    pub start_count: usize,
    pub stop_count: usize,
}

impl MockBarometer {
    pub fn available() -> Self {
        Self {
            available: true,
            script: VecDeque::new(),
            start_count: 0,
            stop_count: 0,
        }
    }

    pub fn missing() -> Self {
        Self {
            available: false,
            ..Self::available()
        }
    }

    /// Queue a sample for the next polls
    pub fn push_sample(&mut self, pressure_kpa: f32, relative_altitude_m: f32, timestamp: u64) {
        self.script.push_back(Ok(PressureSample {
            relative_altitude_m,
            pressure_kpa,
            timestamp,
        }));
    }

    /// Queue a stream failure
    pub fn push_fault(&mut self, reason: &'static str) {
        self.script.push_back(Err(SourceFault::new(reason)));
    }

    /// Whether the sensor currently has an active subscription
    pub fn subscribed(&self) -> bool {
        self.start_count > self.stop_count
    }
}

impl BarometricSource for MockBarometer {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start(&mut self) {
        self.start_count += 1;
    }

    fn stop(&mut self) {
        self.stop_count += 1;
    }

    fn poll_sample(&mut self) -> nb::Result<PressureSample, SourceFault> {
        match self.script.pop_front() {
            Some(Ok(sample)) => Ok(sample),
            Some(Err(fault)) => Err(nb::Error::Other(fault)),
            None => Err(nb::Error::WouldBlock),
        }
    }
}
