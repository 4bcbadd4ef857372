//! The Boiling-Point Estimator
//!
//! ## Overview
//!
//! This is the state reducer at the center of the crate. It owns one
//! [`EstimatorState`] and mutates it from exactly three handlers, one per
//! kind of input:
//!
//! ```text
//! PositionFix    ──→ on_position_fix    ──┐
//! PressureSample ──→ on_pressure_sample ──┼──→ EstimatorState
//! SourceFault    ──→ halt               ──┘
//! ```
//!
//! The estimator has no notion of sensors, permissions, or scheduling;
//! the [`monitor`](crate::monitor) owns all of that and feeds the
//! handlers from a single call site, which is what serializes the two
//! input streams against each other.
//!
//! ## Fusion Rules
//!
//! - The **first** position fix of a session latches the baseline
//!   altitude. Later fixes never move it; the barometer's relative
//!   deltas are anchored to where the session started.
//! - Until a pressure sample is accepted, the boiling point comes from
//!   the altitude fallback so the display has a value while the
//!   barometer warms up.
//! - From the first accepted pressure sample onward the measured
//!   pressure takes precedence permanently for the session; later fixes
//!   no longer touch the boiling point.
//!
//! ## Session vs Display State
//!
//! The baseline latch, the pressure-precedence latch, and the error slot
//! are *session* state and reset when a session begins. The last
//! altitude/pressure/boiling-point readings are *display* state: they
//! survive `stop` and are only ever overwritten by newer data, so a
//! display can keep showing the last known values while inactive.

use crate::boiling;
use crate::errors::EstimatorError;
use crate::events::{PositionFix, PressureSample, SensorEvent};
use crate::log_warn;

/// Fused output of the estimation pipeline.
///
/// A plain snapshot struct: every field is readable at any time and
/// `None` simply means "no data yet".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EstimatorState {
    /// First GPS altitude of the session; zero-reference for barometric deltas
    pub baseline_altitude_m: Option<f32>,
    /// Most recent accepted ambient pressure (kPa)
    pub last_pressure_kpa: Option<f32>,
    /// Most recent fused absolute altitude (m)
    pub last_altitude_m: Option<f32>,
    /// Most recent boiling-point estimate (°C)
    pub last_boiling_point_c: Option<f32>,
    /// Most recent error, if any; rendered by the display layer
    pub error: Option<EstimatorError>,
    /// Whether a monitoring session is currently active
    pub active: bool,
}

/// State reducer fusing position fixes and barometric samples into a
/// boiling-point estimate.
///
/// Constructed once and driven through [`begin_session`], the event
/// handlers, and [`end_session`]. See the module docs for the fusion
/// rules.
///
/// [`begin_session`]: BoilingPointEstimator::begin_session
/// [`end_session`]: BoilingPointEstimator::end_session
#[derive(Debug, Clone, Default)]
pub struct BoilingPointEstimator {
    state: EstimatorState,
    /// Pressure-precedence latch: set once a sample is accepted this session
    pressure_seen: bool,
}

impl BoilingPointEstimator {
    /// Create an estimator with empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a monitoring session.
    ///
    /// Resets session state (baseline latch, precedence latch, error) and
    /// activates the handlers. Display state is retained.
    pub fn begin_session(&mut self) {
        self.state.baseline_altitude_m = None;
        self.state.error = None;
        self.state.active = true;
        self.pressure_seen = false;
    }

    /// End the session without clearing display state
    pub fn end_session(&mut self) {
        self.state.active = false;
    }

    /// Record a failure and halt updates.
    ///
    /// Used for start-precondition failures and for stream faults; either
    /// way the estimator goes (or stays) inactive with the error surfaced
    /// on state.
    pub fn halt(&mut self, error: EstimatorError) {
        log_warn!("estimator halted: {:?}", error);
        self.state.error = Some(error);
        self.state.active = false;
    }

    /// Handle a satellite position fix.
    ///
    /// Latches the baseline on the first fix of the session and keeps the
    /// altitude-fallback boiling point current until measured pressure
    /// takes over. Ignored while inactive.
    pub fn on_position_fix(&mut self, fix: PositionFix) {
        if !self.state.active {
            return;
        }

        if let Err(error) = fix.sanity_check() {
            self.reject(error);
            return;
        }

        if self.state.baseline_altitude_m.is_none() {
            self.state.baseline_altitude_m = Some(fix.altitude_m);
            self.state.last_altitude_m = Some(fix.altitude_m);
        }

        if !self.pressure_seen {
            if let Some(altitude_m) = self.state.last_altitude_m {
                match boiling::boiling_point_c_from_altitude_m(altitude_m) {
                    Ok(bp) => {
                        self.clear_rejection();
                        self.state.last_boiling_point_c = Some(bp);
                    }
                    Err(error) => self.reject(error),
                }
            }
        }
    }

    /// Handle a barometric sample.
    ///
    /// Invalid samples are rejected, retaining all prior readings; the
    /// session stays active. An accepted sample records the pressure,
    /// re-anchors the fused altitude off the baseline, and recomputes the
    /// boiling point from measured pressure. Ignored while inactive.
    pub fn on_pressure_sample(&mut self, sample: PressureSample) {
        if !self.state.active {
            return;
        }

        let bp = sample
            .sanity_check()
            .and_then(|_| boiling::boiling_point_c_from_pressure_kpa(sample.pressure_kpa));
        let bp = match bp {
            Ok(bp) => bp,
            Err(error) => {
                self.reject(error);
                return;
            }
        };

        self.clear_rejection();
        self.pressure_seen = true;
        self.state.last_pressure_kpa = Some(sample.pressure_kpa);

        if let Some(baseline_m) = self.state.baseline_altitude_m {
            self.state.last_altitude_m = Some(baseline_m + sample.relative_altitude_m);
        }

        self.state.last_boiling_point_c = Some(bp);
    }

    /// Dispatch a merged-stream event to the matching handler
    pub fn apply(&mut self, event: SensorEvent) {
        match event {
            SensorEvent::Fix(fix) => self.on_position_fix(fix),
            SensorEvent::Sample(sample) => self.on_pressure_sample(sample),
            SensorEvent::Fault(fault) => self.halt(fault.into()),
        }
    }

    /// Current fused state
    pub fn state(&self) -> &EstimatorState {
        &self.state
    }

    /// Copy of the current fused state
    pub fn snapshot(&self) -> EstimatorState {
        self.state
    }

    /// Whether a session is active
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Most recent boiling-point estimate (°C)
    pub fn boiling_point_c(&self) -> Option<f32> {
        self.state.last_boiling_point_c
    }

    /// Most recent fused altitude (m)
    pub fn altitude_m(&self) -> Option<f32> {
        self.state.last_altitude_m
    }

    /// Most recent accepted pressure (kPa)
    pub fn pressure_kpa(&self) -> Option<f32> {
        self.state.last_pressure_kpa
    }

    /// Most recent error, if any
    pub fn error(&self) -> Option<EstimatorError> {
        self.state.error
    }

    /// Record a skipped sample without deactivating
    fn reject(&mut self, error: EstimatorError) {
        log_warn!("sample rejected: {:?}", error);
        self.state.error = Some(error);
    }

    /// A good sample clears a lingering per-sample rejection.
    ///
    /// Only transient rejections are cleared; a terminal error never
    /// coexists with an active session in the first place.
    fn clear_rejection(&mut self) {
        if matches!(self.state.error, Some(EstimatorError::InvalidReading { .. })) {
            self.state.error = None;
        }
    }
}
