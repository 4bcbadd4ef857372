//! Physical Constants and Sensor Limits for BoilPoint
//!
//! This module centralizes every numeric constant used by the estimation
//! pipeline. Values are grouped by concern:
//!
//! - [`physics`] - Unit conversion factors and the empirical boiling-point
//!   fit coefficients. These are fixed properties of the physical world
//!   (or of the published fit) and should never need tuning.
//! - [`sensors`] - Plausibility envelopes for barometric and GPS readings.
//!   These encode what a healthy sensor can report on Earth; readings
//!   outside them indicate hardware faults, not unusual weather.
//!
//! Keeping limits here rather than scattered through the handlers makes the
//! fault thresholds auditable in one place.

pub mod physics;
pub mod sensors;
