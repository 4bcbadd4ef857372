//! Estimation core for BoilPoint
//!
//! Computes the local boiling point of water from ambient atmospheric
//! pressure, fused from two platform inputs: a GPS baseline altitude and
//! a barometric altimeter's pressure and relative-altitude stream.
//!
//! Key constraints:
//! - `no_std` compatible for embedded and mobile targets
//! - No heap allocation anywhere in the update path
//! - Platform services consumed only through capability traits
//!
//! ```no_run
//! use boilpoint_core::{AltitudeMonitor, BarometricSource, LocationSource};
//!
//! fn run(location: impl LocationSource, barometer: impl BarometricSource) {
//!     let mut monitor = AltitudeMonitor::new(location, barometer);
//!     monitor.start();
//!
//!     loop {
//!         monitor.poll();
//!         if let Some(bp) = monitor.boiling_point_c() {
//!             // hand off to the display layer
//!             let _ = bp;
//!         }
//!     }
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod boiling;
pub mod constants;
pub mod errors;
pub mod estimator;
pub mod events;
pub mod monitor;
pub mod time;
pub mod traits;
pub mod units;

// Public API
pub use errors::{EstimatorError, EstimatorResult, SourceFault};
pub use estimator::{BoilingPointEstimator, EstimatorState};
pub use events::{PositionFix, PressureSample, SensorEvent};
pub use monitor::AltitudeMonitor;
pub use traits::{BarometricSource, LocationSource, PermissionState};
pub use units::UnitPreferences;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Optional logging, compiled out when the `log` feature is off
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

pub(crate) use log_info;
pub(crate) use log_warn;
