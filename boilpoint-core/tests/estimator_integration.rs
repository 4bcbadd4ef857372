//! Integration tests for the monitoring session
//!
//! Drives the full path a host application uses: monitor construction,
//! start preconditions, polling both scripted sources, and reading the
//! fused state back out. The estimator is never touched directly.

mod common;

use boilpoint_core::{AltitudeMonitor, EstimatorError, PermissionState};
use common::{MockBarometer, MockLocation};

fn started_monitor() -> AltitudeMonitor<MockLocation, MockBarometer> {
    let mut monitor = AltitudeMonitor::new(MockLocation::granted(), MockBarometer::available());
    monitor.start();
    assert!(monitor.is_active());
    monitor
}

#[test]
fn sea_level_pressure_boils_at_100c() {
    let mut monitor = started_monitor();
    monitor.barometer_mut().push_sample(101.325, 0.0, 1000);
    monitor.poll();

    let bp = monitor.boiling_point_c().unwrap();
    assert!((bp - 100.0).abs() < 0.5, "got {bp}");
    assert_eq!(monitor.pressure_kpa(), Some(101.325));
}

#[test]
fn reduced_pressure_lowers_boiling_point() {
    let mut monitor = started_monitor();
    monitor.barometer_mut().push_sample(70.0, 0.0, 1000);
    monitor.poll();

    let bp = monitor.boiling_point_c().unwrap();
    assert!((bp - 90.5).abs() < 1.0, "got {bp}");
}

#[test]
fn first_fix_seeds_display_before_barometer_reports() {
    let mut monitor = started_monitor();
    monitor.location_mut().push_fix(1600.0, 1000);
    monitor.poll();

    assert_eq!(monitor.altitude_m(), Some(1600.0));
    assert!(monitor.pressure_kpa().is_none());
    let bp = monitor.boiling_point_c().unwrap();
    assert!((bp - 95.0).abs() < 1.0, "got {bp}");
}

#[test]
fn pressure_formula_takes_precedence_permanently() {
    let mut monitor = started_monitor();
    monitor.location_mut().push_fix(1600.0, 1000);
    monitor.poll();

    monitor.barometer_mut().push_sample(101.325, 0.0, 2000);
    monitor.poll();
    let bp_from_pressure = monitor.boiling_point_c().unwrap();
    assert!((bp_from_pressure - 100.0).abs() < 0.5);

    // Further fixes arrive; the altitude fallback must stay retired
    monitor.location_mut().push_fix(1600.0, 3000);
    monitor.location_mut().push_fix(1400.0, 4000);
    monitor.poll();
    assert_eq!(monitor.boiling_point_c(), Some(bp_from_pressure));
}

#[test]
fn non_positive_pressure_is_rejected_not_propagated() {
    let mut monitor = started_monitor();
    monitor.barometer_mut().push_sample(101.325, 0.0, 1000);
    monitor.poll();
    let good_bp = monitor.boiling_point_c().unwrap();

    monitor.barometer_mut().push_sample(0.0, 0.0, 2000);
    monitor.barometer_mut().push_sample(-2.5, 0.0, 3000);
    monitor.poll();

    assert_eq!(monitor.boiling_point_c(), Some(good_bp));
    assert!(matches!(
        monitor.error(),
        Some(EstimatorError::InvalidReading { .. })
    ));
    // A skipped sample is not a stream failure; the session continues
    assert!(monitor.is_active());
}

#[test]
fn nan_pressure_is_rejected_like_non_positive() {
    let mut monitor = started_monitor();
    monitor.barometer_mut().push_sample(f32::NAN, 0.0, 1000);
    monitor.poll();

    assert!(monitor.boiling_point_c().is_none());
    assert!(matches!(
        monitor.error(),
        Some(EstimatorError::InvalidReading { .. })
    ));
    assert!(monitor.is_active());
}

#[test]
fn restart_resets_baseline_latch() {
    let mut monitor = started_monitor();
    monitor.location_mut().push_fix(1600.0, 1000);
    monitor.poll();
    assert_eq!(monitor.state().baseline_altitude_m, Some(1600.0));

    monitor.stop();
    assert!(!monitor.is_active());

    monitor.start();
    monitor.location_mut().push_fix(300.0, 5000);
    monitor.poll();
    assert_eq!(monitor.state().baseline_altitude_m, Some(300.0));
    assert_eq!(monitor.altitude_m(), Some(300.0));
}

#[test]
fn stop_retains_last_readings_for_display() {
    let mut monitor = started_monitor();
    monitor.barometer_mut().push_sample(83.5, 0.0, 1000);
    monitor.poll();
    let bp = monitor.boiling_point_c();

    monitor.stop();
    assert_eq!(monitor.boiling_point_c(), bp);
    assert_eq!(monitor.pressure_kpa(), Some(83.5));
    assert!(!monitor.location_mut().subscribed());
    assert!(!monitor.barometer_mut().subscribed());
}

#[test]
fn double_start_does_not_double_subscribe() {
    let mut monitor = started_monitor();
    monitor.start();
    monitor.start();

    assert_eq!(monitor.location_mut().start_count, 1);
    assert_eq!(monitor.barometer_mut().start_count, 1);
}

#[test]
fn denied_permission_blocks_start() {
    let mut monitor = AltitudeMonitor::new(
        MockLocation::with_permission(PermissionState::Denied),
        MockBarometer::available(),
    );
    monitor.start();

    assert!(!monitor.is_active());
    assert_eq!(monitor.error(), Some(EstimatorError::PermissionDenied));
    assert_eq!(monitor.location_mut().start_count, 0);
}

#[test]
fn restricted_permission_blocks_start() {
    let mut monitor = AltitudeMonitor::new(
        MockLocation::with_permission(PermissionState::Restricted),
        MockBarometer::available(),
    );
    monitor.start();

    assert!(!monitor.is_active());
    assert_eq!(monitor.error(), Some(EstimatorError::PermissionDenied));
}

#[test]
fn grant_after_denial_retriggers_start() {
    let mut monitor = AltitudeMonitor::new(
        MockLocation::with_permission(PermissionState::Denied),
        MockBarometer::available(),
    );
    monitor.start();
    assert!(!monitor.is_active());

    // The user grants access in system settings
    monitor.location_mut().permission = PermissionState::Granted;
    monitor.poll();

    assert!(monitor.is_active());
    assert!(monitor.error().is_none());
    assert_eq!(monitor.location_mut().start_count, 1);
}

#[test]
fn undetermined_permission_prompts_and_proceeds() {
    let mut monitor = AltitudeMonitor::new(
        MockLocation::with_permission(PermissionState::NotDetermined),
        MockBarometer::available(),
    );
    monitor.start();

    assert!(monitor.is_active());
    assert_eq!(monitor.location_mut().permission_requests, 1);
}

#[test]
fn revoked_permission_halts_session() {
    let mut monitor = started_monitor();
    monitor.barometer_mut().push_sample(101.325, 0.0, 1000);
    monitor.poll();

    monitor.location_mut().permission = PermissionState::Denied;
    monitor.poll();

    assert!(!monitor.is_active());
    assert_eq!(monitor.error(), Some(EstimatorError::PermissionDenied));
    // Prior readings stay visible while inactive
    assert!(monitor.boiling_point_c().is_some());
}

#[test]
fn missing_barometer_blocks_start() {
    let mut monitor = AltitudeMonitor::new(MockLocation::granted(), MockBarometer::missing());
    monitor.start();

    assert!(!monitor.is_active());
    assert_eq!(monitor.error(), Some(EstimatorError::SensorUnavailable));
    assert_eq!(monitor.barometer_mut().start_count, 0);
}

#[test]
fn stream_fault_halts_updates_and_surfaces_reason() {
    let mut monitor = started_monitor();
    monitor.barometer_mut().push_sample(101.325, 0.0, 1000);
    monitor.poll();
    let bp = monitor.boiling_point_c();

    monitor.barometer_mut().push_fault("altimeter stream interrupted");
    monitor.poll();

    assert!(!monitor.is_active());
    assert_eq!(
        monitor.error(),
        Some(EstimatorError::SourceFault {
            reason: "altimeter stream interrupted"
        })
    );
    assert!(!monitor.barometer_mut().subscribed());
    // Readings from before the fault are retained
    assert_eq!(monitor.boiling_point_c(), bp);
}

#[test]
fn location_fault_also_halts_session() {
    let mut monitor = started_monitor();
    monitor.location_mut().push_fault("positioning unavailable");
    monitor.poll();

    assert!(!monitor.is_active());
    assert_eq!(
        monitor.error(),
        Some(EstimatorError::SourceFault {
            reason: "positioning unavailable"
        })
    );
}
