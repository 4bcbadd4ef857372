//! Basic Estimation Example
//!
//! Drives a full monitoring session against scripted sensor sources: a
//! GPS fix establishes the baseline, then barometric samples take over as
//! a simulated hike climbs out of Denver.
//!
//! ## What You'll Learn
//!
//! - Implementing the two platform capability traits
//! - Starting a session and polling the monitor
//! - How the altitude fallback hands over to measured pressure
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_estimation
//! ```

use std::collections::VecDeque;

use boilpoint_core::{
    AltitudeMonitor, BarometricSource, LocationSource, PermissionState, PositionFix,
    PressureSample, SourceFault, UnitPreferences,
};

/// Location service backed by a queue the simulation feeds
struct ScriptedLocation {
    fixes: VecDeque<PositionFix>,
}

impl LocationSource for ScriptedLocation {
    fn permission(&self) -> PermissionState {
        PermissionState::Granted
    }

    fn request_permission(&mut self) {}

    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn poll_fix(&mut self) -> nb::Result<PositionFix, SourceFault> {
        self.fixes.pop_front().ok_or(nb::Error::WouldBlock)
    }
}

/// Barometer backed by a queue the simulation feeds
struct ScriptedBarometer {
    samples: VecDeque<PressureSample>,
}

impl BarometricSource for ScriptedBarometer {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn poll_sample(&mut self) -> nb::Result<PressureSample, SourceFault> {
        self.samples.pop_front().ok_or(nb::Error::WouldBlock)
    }
}

fn main() {
    println!("BoilPoint Basic Estimation Example");
    println!("==================================\n");

    let location = ScriptedLocation {
        fixes: VecDeque::new(),
    };
    let barometer = ScriptedBarometer {
        samples: VecDeque::new(),
    };

    let mut monitor = AltitudeMonitor::new(location, barometer);
    monitor.start();

    let prefs = UnitPreferences::metric();

    // The first input of the session is a GPS fix at Denver's elevation;
    // the boiling point comes from the altitude fallback until the
    // barometer reports
    monitor.location_mut().fixes.push_back(PositionFix {
        altitude_m: 1600.0,
        timestamp: 0,
    });
    monitor.poll();
    report("GPS baseline (altitude fallback)", &monitor, &prefs);

    // Barometric samples arrive while the hike gains ~500 m of
    // elevation. ~83.5 kPa is typical ambient pressure at 1600 m.
    let climb = [
        (83.5, 0.0),
        (82.4, 100.0),
        (81.3, 200.0),
        (79.2, 400.0),
        (78.2, 500.0),
    ];

    for (step, (pressure_kpa, relative_altitude_m)) in climb.into_iter().enumerate() {
        monitor.barometer_mut().samples.push_back(PressureSample {
            relative_altitude_m,
            pressure_kpa,
            timestamp: (step as u64 + 1) * 1000,
        });
        monitor.poll();
        println!();
        report(&format!("Barometric sample {}", step + 1), &monitor, &prefs);
    }

    monitor.stop();
    println!("\nSession stopped; last readings retained for display.");
}

fn report(
    label: &str,
    monitor: &AltitudeMonitor<impl LocationSource, impl BarometricSource>,
    prefs: &UnitPreferences,
) {
    println!("{label}:");
    if let Some(altitude_m) = monitor.altitude_m() {
        println!("  Altitude:      {}", prefs.format_altitude(altitude_m));
    }
    match monitor.pressure_kpa() {
        Some(kpa) => println!("  Pressure:      {}", prefs.format_pressure(kpa)),
        None => println!("  Pressure:      (no sample yet)"),
    }
    if let Some(bp) = monitor.boiling_point_c() {
        println!("  Boiling point: {}", prefs.format_temperature(bp));
    }
}
