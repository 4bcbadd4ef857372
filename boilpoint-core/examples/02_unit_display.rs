//! Unit Display Example
//!
//! Shows the display-side unit handling: the estimator always reports
//! metric values, and the presentation layer formats them per the user's
//! three independent unit toggles.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_unit_display
//! ```

use boilpoint_core::boiling::boiling_point_c_from_altitude_m;
use boilpoint_core::units::{
    AltitudeUnit, PressureUnit, TemperatureUnit, UnitPreferences, format_altitude,
    format_pressure, format_temperature,
};

fn main() {
    println!("BoilPoint Unit Display Example");
    println!("==============================\n");

    // Boiling point at a few well-known elevations
    let spots = [
        ("Dead Sea shore", -430.0),
        ("Sea level", 0.0),
        ("Denver", 1600.0),
        ("La Paz", 3600.0),
        ("Everest Base Camp", 5364.0),
    ];

    println!("{:<18} {:>10} {:>10}", "Location", "Metric", "Imperial");
    for (name, altitude_m) in spots {
        let bp_c = match boiling_point_c_from_altitude_m(altitude_m) {
            Ok(bp) => bp,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        println!(
            "{:<18} {:>10} {:>10}",
            name,
            format_temperature(bp_c, TemperatureUnit::Celsius).as_str(),
            format_temperature(bp_c, TemperatureUnit::Fahrenheit).as_str(),
        );
    }

    // Mixed preferences are a single bundle the display layer carries
    let prefs = UnitPreferences {
        temperature: TemperatureUnit::Fahrenheit,
        altitude: AltitudeUnit::Meters,
        pressure: PressureUnit::InchesOfMercury,
    };

    println!("\nMixed preferences (°F readout, metric altitude):");
    println!("  Boiling point: {}", prefs.format_temperature(94.7));
    println!("  Altitude:      {}", prefs.format_altitude(1600.0));
    println!("  Pressure:      {}", prefs.format_pressure(83.5));

    println!("\nPer-quantity formatting:");
    println!(
        "  {} = {}",
        format_pressure(101.325, PressureUnit::Kilopascals).as_str(),
        format_pressure(101.325, PressureUnit::InchesOfMercury).as_str(),
    );
    println!(
        "  {} = {}",
        format_altitude(8848.0, AltitudeUnit::Meters).as_str(),
        format_altitude(8848.0, AltitudeUnit::Feet).as_str(),
    );
}
