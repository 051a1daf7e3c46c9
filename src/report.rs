//! # Human-readable sky report
//!
//! Text rendering of a [`SkyReport`] and its output to stdout or a file.
//!
//! ```text
//! ##### INFO #####
//! Object ID: 499
//! Time: 2025-04-18T10:00:00Z
//! Latitude: 50.08°
//! Longitude: 14.42°
//! ##### DATA #####
//! Earth–Sun Distance: 1.50345E11 m
//! Planet–Sun Distance: 2.46874E11 m
//! RA: 07h41min
//! Dec: 22.79°
//! Azimuth: 82.32°
//! Altitude: -5.22°
//! Rise Time: 10:34 h
//! Set Time: 02:07 h
//! Transit Time: 18:21 h
//! ```
//!
//! Angles and hours are **truncated**, not rounded, to whole minutes. Rise/set/transit are local
//! mean solar times.
use std::{fmt, fs, path::Path};

use log::info;

use crate::{
    constants::Hour, observers::horizon::RiseSetTransit, planet_sim::SkyReport,
    planetsim_errors::PlanetSimError, time::format_utc,
};

/// Split hours into whole hours and whole minutes, truncating.
fn hours_minutes(hours: Hour) -> (u32, u32) {
    let total_minutes = (hours * 60.0).floor().max(0.0) as u32;
    (total_minutes / 60, total_minutes % 60)
}

/// Right ascension as `HHhMMmin`.
pub fn format_right_ascension(right_ascension: Hour) -> String {
    let (h, m) = hours_minutes(right_ascension);
    format!("{h:02}h{m:02}min")
}

/// Time of day as `HH:MM`.
pub fn format_clock(hours: Hour) -> String {
    let (h, m) = hours_minutes(hours);
    format!("{h:02}:{m:02}")
}

impl fmt::Display for SkyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "##### INFO #####")?;
        writeln!(f, "Object ID: {}", self.body)?;
        writeln!(f, "Time: {}", format_utc(&self.time))?;
        if let Some(site) = &self.site {
            writeln!(f, "Latitude: {:.2}°", site.latitude())?;
            writeln!(f, "Longitude: {:.2}°", site.longitude())?;
        }

        writeln!(f, "##### DATA #####")?;
        writeln!(f, "Earth–Sun Distance: {:.5E} m", self.earth_sun_distance)?;
        writeln!(f, "Planet–Sun Distance: {:.5E} m", self.body_sun_distance)?;
        writeln!(
            f,
            "RA: {}",
            format_right_ascension(self.equatorial.right_ascension)
        )?;
        writeln!(f, "Dec: {:.2}°", self.equatorial.declination)?;

        let Some(view) = &self.horizon else {
            return Ok(());
        };
        writeln!(f, "Azimuth: {:.2}°", view.horizontal.azimuth)?;
        writeln!(f, "Altitude: {:.2}°", view.horizontal.altitude)?;
        match view.rise_set_transit {
            RiseSetTransit::Crossing { rise, set, .. } => {
                writeln!(f, "Rise Time: {} h", format_clock(rise))?;
                writeln!(f, "Set Time: {} h", format_clock(set))?;
            }
            RiseSetTransit::AlwaysAbove { .. } => {
                writeln!(f, "Rise Time: always above horizon")?;
                writeln!(f, "Set Time: always above horizon")?;
            }
            RiseSetTransit::AlwaysBelow { .. } => {
                writeln!(f, "Rise Time: never rises")?;
                writeln!(f, "Set Time: never rises")?;
            }
        }
        writeln!(
            f,
            "Transit Time: {} h",
            format_clock(view.rise_set_transit.transit())
        )
    }
}

/// Print the report, or write it to `file` when one is given.
///
/// Errors
/// ------
/// * [`PlanetSimError::IoError`] if the file cannot be written.
pub fn write_report(report: &SkyReport, file: Option<&Path>) -> Result<(), PlanetSimError> {
    match file {
        Some(path) => {
            fs::write(path, report.to_string())?;
            info!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}
