//! # Time scale conversions
//!
//! Conversions between a UTC instant ([`hifitime::Epoch`]) and a continuous Julian day count,
//! plus the Earth rotation angle derived from it.
//!
//! All day counts here are anchored on J2000.0 (`2000-01-01T12:00:00 UTC` ↔ JD `2451545.0`).
//! The offset from that anchor is measured in **UTC seconds**, so the day count advances with
//! civil time and leap seconds do not shift the Earth rotation angle.
use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{JulianDate, Radian, DPI, JD_J2000, SECONDS_PER_DAY};
use crate::planetsim_errors::PlanetSimError;

/// Earth rotation angle at J2000.0, in revolutions
const ERA_AT_J2000: f64 = 0.779_057_273_264_0;

/// Earth rotation rate, in revolutions per UT1 day
const ERA_RATE: f64 = 1.002_737_811_911_354_48;

/// The J2000.0 reference instant, 2000-01-01T12:00:00 UTC.
pub fn j2000_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0)
}

/// Transformation from a UTC instant to a Julian Date.
///
/// Argument
/// --------
/// * `epoch`: the instant to convert
///
/// Return
/// ------
/// * the Julian Date, with the sub-second part kept as a day fraction.
///   J2000.0 maps to exactly `2451545.0`.
pub fn to_julian_date(epoch: &Epoch) -> JulianDate {
    let offset_seconds = epoch.to_utc_seconds() - j2000_epoch().to_utc_seconds();
    JD_J2000 + offset_seconds / SECONDS_PER_DAY
}

/// Transformation from a Julian Date to a UTC instant.
///
/// Inverse of [`to_julian_date`]. The round trip recovers the original instant well below the
/// millisecond for dates within a few millennia of J2000; precision degrades with the size of
/// the day count.
pub fn from_julian_date(julian_date: JulianDate) -> Epoch {
    let offset_seconds = (julian_date - JD_J2000) * SECONDS_PER_DAY;
    Epoch::from_utc_seconds(j2000_epoch().to_utc_seconds() + offset_seconds)
}

/// Compute the Earth Rotation Angle (ERA) in radians.
///
/// Uses the IAU 2000 linear relation
///
/// ```text
/// θ = 2π (0.7790572732640 + 1.00273781191135448 · Δ),   Δ = JD − 2451545.0
/// ```
///
/// with no secular polynomial correction, normalized to `[0, 2π)`.
///
/// Arguments
/// ---------
/// * `julian_date`: Julian Date of the instant (UTC is used as a stand-in for UT1).
///
/// Returns
/// -------
/// * ERA in radians, in `[0, 2π)`.
pub fn earth_rotation_angle(julian_date: JulianDate) -> Radian {
    let delta = julian_date - JD_J2000;
    // split the integer part of Δ so the fractional revolutions stay precise
    let turns = ERA_AT_J2000 + delta.fract() + (ERA_RATE - 1.0) * delta;
    let theta = DPI * turns.rem_euclid(1.0);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if theta >= DPI {
        0.0
    } else {
        theta
    }
}

/// Elapsed time from `from` to `to`, in seconds (negative when `to` precedes `from`).
pub fn seconds_between(from: &Epoch, to: &Epoch) -> f64 {
    (*to - *from).to_seconds()
}

/// Parse an ISO 8601 UTC timestamp such as `2025-04-18T10:00:00Z`.
///
/// A trailing `Z` is accepted as a synonym for the UTC designator.
///
/// Errors
/// ------
/// * [`PlanetSimError::InvalidTimeFormat`] if the string is not a valid date/time.
pub fn parse_utc(timestamp: &str) -> Result<Epoch, PlanetSimError> {
    let trimmed = timestamp.trim();
    let normalized = match trimmed.strip_suffix('Z') {
        Some(stripped) => format!("{stripped} UTC"),
        None => trimmed.to_string(),
    };
    Epoch::from_str(&normalized).map_err(|_| PlanetSimError::InvalidTimeFormat(timestamp.into()))
}

/// Render an instant as an ISO 8601 UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Sub-second digits are only written when present.
pub fn format_utc(epoch: &Epoch) -> String {
    let (y, m, d, h, min, s, ns) = epoch.to_gregorian_utc();
    if ns == 0 {
        format!("{y:04}-{m:02}-{d:02}T{h:02}:{min:02}:{s:02}Z")
    } else {
        format!("{y:04}-{m:02}-{d:02}T{h:02}:{min:02}:{s:02}.{ns:09}Z")
    }
}
