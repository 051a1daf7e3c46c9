//! # Horizon projection
//!
//! From equatorial coordinates to what an observer on the ground sees:
//!
//! - [`local_sidereal_time`] – Earth rotation angle shifted by the site longitude.
//! - [`to_alt_az`] – altitude/azimuth through the hour angle.
//! - [`estimate_rise_set_transit`] – horizon-crossing times from the semi-diurnal arc, with an
//!   explicit outcome for bodies that never cross the horizon.
//!
//! ## Conventions
//!
//! - Azimuth is measured from **north through east**, in `[0, 360)`.
//! - Hour angle is positive **west** of the meridian, in `(-180, 180]`.
//! - Rise/set/transit are **local mean solar hours** in `[0, 24)`. No time zone and no equation of
//!   time are applied, so they do not match a civil clock.
use hifitime::Epoch;
use std::fmt;

use crate::{
    constants::{Degree, Hour, DEG_PER_HOUR, HORIZON_DIP_DEG},
    earth_orientation::approx_sun_right_ascension,
    observers::ObserverSite,
    ref_system::EquatorialCoordinates,
    time::{earth_rotation_angle, to_julian_date},
};

/// Position of a body above the local horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    /// Elevation above the horizon in degrees, `[-90, 90]`.
    pub altitude: Degree,
    /// Bearing from north through east in degrees, `[0, 360)`.
    pub azimuth: Degree,
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alt = {:.2}°, Az = {:.2}°", self.altitude, self.azimuth)
    }
}

/// Outcome of the daily horizon-crossing estimate.
///
/// All hours are local mean solar time in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetTransit {
    /// The body rises and sets during the day.
    Crossing { rise: Hour, set: Hour, transit: Hour },
    /// Circumpolar: the lower culmination stays above the horizon.
    AlwaysAbove { transit: Hour },
    /// The upper culmination stays below the horizon.
    AlwaysBelow { transit: Hour },
}

impl RiseSetTransit {
    /// Meridian transit time, available in every outcome.
    pub fn transit(&self) -> Hour {
        match *self {
            RiseSetTransit::Crossing { transit, .. }
            | RiseSetTransit::AlwaysAbove { transit }
            | RiseSetTransit::AlwaysBelow { transit } => transit,
        }
    }

    /// `(rise, set)` when the body crosses the horizon.
    pub fn rise_and_set(&self) -> Option<(Hour, Hour)> {
        match *self {
            RiseSetTransit::Crossing { rise, set, .. } => Some((rise, set)),
            _ => None,
        }
    }
}

/// Wrap an angle in degrees to `[0, 360)`.
fn normalize_degrees(angle: Degree) -> Degree {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Wrap a time in hours to `[0, 24)`.
fn normalize_hours(hours: Hour) -> Hour {
    let h = hours.rem_euclid(24.0);
    if h >= 24.0 {
        0.0
    } else {
        h
    }
}

/// Wrap an hour angle in degrees to `(-180, 180]`.
fn normalize_hour_angle(angle: Degree) -> Degree {
    let a = normalize_degrees(angle + 180.0) - 180.0;
    if a <= -180.0 {
        a + 360.0
    } else {
        a
    }
}

/// Local sidereal time at a site longitude.
///
/// Arguments
/// ---------
/// * `epoch`: observation instant (UTC).
/// * `longitude`: site longitude in degrees, east positive.
///
/// Return
/// ------
/// * `LST = ERA + λ` in degrees, normalized to `[0, 360)`.
///
/// # See also
/// * [`earth_rotation_angle`] – linear Earth rotation model
pub fn local_sidereal_time(epoch: &Epoch, longitude: Degree) -> Degree {
    let era = earth_rotation_angle(to_julian_date(epoch));
    normalize_degrees(era.to_degrees() + longitude)
}

/// Project equatorial coordinates onto the local horizon of `site` at `epoch`.
///
/// Arguments
/// ---------
/// * `coords`: right ascension (hours) and declination (degrees) of the body.
/// * `epoch`: observation instant (UTC).
/// * `site`: observer latitude/longitude.
///
/// Return
/// ------
/// * [`HorizontalCoordinates`] with
///
/// ```text
/// HA      = LST − 15·RA                               in (−180°, 180°]
/// sin alt = sin δ sin φ + cos δ cos φ cos HA
/// az      = atan2(−cos δ sin HA, sin δ cos φ − cos δ sin φ cos HA)   in [0°, 360°)
/// ```
///
/// The azimuth uses the `cos δ`-scaled form of `atan2(−sin HA, tan δ cos φ − sin φ cos HA)`,
/// which has the same angle and stays finite at the celestial poles.
pub fn to_alt_az(
    coords: &EquatorialCoordinates,
    epoch: &Epoch,
    site: &ObserverSite,
) -> HorizontalCoordinates {
    let lst = local_sidereal_time(epoch, site.longitude());
    let hour_angle = normalize_hour_angle(lst - coords.right_ascension_deg()).to_radians();

    let (sin_dec, cos_dec) = coords.declination.to_radians().sin_cos();
    let (sin_lat, cos_lat) = site.latitude().to_radians().sin_cos();

    let sin_alt = sin_dec * sin_lat + cos_dec * cos_lat * hour_angle.cos();
    let altitude = sin_alt.clamp(-1.0, 1.0).asin().to_degrees();

    let azimuth = (-cos_dec * hour_angle.sin())
        .atan2(sin_dec * cos_lat - cos_dec * sin_lat * hour_angle.cos())
        .to_degrees();

    HorizontalCoordinates {
        altitude,
        azimuth: normalize_degrees(azimuth),
    }
}

/// Estimate rise, set and transit times of a body for the day of `date`.
///
/// The meridian transit follows from the body's right ascension relative to the Sun's:
///
/// ```text
/// transit = 12 − (α☉ − α) / 15
/// cos H   = (sin h₀ − sin φ sin δ) / (cos φ cos δ),    h₀ = −0.833°
/// rise    = transit − H / 15
/// set     = transit + H / 15
/// ```
///
/// with the solar right ascension α☉ from the low-order model of
/// [`approx_sun_right_ascension`]. `date` is used as given, without truncation to midnight.
///
/// Arguments
/// ---------
/// * `coords`: equatorial coordinates of the body.
/// * `date`: instant at which the solar right ascension is evaluated.
/// * `latitude`: observer latitude in degrees.
///
/// Return
/// ------
/// * [`RiseSetTransit::Crossing`] when `cos H ∈ [−1, 1]`.
/// * Otherwise [`RiseSetTransit::AlwaysAbove`] if the lower culmination altitude
///   `−90 + |φ + δ|` exceeds `h₀`, else [`RiseSetTransit::AlwaysBelow`]. This also covers
///   the non-finite ratio at the geographic poles.
pub fn estimate_rise_set_transit(
    coords: &EquatorialCoordinates,
    date: &Epoch,
    latitude: Degree,
) -> RiseSetTransit {
    let sun_ra = approx_sun_right_ascension(to_julian_date(date));
    let transit = normalize_hours(12.0 - (sun_ra - coords.right_ascension_deg()) / DEG_PER_HOUR);

    let declination = coords.declination;
    let (sin_dec, cos_dec) = declination.to_radians().sin_cos();
    let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();

    let cos_half_arc =
        (HORIZON_DIP_DEG.to_radians().sin() - sin_lat * sin_dec) / (cos_lat * cos_dec);

    if !cos_half_arc.is_finite() || cos_half_arc.abs() > 1.0 {
        let lower_culmination = -90.0 + (latitude + declination).abs();
        return if lower_culmination > HORIZON_DIP_DEG {
            RiseSetTransit::AlwaysAbove { transit }
        } else {
            RiseSetTransit::AlwaysBelow { transit }
        };
    }

    let half_arc = cos_half_arc.acos().to_degrees() / DEG_PER_HOUR;
    RiseSetTransit::Crossing {
        rise: normalize_hours(transit - half_arc),
        set: normalize_hours(transit + half_arc),
        transit,
    }
}
