//! # Low-precision solar orientation
//!
//! Apparent position of the Sun from the classic low-order series (accurate to about 0.01° over
//! a few centuries around J2000). It only feeds the transit estimate of
//! [`observers::horizon`](crate::observers::horizon), where the solar right ascension converts a
//! body's right ascension into a clock time.
use crate::constants::{Degree, JulianDate, JD_J2000};

/// Mean obliquity of the ecliptic, linear model.
///
/// ```text
/// ε = 23.439 − 0.00000036 · n     (n = days since J2000)
/// ```
pub fn mean_obliquity(days_since_j2000: f64) -> Degree {
    23.439 - 0.000_000_36 * days_since_j2000
}

/// Apparent ecliptic longitude of the Sun, in degrees `[0, 360)`.
///
/// ```text
/// g = 357.529 + 0.98560028 · n      (mean anomaly)
/// L = 280.459 + 0.98564736 · n      (mean longitude)
/// λ = L + 1.915 · sin g + 0.020 · sin 2g
/// ```
pub fn sun_ecliptic_longitude(days_since_j2000: f64) -> Degree {
    let mean_anomaly = (357.529 + 0.985_600_28 * days_since_j2000).rem_euclid(360.0);
    let mean_longitude = (280.459 + 0.985_647_36 * days_since_j2000).rem_euclid(360.0);

    let g = mean_anomaly.to_radians();
    (mean_longitude + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).rem_euclid(360.0)
}

/// Approximate right ascension of the Sun at a Julian Date.
///
/// Arguments
/// ---------
/// * `julian_date`: the instant, as a Julian Date.
///
/// Return
/// ------
/// * the solar right ascension in **degrees**, `[0, 360)`:
///   `α = atan2(cos ε · sin λ, cos λ)`.
///
/// # See also
/// * [`sun_ecliptic_longitude`] – λ
/// * [`mean_obliquity`] – ε
pub fn approx_sun_right_ascension(julian_date: JulianDate) -> Degree {
    let n = julian_date - JD_J2000;
    let lambda = sun_ecliptic_longitude(n).to_radians();
    let epsilon = mean_obliquity(n).to_radians();

    let alpha = (epsilon.cos() * lambda.sin())
        .atan2(lambda.cos())
        .to_degrees()
        .rem_euclid(360.0);
    if alpha >= 360.0 {
        0.0
    } else {
        alpha
    }
}
