//! # Constants and type definitions for planetsim
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **unit type
//! aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Astronomical constants (solar gravitational parameter, obliquity, J2000 epoch)
//! - Unit conversions (days ↔ seconds, km ↔ m, hours ↔ degrees of right ascension)
//! - Core type aliases documenting the unit carried by a bare `f64`

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const JD_J2000: f64 = 2_451_545.0;

/// Heliocentric gravitational constant GM☉ in m³/s²
pub const GM_SUN: f64 = 1.327_124_400_41e20;

/// Mean obliquity of the ecliptic at J2000, in degrees
pub const EARTH_OBLIQUITY_DEG: f64 = 23.43928;

/// Apparent altitude of a body at rise/set (horizon dip + refraction), in degrees
pub const HORIZON_DIP_DEG: f64 = -0.833;

/// Degrees of right ascension per hour
pub const DEG_PER_HOUR: f64 = 15.0;

/// Kilometers → meters
pub const KM_TO_M: f64 = 1_000.0;

/// Convergence threshold on the eccentric anomaly correction (radians)
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Maximum number of Newton steps allowed when solving Kepler's equation
pub const KEPLER_MAX_ITERATIONS: usize = 1000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle expressed in hours (15° per hour)
pub type Hour = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Julian Date (days)
pub type JulianDate = f64;
