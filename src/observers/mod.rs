//! # Observer site & horizon geometry
//!
//! This module gathers the **ground observer** description and the projection of sky coordinates
//! onto that observer's local horizon:
//!
//! - [`ObserverSite`](crate::observers::ObserverSite) – validated geodetic latitude/longitude of
//!   the observing site (degrees, east-positive longitude).
//! - [`horizon`](crate::observers::horizon) – local sidereal time, altitude/azimuth, and the
//!   rise/transit/set estimate.
//!
//! ## Conventions
//!
//! - Latitudes in `[-90, 90]` degrees, north positive.
//! - Longitudes in `[-180, 180]` degrees, **east positive**.
//! - The site is treated as a point on the geocenter's line of sight (no topocentric parallax,
//!   no elevation).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use planetsim::observers::{horizon::to_alt_az, ObserverSite};
//! use planetsim::ref_system::EquatorialCoordinates;
//! use planetsim::time::parse_utc;
//!
//! let site = ObserverSite::new(40.0, -3.7)?;
//! let when = parse_utc("2025-04-20T12:00:00Z")?;
//! let sky = to_alt_az(&EquatorialCoordinates::new(10.0, 20.0), &when, &site);
//! println!("alt = {:.2}°, az = {:.2}°", sky.altitude, sky.azimuth);
//! # Ok::<(), planetsim::planetsim_errors::PlanetSimError>(())
//! ```
use std::fmt;

use crate::{constants::Degree, planetsim_errors::PlanetSimError};

/// Local sidereal time, horizontal coordinates and rise/set estimation.
pub mod horizon;

/// Geodetic position of a ground observer.
///
/// Invariants
/// ----------
/// * `latitude ∈ [-90, 90]` degrees.
/// * `longitude ∈ [-180, 180]` degrees, east positive.
///
/// Both are enforced by [`ObserverSite::new`]; the fields are private so that every value in
/// circulation satisfies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSite {
    latitude: Degree,
    longitude: Degree,
}

impl ObserverSite {
    /// Create a new observer site.
    ///
    /// Arguments
    /// ---------
    /// * `latitude`: geodetic latitude in degrees, north positive.
    /// * `longitude`: longitude in degrees, east positive.
    ///
    /// Errors
    /// ------
    /// * [`PlanetSimError::InvalidObserverSite`] if either angle is out of range or NaN.
    pub fn new(latitude: Degree, longitude: Degree) -> Result<ObserverSite, PlanetSimError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(PlanetSimError::InvalidObserverSite {
                latitude,
                longitude,
            });
        }
        Ok(ObserverSite {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }
}

impl fmt::Display for ObserverSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {:.4}°, Longitude: {:.4}°",
            self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod observer_site_test {
    use super::*;

    #[test]
    fn test_valid_sites() {
        let site = ObserverSite::new(40.4168, -3.7038).unwrap();
        assert_eq!(site.latitude(), 40.4168);
        assert_eq!(site.longitude(), -3.7038);

        assert!(ObserverSite::new(90.0, 180.0).is_ok());
        assert!(ObserverSite::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_latitude() {
        assert_eq!(
            ObserverSite::new(91.0, 0.0),
            Err(PlanetSimError::InvalidObserverSite {
                latitude: 91.0,
                longitude: 0.0
            })
        );
    }

    #[test]
    fn test_out_of_range_longitude() {
        assert!(ObserverSite::new(0.0, 180.5).is_err());
        assert!(ObserverSite::new(0.0, -200.0).is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(ObserverSite::new(f64::NAN, 0.0).is_err());
        assert!(ObserverSite::new(0.0, f64::NAN).is_err());
    }
}
