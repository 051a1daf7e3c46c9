//! # Keplerian orbital elements
//!
//! This module defines [`OrbitalElements`], the **classical orbital element representation**
//! used as the input of the pipeline, and the two-body propagation that turns it into a
//! [`HeliocentricPosition`].
//!
//! ## What are Keplerian elements?
//!
//! 1. **a** – Semi-major axis (m)
//! 2. **e** – Eccentricity (unitless, `0 <= e < 1`)
//! 3. **i** – Inclination (radians)
//! 4. **ω** – Argument of periapsis (radians)
//! 5. **Ω** – Longitude of ascending node (radians)
//! 6. **M₀** – Mean anomaly at the epoch of the element set (radians)
//!
//! Together with the time elapsed since that epoch, they place a body on its orbit under the
//! two-body approximation. Elements are immutable: a new elapsed time yields a new value
//! through [`OrbitalElements::with_elapsed_seconds`].
//!
//! ## Propagation
//!
//! ```text
//! n = sqrt(GM☉ / a³)
//! M = M₀ + n·t
//! E = kepler(M, e)
//! (x, y)_orb = (a(cos E − e), a·sin E·sqrt(1 − e²))
//! r = Rz(Ω)·Rx(i)·Rz(ω)·(x, y, 0)_orb
//! ```
//!
//! ## Units
//!
//! The JPL Horizons element tables deliver `a` in kilometers and angles in degrees;
//! [`OrbitalElements::from_horizons_units`] performs that conversion.
use std::fmt;

use log::trace;
use nalgebra::Vector3;

use crate::{
    constants::{Degree, Kilometer, Meter, Radian, GM_SUN, KM_TO_M},
    kepler::solve_kepler_equation,
    orbit_type::heliocentric_position::HeliocentricPosition,
    planetsim_errors::PlanetSimError,
    ref_system::{rotmt, Axis},
};

/// Keplerian orbital elements of a body around the Sun, plus the elapsed time since their epoch.
///
/// Units
/// -----
/// * `semi_major_axis`: meters.
/// * `eccentricity`: unitless, `0 <= e < 1`.
/// * `inclination`: radians.
/// * `periapsis_argument`: radians (ω).
/// * `ascending_node_longitude`: radians (Ω).
/// * `mean_anomaly`: radians (M₀, at the epoch of the element set).
/// * `elapsed_seconds`: seconds since the epoch of the element set (signed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: Meter,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub periapsis_argument: Radian,
    pub ascending_node_longitude: Radian,
    pub mean_anomaly: Radian,
    pub elapsed_seconds: f64,
}

impl OrbitalElements {
    pub fn new(
        semi_major_axis: Meter,
        eccentricity: f64,
        inclination: Radian,
        periapsis_argument: Radian,
        ascending_node_longitude: Radian,
        mean_anomaly: Radian,
        elapsed_seconds: f64,
    ) -> Self {
        OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            periapsis_argument,
            ascending_node_longitude,
            mean_anomaly,
            elapsed_seconds,
        }
    }

    /// Build elements from the units of a JPL Horizons element table.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis`: `A`, in kilometers.
    /// * `eccentricity`: `EC`.
    /// * `inclination`: `IN`, in degrees.
    /// * `periapsis_argument`: `W`, in degrees.
    /// * `ascending_node_longitude`: `OM`, in degrees.
    /// * `mean_anomaly`: `MA`, in degrees.
    /// * `elapsed_seconds`: seconds between the element epoch and the query instant.
    ///
    /// Return
    /// ------
    /// * elements in meters and radians.
    pub fn from_horizons_units(
        semi_major_axis: Kilometer,
        eccentricity: f64,
        inclination: Degree,
        periapsis_argument: Degree,
        ascending_node_longitude: Degree,
        mean_anomaly: Degree,
        elapsed_seconds: f64,
    ) -> Self {
        OrbitalElements::new(
            semi_major_axis * KM_TO_M,
            eccentricity,
            inclination.to_radians(),
            periapsis_argument.to_radians(),
            ascending_node_longitude.to_radians(),
            mean_anomaly.to_radians(),
            elapsed_seconds,
        )
    }

    /// Same elements, evaluated at another elapsed time.
    pub fn with_elapsed_seconds(&self, elapsed_seconds: f64) -> Self {
        OrbitalElements {
            elapsed_seconds,
            ..*self
        }
    }

    /// Mean motion `n = sqrt(GM☉ / a³)`, in radians per second.
    pub fn mean_motion(&self) -> f64 {
        (GM_SUN / self.semi_major_axis.powi(3)).sqrt()
    }

    /// Propagate the elements to `elapsed_seconds` and return the heliocentric ecliptic position.
    ///
    /// Return
    /// ------
    /// * the position in meters, ecliptic frame.
    ///
    /// Errors
    /// ------
    /// * [`PlanetSimError::InvalidSemiMajorAxis`] if `a` is not finite and positive.
    /// * [`PlanetSimError::InvalidEccentricity`] if `e` is outside `[0, 1)`.
    /// * [`PlanetSimError::NonConvergence`] if Kepler's equation cannot be solved.
    ///
    /// See also
    /// --------
    /// * [`solve_kepler_equation`] – eccentric anomaly from the mean anomaly.
    /// * [`rotmt`] – elementary rotations composing the orbit orientation.
    pub fn propagate(&self) -> Result<HeliocentricPosition, PlanetSimError> {
        let a = self.semi_major_axis;
        if !(a.is_finite() && a > 0.0) {
            return Err(PlanetSimError::InvalidSemiMajorAxis { semi_major_axis: a });
        }
        let e = self.eccentricity;

        let mean_anomaly = self.mean_anomaly + self.mean_motion() * self.elapsed_seconds;
        let ecc_anomaly = solve_kepler_equation(mean_anomaly, e)?;

        let (sin_e, cos_e) = ecc_anomaly.sin_cos();
        let orbital_plane = Vector3::new(
            a * (cos_e - e),
            a * sin_e * (1.0 - e * e).sqrt(),
            0.0,
        );

        // perifocal → ecliptic: ω about the orbit normal, i about the node line, Ω about the pole
        let orientation = rotmt(self.ascending_node_longitude, Axis::Z)
            * rotmt(self.inclination, Axis::X)
            * rotmt(self.periapsis_argument, Axis::Z);

        let position = HeliocentricPosition::from(orientation * orbital_plane);
        trace!("propagated M = {mean_anomaly:.9} rad, E = {ecc_anomaly:.9} rad → {position}");
        Ok(position)
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Orbital Elements @ {:.3} s from epoch",
            self.elapsed_seconds
        )?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6e} m",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination.to_degrees()
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument.to_degrees()
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude.to_degrees()
        )?;
        writeln!(
            f,
            "  M₀  (mean anomaly)          = {:.6} rad ({:.6}°)",
            self.mean_anomaly,
            self.mean_anomaly.to_degrees()
        )
    }
}

#[cfg(test)]
mod test_keplerian_element {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn earth_like(elapsed_seconds: f64) -> OrbitalElements {
        OrbitalElements::new(
            1.496e11,
            0.0167,
            7.155f64.to_radians(),
            102.9373f64.to_radians(),
            348.73936f64.to_radians(),
            100f64.to_radians(),
            elapsed_seconds,
        )
    }

    #[test]
    fn test_from_horizons_units() {
        let elements = OrbitalElements::from_horizons_units(
            1.496e8, 0.0167, 7.155, 102.9373, 348.73936, 100.0, 1.0e7,
        );

        assert_relative_eq!(elements.semi_major_axis, 1.496e11);
        assert_eq!(elements.eccentricity, 0.0167);
        assert_abs_diff_eq!(elements.inclination, 7.155f64.to_radians(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            elements.periapsis_argument,
            102.9373f64.to_radians(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            elements.ascending_node_longitude,
            348.73936f64.to_radians(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(elements.mean_anomaly, 100f64.to_radians(), epsilon = 1e-12);
        assert_eq!(elements.elapsed_seconds, 1.0e7);
    }

    #[test]
    fn test_with_elapsed_seconds_keeps_the_orbit() {
        let base = earth_like(0.0);
        let later = base.with_elapsed_seconds(3600.0);
        assert_eq!(later.elapsed_seconds, 3600.0);
        assert_eq!(later.with_elapsed_seconds(0.0), base);
        assert_eq!(base.elapsed_seconds, 0.0);
    }

    #[test]
    fn test_propagate_is_finite() {
        let position = earth_like(365.25 * 24.0 * 3600.0).propagate().unwrap();
        assert!(position.x.is_finite());
        assert!(position.y.is_finite());
        assert!(position.z.is_finite());
    }

    #[test]
    fn test_distance_stays_between_perihelion_and_aphelion() {
        let mut rng = StdRng::seed_from_u64(0xBADF00D);
        let base = earth_like(0.0);
        let perihelion = base.semi_major_axis * (1.0 - base.eccentricity);
        let aphelion = base.semi_major_axis * (1.0 + base.eccentricity);

        for _ in 0..5_000 {
            let t = rng.random_range(-1.0e10..1.0e10);
            let r = base.with_elapsed_seconds(t).propagate().unwrap().distance_from_sun();
            assert!(r <= aphelion * 1.02, "r = {r} above aphelion at t = {t}");
            assert!(r >= perihelion * 0.98, "r = {r} below perihelion at t = {t}");
        }
    }

    #[test]
    fn test_planar_circular_orbit() {
        // e = 0, i = 0, ω = Ω = 0: the body sits on the x axis at t = 0
        let elements = OrbitalElements::new(1.0e11, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let position = elements.propagate().unwrap();
        assert_relative_eq!(position.x, 1.0e11);
        assert_abs_diff_eq!(position.y, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(position.z, 0.0, epsilon = 1e-3);

        // a quarter period later it is on the y axis
        let quarter = std::f64::consts::FRAC_PI_2 / elements.mean_motion();
        let position = elements.with_elapsed_seconds(quarter).propagate().unwrap();
        assert_abs_diff_eq!(position.x, 0.0, epsilon = 1.0);
        assert_relative_eq!(position.y, 1.0e11, max_relative = 1e-12);
    }

    #[test]
    fn test_inclined_orbit_reaches_expected_height() {
        // periapsis on the ascending node, body a quarter orbit later is at maximum height a·sin(i)
        let i = 30f64.to_radians();
        let elements =
            OrbitalElements::new(1.0e11, 0.0, i, 0.0, 0.0, std::f64::consts::FRAC_PI_2, 0.0);
        let position = elements.propagate().unwrap();
        assert_relative_eq!(position.z, 1.0e11 * i.sin(), max_relative = 1e-9);
        assert_relative_eq!(position.y, 1.0e11 * i.cos(), max_relative = 1e-9);
    }

    #[test]
    fn test_node_rotation() {
        // with i = 0 the orbit orientation reduces to a rotation by ω + Ω about the pole
        let elements = OrbitalElements::new(1.0e11, 0.2, 0.0, 0.3, 0.4, 0.0, 0.0);
        let position = elements.propagate().unwrap();
        let r = 1.0e11 * (1.0 - 0.2);
        assert_relative_eq!(position.x, r * 0.7f64.cos(), max_relative = 1e-9);
        assert_relative_eq!(position.y, r * 0.7f64.sin(), max_relative = 1e-9);
        assert_abs_diff_eq!(position.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_invalid_inputs() {
        let hyperbolic = OrbitalElements::new(1.0e11, 1.2, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            hyperbolic.propagate(),
            Err(PlanetSimError::InvalidEccentricity { eccentricity: 1.2 })
        );

        let collapsed = OrbitalElements::new(0.0, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            collapsed.propagate(),
            Err(PlanetSimError::InvalidSemiMajorAxis {
                semi_major_axis: 0.0
            })
        );
    }
}
