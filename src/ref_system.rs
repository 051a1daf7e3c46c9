use nalgebra::{Matrix3, Rotation3, Vector3};
use std::fmt;

use crate::{
    constants::{Degree, Hour, DEG_PER_HOUR, EARTH_OBLIQUITY_DEG},
    kepler::principal_angle,
    orbit_type::heliocentric_position::HeliocentricPosition,
    planetsim_errors::PlanetSimError,
};

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Build the rotation matrix of angle `alpha` (radians) about one coordinate axis.
///
/// The rotation is **applied to the vector** in a fixed frame (right-hand rule), so
/// `rotmt(α, Axis::X) · v` turns `v` by `+α` about the x axis. The matrix is orthonormal and its
/// transpose is its inverse.
///
/// # See also
/// * [`ecliptic_to_equatorial`] – obliquity rotation about x
/// * [`OrbitalElements::propagate`](crate::orbit_type::keplerian_element::OrbitalElements::propagate) – ω/i/Ω composition
pub fn rotmt(alpha: f64, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Sky position referenced to Earth's equator and the mean equinox.
///
/// Invariants
/// ----------
/// * `right_ascension` in hours, within `[0, 24)`.
/// * `declination` in degrees, within `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    pub right_ascension: Hour,
    pub declination: Degree,
}

impl EquatorialCoordinates {
    pub fn new(right_ascension: Hour, declination: Degree) -> Self {
        EquatorialCoordinates {
            right_ascension,
            declination,
        }
    }

    /// `true` when both coordinates are inside their documented ranges.
    pub fn is_valid(&self) -> bool {
        (0.0..24.0).contains(&self.right_ascension) && (-90.0..=90.0).contains(&self.declination)
    }

    /// Right ascension converted to degrees, `[0, 360)`.
    pub fn right_ascension_deg(&self) -> Degree {
        self.right_ascension * DEG_PER_HOUR
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA = {:.3} h, Dec = {:.3}°",
            self.right_ascension, self.declination
        )
    }
}

/// Rotate an ecliptic vector into the equatorial frame.
///
/// Applies a rotation of `+ε` about the x axis (shared equinox direction), with the fixed mean
/// obliquity ε = 23.43928°:
///
/// ```text
/// x_eq = x
/// y_eq = y·cos ε − z·sin ε
/// z_eq = y·sin ε + z·cos ε
/// ```
pub fn ecliptic_to_equatorial(ecliptic: &Vector3<f64>) -> Vector3<f64> {
    rotmt(EARTH_OBLIQUITY_DEG.to_radians(), Axis::X) * ecliptic
}

/// Convert a 3D Cartesian position vector to right ascension and declination.
///
/// Arguments
/// ---------
/// * `cartesian_position`: vector in an equatorial frame, any length unit.
///
/// Returns
/// --------
/// * [`EquatorialCoordinates`] with RA in hours `[0, 24)` and Dec in degrees `[-90, 90]`.
///
/// Errors
/// ------
/// * [`PlanetSimError::DegenerateGeometry`] if the vector has zero length (or is not finite),
///   since the direction is then undefined.
pub fn cartesian_to_radec(
    cartesian_position: &Vector3<f64>,
) -> Result<EquatorialCoordinates, PlanetSimError> {
    let pos_norm = cartesian_position.norm();
    if !(pos_norm.is_finite() && pos_norm > 0.0) {
        return Err(PlanetSimError::DegenerateGeometry {
            x: cartesian_position.x,
            y: cartesian_position.y,
            z: cartesian_position.z,
        });
    }

    let alpha = principal_angle(cartesian_position.y.atan2(cartesian_position.x));
    let mut right_ascension = alpha.to_degrees() / DEG_PER_HOUR;
    if right_ascension >= 24.0 {
        right_ascension = 0.0;
    }

    // the ratio can exceed 1 by an ulp for vectors along the pole
    let declination = (cartesian_position.z / pos_norm)
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees();

    Ok(EquatorialCoordinates::new(right_ascension, declination))
}

/// Equatorial coordinates of `target` as seen from `observer`.
///
/// The relative vector `target − observer` is rotated from the ecliptic to the equatorial
/// frame, then converted to RA/Dec.
///
/// Arguments
/// ---------
/// * `observer`: heliocentric ecliptic position of the observing body (usually Earth).
/// * `target`: heliocentric ecliptic position of the observed body, at the same instant.
///
/// Errors
/// ------
/// * [`PlanetSimError::DegenerateGeometry`] if both positions coincide.
///
/// # See also
/// * [`ecliptic_to_equatorial`] – obliquity rotation
/// * [`cartesian_to_radec`] – final conversion to angles
pub fn to_equatorial(
    observer: &HeliocentricPosition,
    target: &HeliocentricPosition,
) -> Result<EquatorialCoordinates, PlanetSimError> {
    let relative = target.relative_to(observer);
    cartesian_to_radec(&ecliptic_to_equatorial(&relative))
}

#[cfg(test)]
mod ref_system_test {

    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_rotmt_is_active_rotation() {
        let v = rotmt(std::f64::consts::FRAC_PI_2, Axis::Z) * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);

        let v = rotmt(std::f64::consts::FRAC_PI_2, Axis::X) * Vector3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-15);

        let v = rotmt(std::f64::consts::FRAC_PI_2, Axis::Y) * Vector3::new(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(v, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_rotmt_orthonormal() {
        let r = rotmt(0.7, Axis::X) * rotmt(-1.3, Axis::Z);
        assert_abs_diff_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-14);
    }

    #[test]
    fn test_ecliptic_pole_in_equatorial_frame() {
        // the ecliptic north pole has Dec = 90° − ε and RA = 18h
        let pole = ecliptic_to_equatorial(&Vector3::new(0.0, 0.0, 1.0));
        let radec = cartesian_to_radec(&pole).unwrap();
        assert_abs_diff_eq!(radec.declination, 90.0 - EARTH_OBLIQUITY_DEG, epsilon = 1e-9);
        assert_abs_diff_eq!(radec.right_ascension, 18.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equinox_direction() {
        let radec = cartesian_to_radec(&Vector3::new(2.0, 0.0, 0.0)).unwrap();
        assert_eq!(radec, EquatorialCoordinates::new(0.0, 0.0));

        let radec = cartesian_to_radec(&Vector3::new(0.0, -3.0, 0.0)).unwrap();
        assert_abs_diff_eq!(radec.right_ascension, 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_equatorial_in_range() {
        let planet_a = HeliocentricPosition::new(1.496e11, -1.550e10, 0.0);
        let planet_b = HeliocentricPosition::new(1.496e11, 0.0, 1e10);

        let radec = to_equatorial(&planet_a, &planet_b).unwrap();
        assert!(radec.is_valid());
    }

    #[test]
    fn test_to_equatorial_random_pairs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let mut random_position = || {
                HeliocentricPosition::new(
                    rng.random_range(-5e12..5e12),
                    rng.random_range(-5e12..5e12),
                    rng.random_range(-5e11..5e11),
                )
            };
            let observer = random_position();
            let target = random_position();
            let radec = to_equatorial(&observer, &target).unwrap();
            assert!(radec.is_valid(), "{radec} out of range");
        }
    }

    #[test]
    fn test_direction_is_observer_to_target() {
        // target straight along +x of the observer: RA 0h, Dec 0°
        let observer = HeliocentricPosition::new(1.0e11, 5.0e10, 0.0);
        let target = HeliocentricPosition::new(3.0e11, 5.0e10, 0.0);
        let radec = to_equatorial(&observer, &target).unwrap();
        assert_abs_diff_eq!(radec.right_ascension, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(radec.declination, 0.0, epsilon = 1e-12);

        // swapping the pair looks the other way
        let radec = to_equatorial(&target, &observer).unwrap();
        assert_abs_diff_eq!(radec.right_ascension, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_positions() {
        let position = HeliocentricPosition::new(1.0e11, 2.0e10, -3.0e9);
        assert!(matches!(
            to_equatorial(&position, &position),
            Err(PlanetSimError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_is_valid() {
        assert!(EquatorialCoordinates::new(10.0, 30.0).is_valid());
        assert!(!EquatorialCoordinates::new(25.0, 30.0).is_valid());
        assert!(!EquatorialCoordinates::new(10.0, 95.0).is_valid());
        assert!(!EquatorialCoordinates::new(24.0, 0.0).is_valid());
    }
}
