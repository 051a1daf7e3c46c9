use nalgebra::Vector3;
use std::{fmt, ops::Sub};

use crate::constants::Meter;

/// Position of a body relative to the Sun.
///
/// Frame
/// -----
/// Heliocentric ecliptic, right-handed: `x` toward the reference equinox, `z` toward the
/// ecliptic north pole. All components are in **meters**.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    pub x: Meter,
    pub y: Meter,
    pub z: Meter,
}

impl HeliocentricPosition {
    pub fn new(x: Meter, y: Meter, z: Meter) -> Self {
        HeliocentricPosition { x, y, z }
    }

    /// Euclidean distance to the origin (the Sun), in meters.
    pub fn distance_from_sun(&self) -> Meter {
        self.as_vector().norm()
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Vector pointing from `observer` to `self`, in meters.
    pub fn relative_to(&self, observer: &HeliocentricPosition) -> Vector3<f64> {
        self.as_vector() - observer.as_vector()
    }
}

impl From<Vector3<f64>> for HeliocentricPosition {
    fn from(v: Vector3<f64>) -> Self {
        HeliocentricPosition::new(v.x, v.y, v.z)
    }
}

impl From<HeliocentricPosition> for Vector3<f64> {
    fn from(p: HeliocentricPosition) -> Self {
        p.as_vector()
    }
}

/// `target - observer` is the vector from `observer` to `target`.
impl Sub for HeliocentricPosition {
    type Output = Vector3<f64>;

    fn sub(self, observer: HeliocentricPosition) -> Vector3<f64> {
        self.relative_to(&observer)
    }
}

impl fmt::Display for HeliocentricPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Heliocentric Coordinates: x={:.6} m, y={:.6} m, z={:.6} m",
            self.x, self.y, self.z
        )
    }
}

#[cfg(test)]
mod heliocentric_position_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_from_sun() {
        let position = HeliocentricPosition::new(1.496e11, 0.0, 0.0);
        assert_relative_eq!(position.distance_from_sun(), 1.496e11);

        let position = HeliocentricPosition::new(3.0, -4.0, 12.0);
        assert_relative_eq!(position.distance_from_sun(), 13.0);
    }

    #[test]
    fn test_relative_vector_points_to_target() {
        let observer = HeliocentricPosition::new(1.496e11, -1.550e10, 0.0);
        let target = HeliocentricPosition::new(1.496e11, 0.0, 1e10);
        let delta = target.relative_to(&observer);
        assert_eq!(delta, Vector3::new(0.0, 1.550e10, 1e10));
        assert_eq!(target - observer, delta);
    }

    #[test]
    fn test_vector_conversion() {
        let position = HeliocentricPosition::new(1.0, 2.0, 3.0);
        let v: Vector3<f64> = position.into();
        assert_eq!(HeliocentricPosition::from(v), position);
    }
}
