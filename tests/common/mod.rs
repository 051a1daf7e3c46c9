use approx::assert_relative_eq;
use planetsim::orbit_type::{
    heliocentric_position::HeliocentricPosition, keplerian_element::OrbitalElements,
};

pub fn assert_elements_close(actual: &OrbitalElements, expected: &OrbitalElements, epsilon: f64) {
    assert_relative_eq!(
        actual.semi_major_axis,
        expected.semi_major_axis,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        epsilon = epsilon
    );
    assert_relative_eq!(actual.inclination, expected.inclination, epsilon = epsilon);
    assert_relative_eq!(
        actual.ascending_node_longitude,
        expected.ascending_node_longitude,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.periapsis_argument,
        expected.periapsis_argument,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.mean_anomaly,
        expected.mean_anomaly,
        epsilon = epsilon
    );
    assert_eq!(actual.elapsed_seconds, expected.elapsed_seconds);
}

/// Positions agree within `tolerance` meters, component-wise.
pub fn assert_position_close(
    actual: &HeliocentricPosition,
    expected: &HeliocentricPosition,
    tolerance: f64,
) {
    let gap = (actual.as_vector() - expected.as_vector()).norm();
    assert!(
        gap <= tolerance,
        "positions differ by {gap:.3e} m (> {tolerance:.3e} m)\n  actual:   {actual}\n  expected: {expected}"
    );
}
