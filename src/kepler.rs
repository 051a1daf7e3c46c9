use log::warn;

use crate::constants::{Radian, DPI, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};
use crate::planetsim_errors::PlanetSimError;

/// Return the principal value of an angle in radians, in [0, 2π).
pub(crate) fn principal_angle(a: f64) -> f64 {
    let r = a.rem_euclid(DPI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly.
///
/// Newton–Raphson iteration started from `E₀ = M + e·sin(M)`, with the correction
///
/// ```text
/// ΔE = (M − E + e·sin E) / (1 − e·cos E)
/// ```
///
/// applied until `|ΔE| < 1e-6` rad. The mean anomaly is first reduced to `[0, 2π)`; the removed
/// whole turns are added back to the result so that `E − e·sin(E) = M` holds for the caller's
/// `M` and not only for its principal value.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians (any finite value).
/// * `eccentricity`: orbital eccentricity, `0 <= e < 1`.
///
/// Return
/// ------
/// * the eccentric anomaly `E` in radians.
///
/// Errors
/// ------
/// * [`PlanetSimError::InvalidEccentricity`] if `e` is outside `[0, 1)` or NaN.
/// * [`PlanetSimError::NonConvergence`] if the correction is still above tolerance after
///   [`KEPLER_MAX_ITERATIONS`] steps (including non-finite `M`).
pub fn solve_kepler_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
) -> Result<Radian, PlanetSimError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(PlanetSimError::InvalidEccentricity { eccentricity });
    }

    let reduced = principal_angle(mean_anomaly);
    let turns = mean_anomaly - reduced;

    let mut ecc_anomaly = reduced + eccentricity * reduced.sin();
    let mut delta = f64::INFINITY;

    for _ in 0..KEPLER_MAX_ITERATIONS {
        delta = (reduced - ecc_anomaly + eccentricity * ecc_anomaly.sin())
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() < KEPLER_TOLERANCE {
            return Ok(ecc_anomaly + turns);
        }
    }

    warn!(
        "Kepler solver gave up after {KEPLER_MAX_ITERATIONS} iterations (M = {mean_anomaly}, e = {eccentricity})"
    );
    Err(PlanetSimError::NonConvergence {
        mean_anomaly,
        eccentricity,
        iterations: KEPLER_MAX_ITERATIONS,
        last_correction: delta,
    })
}
