use thiserror::Error;

use crate::constants::{Degree, Meter, Radian};

#[derive(Error, Debug)]
pub enum PlanetSimError {
    #[error("Invalid eccentricity {eccentricity}: only elliptic orbits (0 <= e < 1) are supported")]
    InvalidEccentricity { eccentricity: f64 },

    #[error("Invalid semi-major axis {semi_major_axis} m: must be finite and positive")]
    InvalidSemiMajorAxis { semi_major_axis: Meter },

    #[error(
        "Kepler equation did not converge after {iterations} iterations \
         (M = {mean_anomaly} rad, e = {eccentricity}, last correction = {last_correction:e} rad)"
    )]
    NonConvergence {
        mean_anomaly: Radian,
        eccentricity: f64,
        iterations: usize,
        last_correction: Radian,
    },

    #[error("Observer and target positions coincide at ({x}, {y}, {z}) m: direction is undefined")]
    DegenerateGeometry { x: Meter, y: Meter, z: Meter },

    #[error("Invalid observer site: latitude {latitude}° must be in [-90, 90] and longitude {longitude}° in [-180, 180]")]
    InvalidObserverSite { latitude: Degree, longitude: Degree },

    #[error("Invalid ISO time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Orbital element field '{0}' not found in the Horizons response")]
    MissingElementField(&'static str),

    #[error("Unable to read orbital element field '{field}' from value '{value}'")]
    InvalidElementValue { field: &'static str, value: String },

    #[error("JPL Horizons returned an unusable response: {0}")]
    HorizonsResponse(String),

    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for PlanetSimError {
    fn eq(&self, other: &Self) -> bool {
        use PlanetSimError::*;
        match (self, other) {
            (InvalidEccentricity { eccentricity: a }, InvalidEccentricity { eccentricity: b }) => {
                a.to_bits() == b.to_bits()
            }
            (
                InvalidSemiMajorAxis { semi_major_axis: a },
                InvalidSemiMajorAxis { semi_major_axis: b },
            ) => a.to_bits() == b.to_bits(),
            (
                NonConvergence {
                    mean_anomaly: m1,
                    eccentricity: e1,
                    iterations: i1,
                    ..
                },
                NonConvergence {
                    mean_anomaly: m2,
                    eccentricity: e2,
                    iterations: i2,
                    ..
                },
            ) => m1.to_bits() == m2.to_bits() && e1.to_bits() == e2.to_bits() && i1 == i2,
            (
                DegenerateGeometry { x: x1, y: y1, z: z1 },
                DegenerateGeometry { x: x2, y: y2, z: z2 },
            ) => x1.to_bits() == x2.to_bits() && y1.to_bits() == y2.to_bits() && z1.to_bits() == z2.to_bits(),
            (
                InvalidObserverSite {
                    latitude: la1,
                    longitude: lo1,
                },
                InvalidObserverSite {
                    latitude: la2,
                    longitude: lo2,
                },
            ) => la1.to_bits() == la2.to_bits() && lo1.to_bits() == lo2.to_bits(),
            (InvalidTimeFormat(a), InvalidTimeFormat(b)) => a == b,
            (MissingElementField(a), MissingElementField(b)) => a == b,
            (
                InvalidElementValue {
                    field: f1,
                    value: v1,
                },
                InvalidElementValue {
                    field: f2,
                    value: v2,
                },
            ) => f1 == f2 && v1 == v2,
            (HorizonsResponse(a), HorizonsResponse(b)) => a == b,

            // foreign errors are not comparable: same variant means equal
            (ReqwestError(_), ReqwestError(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
