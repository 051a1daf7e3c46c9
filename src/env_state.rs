//! # planetsim environment state
//!
//! This module defines [`crate::env_state::PlanetSimEnv`], the **shared environment object**
//! handed to every operation that needs more than pure inputs. It provides access to:
//!
//! - A persistent **HTTP client** used to query the JPL Horizons API.
//! - The **Horizons endpoint** URL (overridable for mirrors or local fixtures).
//! - The **reference epoch** of the orbital element sets (2025-01-01T13:00:00 UTC).
//! - The **reference Earth elements** at that epoch, used as the observing body.
//!
//! ## Structure
//!
//! ```text
//! PlanetSimEnv
//! ├── http_client     (reqwest::Client, global timeout)
//! ├── horizons_url    (String)
//! ├── reference_epoch (hifitime::Epoch)
//! └── reference_earth (OrbitalElements, elapsed = 0)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use planetsim::env_state::PlanetSimEnv;
//! use planetsim::time::parse_utc;
//!
//! let env = PlanetSimEnv::new()?;
//! let when = parse_utc("2025-04-18T10:00:00Z")?;
//!
//! // Earth elements advanced to the query instant
//! let earth = env.earth_at(&when);
//! println!("{earth}");
//! # Ok::<(), planetsim::planetsim_errors::PlanetSimError>(())
//! ```
//!
//! The object is cheaply cloneable: `reqwest::Client` shares its connection pool between clones.
use hifitime::Epoch;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    orbit_type::keplerian_element::OrbitalElements, planetsim_errors::PlanetSimError,
    time::seconds_between,
};

/// JPL Horizons REST endpoint
pub const HORIZONS_API_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons.api";

/// Global timeout applied to every HTTP request
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Heliocentric ecliptic elements of the Earth at the reference epoch, Horizons units
/// (km and degrees), in the order `A, EC, IN, W, OM, MA`.
const EARTH_ELEMENTS_AT_REFERENCE: [f64; 6] = [
    1.482723189000168E+08,
    1.293398280839581E-02,
    7.530442636380576E-03,
    6.804721922709237E+01,
    6.787791105814221E+00,
    2.587134472915172E+01,
];

/// Epoch of the element sets, 2025-01-01T13:00:00 UTC.
pub fn default_reference_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2025, 1, 1, 13, 0, 0)
}

/// Reference Earth elements at [`default_reference_epoch`], with zero elapsed time.
pub fn default_reference_earth() -> OrbitalElements {
    let [a, e, i, w, om, ma] = EARTH_ELEMENTS_AT_REFERENCE;
    OrbitalElements::from_horizons_units(a, e, i, w, om, ma, 0.0)
}

fn build_http_client(timeout: Duration) -> Result<Client, PlanetSimError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// This object is passed to the operations of the library that reach outside pure computation.
///
/// # Fields
///
/// * `http_client` - A reqwest client used to make HTTP requests
/// * `horizons_url` - Endpoint of the JPL Horizons API
/// * `reference_epoch` - Epoch at which the element sets are expressed
/// * `reference_earth` - Earth elements at `reference_epoch`
#[derive(Debug, Clone)]
pub struct PlanetSimEnv {
    pub http_client: Client,
    pub horizons_url: String,
    pub reference_epoch: Epoch,
    pub reference_earth: OrbitalElements,
}

impl Default for PlanetSimEnv {
    fn default() -> Self {
        let http_client = build_http_client(DEFAULT_HTTP_TIMEOUT).unwrap_or_else(|err| {
            warn!("Falling back to an HTTP client without timeout: {err}");
            Client::default()
        });
        PlanetSimEnv::with_client(http_client)
    }
}

impl PlanetSimEnv {
    /// Create a new environment with production settings
    ///
    /// Return
    /// ------
    /// * A new environment
    ///     - The HTTP client has a global timeout of [`DEFAULT_HTTP_TIMEOUT`]
    ///     - Requests go to [`HORIZONS_API_URL`]
    ///     - The reference epoch and Earth elements are the built-in ones
    ///
    /// Errors
    /// ------
    /// * [`PlanetSimError::ReqwestError`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, PlanetSimError> {
        Ok(PlanetSimEnv::with_client(build_http_client(
            DEFAULT_HTTP_TIMEOUT,
        )?))
    }

    fn with_client(http_client: Client) -> Self {
        PlanetSimEnv {
            http_client,
            horizons_url: HORIZONS_API_URL.to_string(),
            reference_epoch: default_reference_epoch(),
            reference_earth: default_reference_earth(),
        }
    }

    /// Replace the HTTP client by one with another global timeout.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, PlanetSimError> {
        Ok(PlanetSimEnv {
            http_client: build_http_client(timeout)?,
            ..self
        })
    }

    pub fn with_horizons_url(self, url: impl Into<String>) -> Self {
        PlanetSimEnv {
            horizons_url: url.into(),
            ..self
        }
    }

    pub fn with_reference_epoch(self, reference_epoch: Epoch) -> Self {
        PlanetSimEnv {
            reference_epoch,
            ..self
        }
    }

    pub fn with_reference_earth(self, reference_earth: OrbitalElements) -> Self {
        PlanetSimEnv {
            reference_earth,
            ..self
        }
    }

    /// Seconds from the reference epoch to `at` (negative before it).
    pub fn elapsed_since_reference(&self, at: &Epoch) -> f64 {
        seconds_between(&self.reference_epoch, at)
    }

    /// Reference Earth elements advanced to `at`.
    pub fn earth_at(&self, at: &Epoch) -> OrbitalElements {
        self.reference_earth
            .with_elapsed_seconds(self.elapsed_since_reference(at))
    }

    /// GET `url` with the query parameters and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, PlanetSimError> {
        debug!("GET {url} with {} query parameters", query.len());
        let reply = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(reply)
    }
}
