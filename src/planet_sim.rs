//! # PlanetSim: one sky query, end to end
//!
//! This module defines [`PlanetSim`](crate::planet_sim::PlanetSim), the façade that wires the
//! environment, the Horizons client and the numerical core together:
//!
//! 1. **Elements** – the target's elements are fetched from JPL Horizons at the reference epoch
//!    ([`fetch_elements`]); the Earth's come from the environment ([`PlanetSimEnv::earth_at`]).
//! 2. **Propagation** – both element sets are propagated to the query instant
//!    ([`OrbitalElements::propagate`]).
//! 3. **Frame change** – the Earth→target vector becomes RA/Dec ([`to_equatorial`]).
//! 4. **Horizon** – when a site is given, Alt/Az and rise/transit/set are added
//!    ([`to_alt_az`], [`estimate_rise_set_transit`]).
//!
//! Steps 2–4 are available without any network access through
//! [`compute_from_elements`](crate::planet_sim::compute_from_elements).
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use planetsim::env_state::PlanetSimEnv;
//! use planetsim::observers::ObserverSite;
//! use planetsim::planet_sim::{PlanetSim, SkyQuery};
//! use planetsim::time::parse_utc;
//!
//! # async fn run() -> Result<(), planetsim::planetsim_errors::PlanetSimError> {
//! let sim = PlanetSim::new(PlanetSimEnv::new()?);
//! let query = SkyQuery::new("499", parse_utc("2025-04-18T10:00:00Z")?)
//!     .with_site(ObserverSite::new(50.08, 14.42)?);
//!
//! let report = sim.compute(&query).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
use hifitime::Epoch;
use log::info;

use crate::{
    constants::Meter,
    env_state::PlanetSimEnv,
    jpl_request::horizons_elements::fetch_elements,
    observers::{
        horizon::{estimate_rise_set_transit, to_alt_az, HorizontalCoordinates, RiseSetTransit},
        ObserverSite,
    },
    orbit_type::keplerian_element::OrbitalElements,
    planetsim_errors::PlanetSimError,
    ref_system::{to_equatorial, EquatorialCoordinates},
};

/// What to compute: one body, one instant, optionally one observer site.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyQuery {
    /// Horizons object identifier, e.g. `"499"`.
    pub body: String,
    pub time: Epoch,
    /// Without a site only the equatorial part of the report is produced.
    pub site: Option<ObserverSite>,
}

impl SkyQuery {
    pub fn new(body: impl Into<String>, time: Epoch) -> Self {
        SkyQuery {
            body: body.into(),
            time,
            site: None,
        }
    }

    pub fn with_site(self, site: ObserverSite) -> Self {
        SkyQuery {
            site: Some(site),
            ..self
        }
    }
}

/// Local-horizon part of a [`SkyReport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonView {
    pub horizontal: HorizontalCoordinates,
    pub rise_set_transit: RiseSetTransit,
}

/// Result of a [`SkyQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkyReport {
    pub body: String,
    pub time: Epoch,
    pub site: Option<ObserverSite>,
    pub earth_sun_distance: Meter,
    pub body_sun_distance: Meter,
    pub equatorial: EquatorialCoordinates,
    /// Present iff the query had a site.
    pub horizon: Option<HorizonView>,
}

/// Run the numerical pipeline on already known elements.
///
/// Arguments
/// ---------
/// * `query`: body, instant and optional site; `query.body` is only copied into the report.
/// * `earth`: Earth elements, with their elapsed time set for `query.time`.
/// * `body`: target elements, with their elapsed time set for `query.time`.
///
/// Return
/// ------
/// * the [`SkyReport`] of the query.
///
/// Errors
/// ------
/// * propagation errors of [`OrbitalElements::propagate`] (either body).
/// * [`PlanetSimError::DegenerateGeometry`] if both bodies end up at the same position.
pub fn compute_from_elements(
    query: &SkyQuery,
    earth: &OrbitalElements,
    body: &OrbitalElements,
) -> Result<SkyReport, PlanetSimError> {
    let earth_position = earth.propagate()?;
    let body_position = body.propagate()?;

    let equatorial = to_equatorial(&earth_position, &body_position)?;

    let horizon = query.site.map(|site| HorizonView {
        horizontal: to_alt_az(&equatorial, &query.time, &site),
        rise_set_transit: estimate_rise_set_transit(&equatorial, &query.time, site.latitude()),
    });

    Ok(SkyReport {
        body: query.body.clone(),
        time: query.time,
        site: query.site,
        earth_sun_distance: earth_position.distance_from_sun(),
        body_sun_distance: body_position.distance_from_sun(),
        equatorial,
        horizon,
    })
}

/// Façade holding the environment of the queries.
#[derive(Debug, Clone)]
pub struct PlanetSim {
    env: PlanetSimEnv,
}

impl PlanetSim {
    pub fn new(env: PlanetSimEnv) -> Self {
        PlanetSim { env }
    }

    pub fn env(&self) -> &PlanetSimEnv {
        &self.env
    }

    /// Fetch the target's elements and compute its report.
    ///
    /// Errors
    /// ------
    /// * the request and parsing errors of [`fetch_elements`].
    /// * the computation errors of [`compute_from_elements`].
    pub async fn compute(&self, query: &SkyQuery) -> Result<SkyReport, PlanetSimError> {
        let body = fetch_elements(&self.env, &query.body, &query.time).await?;
        let earth = self.env.earth_at(&query.time);

        let report = compute_from_elements(query, &earth, &body)?;
        info!(
            "Body {} at {}: {}",
            report.body, report.time, report.equatorial
        );
        Ok(report)
    }
}
