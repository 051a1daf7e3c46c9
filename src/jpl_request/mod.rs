//! # JPL Horizons requests
//!
//! Retrieval of osculating orbital elements from the
//! [JPL Horizons API](https://ssd-api.jpl.nasa.gov/doc/horizons.html).
//!
//! - [`horizons_elements`](crate::jpl_request::horizons_elements) builds the `ELEMENTS` query,
//!   performs the asynchronous request through the [`PlanetSimEnv`](crate::env_state::PlanetSimEnv)
//!   HTTP client, and extracts the `A, EC, IN, W, OM, MA` fields of the returned table into
//!   [`OrbitalElements`](crate::orbit_type::keplerian_element::OrbitalElements).
//!
//! Parsing is kept separate from fetching so that captured responses can be decoded offline.

/// ELEMENTS query, fetch and text parsing.
pub mod horizons_elements;
