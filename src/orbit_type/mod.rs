//! # Orbital element representations
//!
//! This module holds the value types that flow through the propagation stage:
//!
//! - [`keplerian_element`](crate::orbit_type::keplerian_element) – Classical Keplerian elements
//!   `(a, e, i, ω, Ω, M₀)` plus the elapsed time since their epoch, and the two-body
//!   propagation to a heliocentric position.
//! - [`heliocentric_position`](crate::orbit_type::heliocentric_position) – Cartesian position
//!   in the heliocentric ecliptic frame, in meters.
//!
//! ## Typical workflow
//!
//! ```rust, no_run
//! use planetsim::orbit_type::keplerian_element::OrbitalElements;
//!
//! let earth = OrbitalElements::from_horizons_units(
//!     1.496e8, 0.0167, 0.0, 102.9373, 0.0, 100.0, 1.0e7,
//! );
//! let position = earth.propagate()?;
//! println!("{position}");
//! # Ok::<(), planetsim::planetsim_errors::PlanetSimError>(())
//! ```

/// Heliocentric Cartesian position produced by propagation.
pub mod heliocentric_position;

/// Classical Keplerian elements structure and two-body propagation.
pub mod keplerian_element;
