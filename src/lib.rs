pub mod constants;
pub mod earth_orientation;
pub mod env_state;
pub mod jpl_request;
pub mod kepler;
pub mod observers;
pub mod orbit_type;
pub mod planet_sim;
pub mod planetsim_errors;
pub mod ref_system;
pub mod report;
pub mod time;
