use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use hifitime::Epoch;
use log::error;

use planetsim::{
    env_state::PlanetSimEnv,
    observers::ObserverSite,
    planet_sim::{PlanetSim, SkyQuery},
    planetsim_errors::PlanetSimError,
    report::write_report,
    time::parse_utc,
};

/// Command line arguments of the sky position calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Position of a solar system body in the sky, from JPL Horizons orbital elements"
)]
struct Args {
    /// Observation instant, ISO 8601 UTC (e.g. 2025-04-18T10:00:00Z)
    #[arg(short, long, value_parser = parse_utc)]
    time: Epoch,

    /// JPL Horizons body identifier (e.g. 499 for Mars)
    #[arg(short, long)]
    body: String,

    /// Observer latitude in degrees, north positive
    #[arg(short = 'p', long, allow_negative_numbers = true, requires = "longitude")]
    latitude: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(short, long, allow_negative_numbers = true, requires = "latitude")]
    longitude: Option<f64>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    file: Option<PathBuf>,
}

async fn run(args: Args) -> Result<(), PlanetSimError> {
    let mut query = SkyQuery::new(args.body, args.time);
    if let (Some(latitude), Some(longitude)) = (args.latitude, args.longitude) {
        query = query.with_site(ObserverSite::new(latitude, longitude)?);
    }

    let sim = PlanetSim::new(PlanetSimEnv::new()?);
    let report = sim.compute(&query).await?;
    write_report(&report, args.file.as_deref())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
