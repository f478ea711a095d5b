//! Command-line dispatch report: trucks.csv + cargo.csv -> optimal mapping.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use freight_match::cost_matrix::BuildOptions;
use freight_match::haversine::EARTH_RADIUS_KM;
use freight_match::optimizer::FleetOptimizer;

#[derive(Debug, Parser)]
#[command(name = "freight-match", about = "Match trucks to cargo pickups with minimum total travel")]
struct Args {
    /// Trucks CSV (truck,city,state,lat,lng).
    #[arg(long, env = "FREIGHT_TRUCKS", default_value = "trucks.csv")]
    trucks: PathBuf,

    /// Cargo CSV (product,origin_*,destination_*).
    #[arg(long, env = "FREIGHT_CARGO", default_value = "cargo.csv")]
    cargo: PathBuf,

    /// Sphere radius used for distances, in kilometers.
    #[arg(long, env = "FREIGHT_EARTH_RADIUS_KM", default_value_t = EARTH_RADIUS_KM)]
    earth_radius_km: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freight_match=info")),
        )
        .init();

    let args = Args::parse();
    let options = BuildOptions {
        earth_radius_km: args.earth_radius_km,
        ..BuildOptions::default()
    };

    let mut optimizer = FleetOptimizer::new().with_options(options);
    let result = optimizer
        .load(&args.trucks, &args.cargo)
        .and_then(|()| optimizer.optimize());

    match result {
        Ok(optimization) => {
            println!("{}", optimization.plan);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
