//! `panchanga` binary: serve the HTTP endpoint or compute one answer.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use panchanga::{AyanamshaSystem, CivilMoment, GeoPoint, Settings, compute, init};
use panchanga_cli::server;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panchanga", about = "Panchang calculation service")]
struct Cli {
    /// Sidereal reference system for ayanamsha-corrected derivations
    #[arg(long, value_enum, default_value = "lahiri", global = true)]
    ayanamsha: AyanamshaArg,

    /// Display timezone offset in hours for sunrise/sunset and weekday
    #[arg(long, default_value_t = 5.5, global = true)]
    tz_offset: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP query endpoint
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: String,
    },
    /// Compute one Panchang and print JSON to stdout
    Astro {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
        /// Decimal hour, e.g. 8.49
        #[arg(long)]
        hour: f64,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AyanamshaArg {
    Lahiri,
    Kp,
    Raman,
    FaganBradley,
}

impl AyanamshaArg {
    fn to_system(self) -> AyanamshaSystem {
        match self {
            Self::Lahiri => AyanamshaSystem::Lahiri,
            Self::Kp => AyanamshaSystem::KP,
            Self::Raman => AyanamshaSystem::Raman,
            Self::FaganBradley => AyanamshaSystem::FaganBradley,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let settings = Settings {
        ayanamsha: cli.ayanamsha.to_system(),
        tz_offset_hours: cli.tz_offset,
        ..Settings::default()
    };
    if let Err(e) = init(settings) {
        tracing::error!("initialization failed: {e}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Commands::Serve { bind } => match server::serve(&bind) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("{e}");
                ExitCode::FAILURE
            }
        },
        Commands::Astro {
            year,
            month,
            day,
            hour,
            lat,
            lon,
        } => {
            let moment = CivilMoment::new(year, month, day, hour);
            let point = GeoPoint::new(lat, lon);
            match compute(&moment, &point) {
                Ok(panchang) => {
                    let body = serde_json::to_string_pretty(&panchang)
                        .expect("panchang record serializes");
                    println!("{body}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
