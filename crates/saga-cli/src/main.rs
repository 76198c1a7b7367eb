mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use saga_booking::config::BookingConfig;
use saga_booking::operations::BookingApp;
use saga_booking::providers::{Chance, RandomFlightBookingService, RandomHotelBookingService};
use tracing::info;

use crate::error::{CliError, Result};

#[derive(Parser)]
#[command(name = "saga-book")]
#[command(version)]
#[command(about = "Book a trip, cancelling every reservation if any of them fails", long_about = None)]
struct Cli {
    /// Itinerary file (default: Tokyo/Seoul round trip with one hotel night)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Seed for the simulated booking services (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a reservation fails, overriding the itinerary file
    #[arg(long, value_name = "RATE")]
    booking_failure_rate: Option<f64>,

    /// Probability that a cancellation fails, overriding the itinerary file
    #[arg(long, value_name = "RATE")]
    cancellation_failure_rate: Option<f64>,

    /// Print the step and compensation trail after booking
    #[arg(long)]
    audit: bool,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => BookingConfig::load(path)?,
        None => BookingConfig::demo()?,
    };
    config.override_rates(cli.booking_failure_rate, cli.cancellation_failure_rate)?;

    let chance = match cli.seed {
        Some(seed) => {
            info!(seed, "using seeded booking services");
            Chance::seeded(seed)
        }
        None => Chance::from_os_rng(),
    };
    let app = BookingApp::new(
        RandomFlightBookingService::new(chance.clone(), config.failure_rates),
        RandomHotelBookingService::new(chance, config.failure_rates),
    );

    let (result, audit_log) = app.book_with_audit(&config.itinerary);
    if cli.audit {
        println!("{}", output::format_audit(&audit_log));
    }

    let bookings = result?;
    println!("{}", output::format_bookings(&bookings));
    Ok(())
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
