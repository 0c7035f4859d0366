use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rentacar::application::car_service::CarService;
use rentacar::config::RentalConfig;
use rentacar::domain::car::CarCategory;
use rentacar::infrastructure::clock::FixedClock;
use rentacar::infrastructure::json_file::load_records;
use rentacar::infrastructure::seed::{SeedData, SeedOptions};
use rentacar::interfaces::csv::receipt_writer::ReceiptWriter;
use rentacar::interfaces::csv::request_reader::RentalRequestReader;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rent a car for every request in a CSV file and print the receipts
    Rent {
        /// Rental requests CSV file
        input: PathBuf,

        /// JSON car database
        #[arg(long)]
        cars: Option<PathBuf>,

        /// JSON car categories file
        #[arg(long)]
        categories: PathBuf,

        /// JSON service configuration (locale, currency, tax tiers). Its `cars`
        /// path is relative to the config file's directory.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Rental start date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
    /// Generate a sample database
    Seed {
        /// Directory receiving cars.json, carCategories.json and customers.json
        #[arg(long)]
        out: PathBuf,

        #[arg(long, default_value_t = 1)]
        categories: usize,

        #[arg(long, default_value_t = 2)]
        cars_per_category: usize,

        #[arg(long, default_value_t = 1)]
        customers: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Rent {
            input,
            cars,
            categories,
            config,
            start_date,
        } => rent(input, cars, categories, config, start_date).await,
        Command::Seed {
            out,
            categories,
            cars_per_category,
            customers,
        } => {
            let options = SeedOptions {
                categories,
                cars_per_category,
                customers,
            };
            let data = SeedData::generate(options, &mut rand::thread_rng());
            data.write_to(&out).await.into_diagnostic()
        }
    }
}

async fn rent(
    input: PathBuf,
    cars: Option<PathBuf>,
    categories: PathBuf,
    config: Option<PathBuf>,
    start_date: Option<NaiveDate>,
) -> Result<()> {
    let config = match (config, cars) {
        (Some(path), cars) => {
            let mut config = RentalConfig::from_file(&path).await.into_diagnostic()?;
            if let Some(cars) = cars {
                config.cars = cars;
            }
            config
        }
        (None, Some(cars)) => RentalConfig::new(cars),
        (None, None) => miette::bail!("either --cars or --config must be given"),
    };

    let mut service = CarService::from_config(&config);
    if let Some(date) = start_date {
        service = service.with_clock(Box::new(FixedClock(date)));
    }

    let categories: HashMap<String, CarCategory> = load_records::<CarCategory>(&categories)
        .await
        .into_diagnostic()?
        .into_iter()
        .map(|category| (category.id.clone(), category))
        .collect();

    let file = File::open(input).into_diagnostic()?;
    let reader = RentalRequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());

    for request in reader.requests() {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                warn!("Error reading rental request: {e}");
                continue;
            }
        };

        let Some(category) = categories.get(&request.category_id) else {
            warn!(category = %request.category_id, "Unknown car category, request skipped");
            continue;
        };

        match service.rent(&request.customer(), category, request.days).await {
            Ok(receipt) => writer.write_receipt(&receipt).into_diagnostic()?,
            Err(e) => warn!(customer = %request.customer_id, "Error renting car: {e}"),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
