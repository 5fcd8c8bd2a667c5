use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kitchen_retail::commands::{self, BatchRequest};
use kitchen_retail::config::Config;
use kitchen_retail_shopping::MeasurementSystem;

/// kitchen-retail - recipe quantities to store purchases
#[derive(Parser)]
#[command(name = "kitchen-retail")]
#[command(about = "Turn recipe quantities into retail purchase units", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a single ingredient quantity
    Normalize {
        ingredient: String,

        #[arg(allow_negative_numbers = true)]
        quantity: f64,

        #[arg(default_value = "")]
        unit: String,

        /// imperial or metric (overrides config file)
        #[arg(long)]
        system: Option<MeasurementSystem>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Print the grocery integration payload
        #[arg(long)]
        grocery: bool,
    },
    /// Normalize a JSON array of { ingredient, quantity, unit } from a file or stdin
    Batch {
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        system: Option<MeasurementSystem>,

        #[arg(long)]
        grocery: bool,
    },
    /// Check the package catalogs and density table for drift
    CheckTables,
    /// List measurement systems and their common units
    Systems,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    kitchen_retail::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Normalize {
            ingredient,
            quantity,
            unit,
            system,
            json,
            grocery,
        } => {
            let request = BatchRequest {
                ingredient,
                quantity,
                unit,
            };
            normalize_command(&config, request, system, json, grocery)
        }
        Commands::Batch {
            input,
            system,
            grocery,
        } => batch_command(&config, input, system, grocery),
        Commands::CheckTables => check_tables_command(&config),
        Commands::Systems => systems_command(),
    }
}

#[tracing::instrument(skip(config))]
fn normalize_command(
    config: &Config,
    request: BatchRequest,
    system: Option<MeasurementSystem>,
    json: bool,
    grocery: bool,
) -> Result<()> {
    let system = system.unwrap_or(config.normalizer.measurement_system);
    let normalizer = commands::build_normalizer(config);
    let output = commands::normalize_one(&normalizer, &request, system, grocery);

    match output {
        commands::NormalizeOutput::Normalized(result) if !json => {
            println!("{}", result.formatted())
        }
        output => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}

#[tracing::instrument(skip(config))]
fn batch_command(
    config: &Config,
    input: Option<PathBuf>,
    system: Option<MeasurementSystem>,
    grocery: bool,
) -> Result<()> {
    let system = system.unwrap_or(config.normalizer.measurement_system);

    let requests = match input {
        Some(path) => commands::read_batch(BufReader::new(File::open(path)?))?,
        None => commands::read_batch(io::stdin().lock())?,
    };

    let normalizer = commands::build_normalizer(config);
    let outputs = commands::normalize_batch(&normalizer, &requests, system, grocery);

    println!("{}", serde_json::to_string_pretty(&outputs)?);

    Ok(())
}

#[tracing::instrument(skip(config))]
fn check_tables_command(config: &Config) -> Result<()> {
    commands::check_tables(config)?;
    println!("Package catalogs and density table are consistent");

    Ok(())
}

fn systems_command() -> Result<()> {
    for summary in commands::systems() {
        println!("{:<10} {}", summary.name.as_ref(), summary.display_name);
        println!("           volume: {}", summary.volume_units.join(", "));
        println!("           weight: {}", summary.weight_units.join(", "));
    }

    Ok(())
}
