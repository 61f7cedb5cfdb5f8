// ABOUTME: Thrive CLI - command-line front end for the growth and nutrition scoring engine
// ABOUTME: Runs BMI assessments, growth histories, intake lookups, and nutrient analyses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors
//!
//! Usage:
//! ```bash
//! # BMI and BMI-for-age percentile for a 10 year old
//! thrive-cli bmi --height 140 --weight 32 --age 10 --sex female
//!
//! # Same, as JSON
//! thrive-cli --json bmi --height 140 --weight 32 --age 10 --sex female
//!
//! # Recommended daily intakes for an age and sex
//! thrive-cli recommendations --age 6 --sex male
//!
//! # Analyze a day of measured nutrient totals
//! thrive-cli analyze --totals day.json --age 6 --sex male
//!
//! # Evaluate a file of stored measurements
//! thrive-cli history --measurements growth.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thrive_engine::logging::LoggingConfig;
use thrive_engine::models::Sex;
use thrive_engine::EngineConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "thrive-cli",
    about = "Thrive growth and nutrition scoring CLI",
    long_about = "Command-line front end for BMI-for-age percentiles and nutrient adequacy scoring."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate BMI, percentile, and weight-status category
    Bmi {
        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Age in years (fractional allowed)
        #[arg(long)]
        age: f64,

        /// Sex: male, female, or other
        #[arg(long)]
        sex: Sex,
    },

    /// Show recommended daily intakes for an age and sex
    Recommendations {
        /// Age in years
        #[arg(long)]
        age: f64,

        /// Sex: male, female, or other
        #[arg(long)]
        sex: Sex,
    },

    /// Analyze measured daily nutrient totals
    Analyze {
        /// JSON file mapping nutrient names to measured amounts
        #[arg(long)]
        totals: PathBuf,

        /// Age in years
        #[arg(long)]
        age: f64,

        /// Sex: male, female, or other
        #[arg(long)]
        sex: Sex,
    },

    /// Evaluate a JSON array of stored measurements
    History {
        /// JSON file containing measurement records
        #[arg(long)]
        measurements: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = EngineConfig::global();
    debug!(?config, "Engine configuration");

    match cli.command {
        Command::Bmi {
            height,
            weight,
            age,
            sex,
        } => commands::growth::bmi(height, weight, age, sex, &config.growth, cli.json)?,
        Command::Recommendations { age, sex } => {
            commands::nutrition::recommendations(age, sex, &config.nutrient_analysis, cli.json)?;
        }
        Command::Analyze { totals, age, sex } => {
            commands::nutrition::analyze(&totals, age, sex, &config.nutrient_analysis, cli.json)?;
        }
        Command::History { measurements } => {
            commands::growth::history(&measurements, &config.growth, cli.json)?;
        }
    }

    Ok(())
}
