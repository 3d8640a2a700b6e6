// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Printquote CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use printquote::cli::{Outcome, Reporter, Runner};
use printquote::{logging, Estimator, PricingConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "printquote")]
#[command(about = "Printquote - 3D print geometry and price estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate model files (directories are searched for .stl, .obj and .3mf)
    Estimate {
        /// Input files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Pricing config file (defaults to pricing.toml plus PRICING_* overrides)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print estimates as JSON
        #[arg(long)]
        json: bool,

        /// With --json, print the job summary instead of the full estimate
        #[arg(long, requires = "json")]
        summary: bool,
    },

    /// Show the effective pricing configuration as TOML
    Config {
        /// Pricing config file to load
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write the configuration to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup(cli.verbose)?;

    match cli.command {
        Commands::Estimate {
            inputs,
            config,
            json,
            summary,
        } => estimate_command(&inputs, config, json, summary),
        Commands::Config { config, output } => config_command(config, output),
        Commands::Version => {
            println!("Printquote v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<PricingConfig> {
    let config = match path {
        Some(path) => PricingConfig::from_file(path)?,
        None => PricingConfig::load()?,
    };
    config.validate().context("Invalid pricing configuration")?;
    Ok(config)
}

fn estimate_command(
    inputs: &[PathBuf],
    config: Option<PathBuf>,
    json: bool,
    summary: bool,
) -> Result<()> {
    let runner = Runner::new(Estimator::new(load_config(config)?));
    let reports = runner.run(inputs);
    if reports.is_empty() {
        bail!("No model files found");
    }

    let mut failures = 0;
    let mut documents = Vec::new();

    for report in &reports {
        if let Outcome::Failed(_) = report.outcome {
            failures += 1;
        }

        if !json {
            Reporter::report_file(report);
            continue;
        }

        match &report.outcome {
            Outcome::Estimated(estimate) if summary => {
                documents.push(serde_json::to_value(estimate.job_summary())?)
            }
            Outcome::Estimated(estimate) => documents.push(serde_json::to_value(estimate)?),
            Outcome::Skipped(reason) => warn!("{}: skipped ({})", report.path.display(), reason),
            Outcome::Failed(message) => {
                Reporter::report_error(&format!("{}: {}", report.path.display(), message))
            }
        }
    }

    if json {
        let output = if documents.len() == 1 {
            serde_json::to_string_pretty(&documents[0])?
        } else {
            serde_json::to_string_pretty(&documents)?
        };
        println!("{}", output);
    }

    if failures > 0 {
        bail!("{} of {} files could not be read", failures, reports.len());
    }

    Ok(())
}

fn config_command(config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let config = load_config(config)?;

    match output {
        Some(path) => {
            config.save(&path)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", config.to_toml()?),
    }

    Ok(())
}
