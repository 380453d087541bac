mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use calculator::Calculator;
use clap::{CommandFactory, Parser};

use crate::commands::{Command, Report};
use crate::config::{AppConfig, OutputFormat};

/// Calculator - validating four-function arithmetic
#[derive(Parser)]
#[command(name = "calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the result as JSON (overrides config)
    #[arg(long, global = true)]
    json: bool,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose, cli.json);

    logging::init(&config.logging)?;

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::from(2));
    };

    let operation = command.name();
    tracing::info!(operation, "evaluating");

    match command.execute(&Calculator::new()) {
        Ok(result) => {
            match config.output.format {
                OutputFormat::Text => println!("{result}"),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string(&Report { operation, result })?);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(operation, kind = err.kind().as_str(), "operation rejected");
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
