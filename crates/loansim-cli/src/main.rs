mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::form::{PresetsArgs, ReportArgs, SimulateArgs};
use commands::help::HelpArgs;
use commands::quote::QuoteArgs;

/// Secured-loan simulation from the command line
#[derive(Parser)]
#[command(
    name = "loansim",
    version,
    about = "Secured-loan simulation from the command line",
    long_about = "Simulates a collateral-backed loan with decimal precision: \
                  payment quotes, clamped collateral/loan inputs, collateral \
                  presets, the submission report and the remote help text."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a payment quote from installments and loan amount
    Quote(QuoteArgs),
    /// Run the full form simulation for a collateral type
    Simulate(SimulateArgs),
    /// List the collateral profiles in the active catalog
    Presets(PresetsArgs),
    /// Render form values as the submission report
    Report(ReportArgs),
    /// Fetch and join the remote help snippets
    HelpText(HelpArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Simulate(args) => commands::form::run_simulate(args),
        Commands::Presets(args) => commands::form::run_presets(args),
        Commands::Report(args) => commands::form::run_report(args),
        Commands::HelpText(args) => commands::help::run_help_text(args),
        Commands::Version => {
            println!("loansim {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
