//! Template editor CLI - Entry Point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use templedit::codec::{self, AnyTemplate};
use templedit::model::{Document, InvoiceTemplate, TimesheetTemplate};
use tracing::info;

/// Template toolkit for invoice and timesheet documents
#[derive(Parser, Debug)]
#[command(name = "templedit")]
#[command(version)]
#[command(about = "Validate, normalize, and scaffold business document templates")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a template file against the save-time validation rules
    Validate {
        /// Path to template JSON file
        file: PathBuf,
    },
    /// Re-export a template file with defaults filled and section order normalized
    Normalize {
        /// Path to template JSON file
        file: PathBuf,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a fresh default template
    Init {
        /// Create a timesheet template instead of an invoice template
        #[arg(long)]
        timesheet: bool,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → config file → CLI flags
    let config = {
        let config_file = templedit::config::load_config_with_precedence(args.config.clone())?;
        let merged = templedit::config::merge_config(config_file);
        templedit::config::apply_cli_overrides(merged, None, args.compact)
    };

    templedit::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    match args.command {
        Command::Validate { file } => validate(&file),
        Command::Normalize { file, output } => normalize(&file, output.as_deref(), &config),
        Command::Init { timesheet, output } => init(timesheet, output.as_deref(), &config),
    }
}

fn validate(file: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(file)?;
    let template = codec::import_auto(&json)?;

    let result = match &template {
        AnyTemplate::Invoice(doc) => doc.validate(),
        AnyTemplate::Timesheet(doc) => doc.validate(),
    };

    match result {
        Ok(()) => {
            println!("{}: valid", template.name());
            Ok(())
        }
        Err(failure) => {
            eprintln!("{}: invalid", template.name());
            for error in &failure.errors {
                eprintln!("  - {error}");
            }
            std::process::exit(1);
        }
    }
}

fn normalize(
    file: &std::path::Path,
    output: Option<&std::path::Path>,
    config: &templedit::config::ResolvedConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(file)?;
    let normalized = match codec::import_auto(&json)? {
        AnyTemplate::Invoice(doc) => codec::export_invoice(&doc, config.pretty_export)?,
        AnyTemplate::Timesheet(doc) => codec::export_timesheet(&doc, config.pretty_export)?,
    };
    write_output(&normalized, output)
}

fn init(
    timesheet: bool,
    output: Option<&std::path::Path>,
    config: &templedit::config::ResolvedConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = if timesheet {
        codec::export_timesheet(&TimesheetTemplate::new(), config.pretty_export)?
    } else {
        codec::export_invoice(&InvoiceTemplate::new(), config.pretty_export)?
    };
    write_output(&json, output)
}

fn write_output(json: &str, output: Option<&std::path::Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
