// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! vvnorm command-line interface
//!
//! Normalize variant strings offline, validate them against VariantValidator,
//! or run the interactive prompt.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::util::SubscriberInitExt;

use vvnorm::cli::{
    output_examples, output_normalized, output_report, run_interactive, InteractiveOptions,
    OutputFormat,
};
use vvnorm::config::{validate_transcript_set, ServiceConfig};
use vvnorm::{validate_and_format, Assembly, Normalizer, VariantValidatorClient};

#[derive(Parser)]
#[command(name = "vvnorm")]
#[command(author, version, about = "Variant notation normalizer for VariantValidator")]
struct Cli {
    /// Configuration file (the `[validator]` section is used)
    #[arg(long, global = true, default_value = "config/service.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical key for a variant without contacting the service
    Normalize {
        /// Variant string in any supported notation
        variant: String,

        /// Assembly used when the input does not name one
        #[arg(short, long)]
        assembly: Option<String>,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a variant and print the report
    Validate {
        /// Variant string in any supported notation
        variant: String,

        /// Assembly used when the input does not name one
        #[arg(short, long)]
        assembly: Option<String>,

        /// Transcript set to request (e.g. mane, all)
        #[arg(short, long)]
        transcript_set: Option<String>,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the raw service response instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Validate variants entered at a prompt
    Interactive {
        /// Assembly used when the input does not name one
        #[arg(short, long)]
        assembly: Option<String>,

        /// Transcript set to request (e.g. mane, all)
        #[arg(short, long)]
        transcript_set: Option<String>,

        /// Directory saved reports are written to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List example variants, one per supported notation
    Examples,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Normalize {
            variant,
            assembly,
            format,
        } => {
            let config = load_config(&cli.config)?;
            let assembly = resolve_assembly(assembly, &config)?;
            let normalized = Normalizer::new(assembly).normalize(&variant);
            output_normalized(&mut io::stdout().lock(), &normalized, format)?;
        }
        Commands::Validate {
            variant,
            assembly,
            transcript_set,
            output,
            json,
        } => {
            let config = load_config(&cli.config)?;
            let assembly = resolve_assembly(assembly, &config)?;
            let transcript_set =
                transcript_set.unwrap_or(config.validator.default_transcript_set.clone());
            validate_transcript_set(&transcript_set)?;

            let client = VariantValidatorClient::new(&config.validator)?;
            let report =
                validate_and_format(&client, &variant, assembly.as_str(), &transcript_set).await?;

            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            output_report(&mut io::stdout().lock(), &report, format)?;

            if let Some(path) = output {
                let mut writer = BufWriter::new(File::create(&path)?);
                output_report(&mut writer, &report, format)?;
                writer.flush()?;
                eprintln!("Report saved to {}", path.display());
            }

            if report.raw.is_failure() {
                std::process::exit(1);
            }
        }
        Commands::Interactive {
            assembly,
            transcript_set,
            dir,
        } => {
            let config = load_config(&cli.config)?;
            let assembly = resolve_assembly(assembly, &config)?;
            let transcript_set =
                transcript_set.unwrap_or(config.validator.default_transcript_set.clone());
            validate_transcript_set(&transcript_set)?;

            let client = VariantValidatorClient::new(&config.validator)?;
            let options = InteractiveOptions {
                assembly: assembly.to_string(),
                transcript_set,
                output_dir: dir,
            };

            let stdin = io::stdin();
            let summary = run_interactive(
                &client,
                &mut stdin.lock(),
                &mut io::stdout().lock(),
                &options,
            )
            .await?;
            tracing::info!(
                "Validated {} variant(s), saved {} report(s)",
                summary.validated,
                summary.saved
            );
        }
        Commands::Examples => {
            output_examples(&mut io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Load the configuration file when present; the CLI never writes one
fn load_config(path: &Path) -> Result<ServiceConfig, Box<dyn std::error::Error>> {
    let config = ServiceConfig::load_or_default(path)?;
    config.validate()?;
    Ok(config)
}

fn resolve_assembly(
    requested: Option<String>,
    config: &ServiceConfig,
) -> Result<Assembly, Box<dyn std::error::Error>> {
    let token = requested.unwrap_or(config.validator.default_assembly.clone());
    Ok(token.parse::<Assembly>()?)
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}
