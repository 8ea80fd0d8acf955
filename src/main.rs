mod cli;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use cli::{
    args::{Args, Command},
    commands::{self, CompareCommand, MergeCommand},
    config::Config,
    errors::{CliError, config_error},
};
use log::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = init_tracing(&args) {
        eprintln!("{error:?}");
        return ExitCode::FAILURE;
    }

    debug!(
        "Starting consent-reconcile version {}",
        env!("CARGO_PKG_VERSION")
    );

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            error.exit_code()
        }
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let default_directive = format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        args.verbose.log_level_filter().as_str().to_lowercase()
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(args.color.use_colors()),
        )
        .try_init()
        .context("Failed to initialise tracing")
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::load(args.config.as_deref()).map_err(config_error)?;

    match args.command {
        Command::Compare {
            document_a,
            document_b,
            output,
            tokenizer,
            algorithm,
        } => commands::compare(
            &CompareCommand {
                document_a,
                document_b,
                output,
                tokenizer,
                algorithm,
            },
            &config,
        ),
        Command::Merge {
            comparison,
            selection,
            output,
            spans,
        } => commands::merge(&MergeCommand {
            comparison,
            selection,
            output,
            spans,
        }),
    }
}
