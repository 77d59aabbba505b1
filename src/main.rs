// Entrypoint for the CLI application.
// Keeps `main` small: parse flags, set up logging, resolve the config and
// hand it to `run`. Exit status is decided here and nowhere else.

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use dockerhub_overview::{cli::Cli, run, Config, HubClient, HubError};
use std::process::ExitCode;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli);

    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(err) => usage_error(&err),
    };

    match update(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

fn update(config: &Config) -> anyhow::Result<()> {
    let client = HubClient::new(&config.api_url).context("Failed to build HTTP client")?;
    let report = run(&client, config)?;
    tracing::debug!(repo = %report.target, bytes = report.bytes, "done");
    println!("Overview updated successfully.");
    Ok(())
}

// Top-level message plus the root cause. reqwest folds its sources into
// its own Display, so printing the whole chain repeats them.
fn diagnostic(err: &anyhow::Error) -> String {
    let root = err.root_cause();
    if err.chain().count() > 1 {
        format!("{err}: {root}")
    } else {
        err.to_string()
    }
}

// Same formatting and exit status (2) as clap's own usage errors.
fn usage_error(err: &HubError) -> ! {
    Cli::command()
        .error(ErrorKind::MissingRequiredArgument, err)
        .exit()
}

fn setup_logging(cli: &Cli) {
    let default = if cli.quiet {
        LevelFilter::OFF
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .init();
}
