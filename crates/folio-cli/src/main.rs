//! Folio CLI
//!
//! Lists, renders and searches the articles of a Markdown blog.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use folio_cli::{logging, App, CliArgs, FolioConfig};

async fn run(args: CliArgs) -> Result<()> {
    let config = FolioConfig::load(args.config.as_deref()).context("loading configuration")?;
    logging::init(&config.logging.level, args.verbose);
    tracing::debug!(command = ?args.command, "starting");

    let app = App::from_config(config)?;
    let mut stdout = std::io::stdout().lock();
    app.run(args.command, &mut stdout).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
