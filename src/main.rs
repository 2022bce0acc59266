mod classifier;
mod cli;
mod config;
mod dispatch;
mod event;
mod logging;
mod output;
mod rebuild;

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use config::HookConfig;
use dispatch::handle_payload;
use rebuild::ComposeRebuild;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = HookConfig::from_cli(&cli);

    let mut raw = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut raw)
        .context("failed to read hook payload from stdin")?;

    let mut stdout = io::stdout().lock();
    let outcome = handle_payload(&raw, &config, &mut ComposeRebuild, &mut stdout)?;
    tracing::debug!(?outcome, "hook finished");

    Ok(outcome.exit_code())
}
