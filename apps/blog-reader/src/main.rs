//! # Blog Reader
//!
//! Terminal front end for a json-server blog: list/detail browsing and
//! post creation.

use std::process::ExitCode;

use clap::Parser;

mod browse;
mod cli;
mod commands;
mod config;
mod render;
mod state;
mod telemetry;

use browse::Browser;
use cli::{Args, Command};
use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::from_env().with_base_url(args.base_url);

    telemetry::init_telemetry(&config.telemetry);
    tracing::debug!(base_url = %config.store.base_url, "Starting blog reader");

    let state = AppState::new(config.store)?;
    let service = &state.service;
    let mut stdout = std::io::stdout();

    let ok = match args.command.unwrap_or(Command::Browse) {
        Command::List => commands::list(service, &mut stdout).await?,
        Command::Show { id } => commands::show(service, id, &mut stdout).await?,
        Command::Create(create) => commands::create(service, create.into_form(), &mut stdout).await?,
        Command::Browse => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            Browser::new(service, input, stdout).run().await?;
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
