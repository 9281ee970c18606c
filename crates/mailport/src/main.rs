//! `mailport` - command-line email client
//!
//! Lists folders and emails through the gateway ports of `mailport-core`,
//! backed by the adapter named in the config file.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod output;
mod wiring;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::AppConfig;
use output::Format;
use wiring::build_services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).await?;

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(backend = ?config.backend, "Starting mailport");

    let services = build_services(&config).await?;
    let format = if cli.json { Format::Json } else { Format::Text };
    let rendered = cli.command.run(&services, format).await?;
    println!("{rendered}");
    Ok(())
}
