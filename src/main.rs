use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod app;
mod backend;
mod cli;
mod commands;
mod config;
mod core;
mod display;
mod input;
mod session;
mod utils;

use crate::app::Application;
use crate::backend::HttpBackend;
use crate::cli::Args;
use crate::commands::{ShellState, create_command_registry};
use crate::config::{API_URL_ENV, Config};
use crate::core::error::ScoutError;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "shopscout=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), ScoutError> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config::load()?;
    let api_url = config.resolve_api_url(args.api_url.as_deref(), std::env::var(API_URL_ENV).ok());
    tracing::debug!(%api_url, "using backend");

    let backend = HttpBackend::new(&api_url, config.request_timeout())?;
    let state = ShellState::new(Arc::new(backend));

    let mut app = Application::new(args, state, create_command_registry());
    app.run().await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", console::style("Error:").bold().red(), e);
        std::process::exit(1);
    }
}
