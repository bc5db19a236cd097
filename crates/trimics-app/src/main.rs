use std::process::ExitCode;

use clap::Parser;
use trimics_app::cli::Cli;
use trimics_app::config;
use trimics_app::run::run;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> ExitCode {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    let cli = Cli::parse();

    let settings = match config::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Ok(filter) = EnvFilter::try_new(settings.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %settings.logging.level, "Invalid log level in config, keeping info");
    }

    tracing::debug!(config = ?settings, "Configuration loaded");

    match run(&cli, &settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
