//! Entry point for the podcast roulette.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional dataset path from the command line.
//! - Load user configuration from `conf/config.toml`.
//! - Load the episode catalog and hydrate the saved-episode ledger.
//! - Launch the GUI application with the loaded state.

mod app;
mod catalog;
mod config;
mod ledger;
mod selection;
mod share;

use crate::app::run_app;
use crate::catalog::load_catalog;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let dataset_path = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let catalog = load_catalog(dataset_path.as_deref())?;
    if catalog.is_empty() {
        warn!("Episode dataset is empty; the roulette will have nothing to draw");
    }
    let saved_ids = ledger::load(Path::new(&config.saved_episodes_path));
    info!(
        episodes = catalog.len(),
        saved = saved_ids.len(),
        level = %config.log_level,
        "Starting podcast roulette"
    );
    run_app(catalog, config, saved_ids).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(None);
    };

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("Dataset not found: {}", path.display()));
    }
    Ok(Some(path))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    }
}
