//! Entry point for the menu browser.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional menu path from the command line.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI; the menu itself is loaded inside the app.

mod app;
mod config;
mod menu;
mod theme;

use crate::app::run_app;
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
    let menu_path = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        menu = %menu_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<built-in>".to_string()),
        level = %config.log_level,
        "Starting menu browser"
    );
    info!(
        minimum_view_time_ms = config.minimum_view_time_ms,
        item_visible_percent_threshold = config.item_visible_percent_threshold,
        scroll_to_location_offset = config.scroll_to_location_offset,
        animated = config.animate_tab_scroll,
        "Active tab synchronization settings"
    );
    run_app(config, menu_path).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(None);
    };
    if args.next().is_some() {
        return Err(anyhow!("Usage: menu-tabs [path-to-menu.toml|json]"));
    }

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.as_path().display()));
    }
    Ok(Some(path))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
