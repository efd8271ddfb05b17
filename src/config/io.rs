use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const MIN_ROW_HEIGHT: f32 = 16.0;
const MAX_ROW_HEIGHT: f32 = 400.0;
const MIN_TAB_WIDTH: f32 = 48.0;
const MAX_TAB_WIDTH: f32 = 480.0;
const MAX_SCROLL_ANIMATION_MS: u64 = 5_000;

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

/// Parse the table layout of `config.toml` and clamp values into range.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables =
        toml::from_str(contents).context("Failed to parse configuration tables")?;
    let mut config = AppConfig::from(tables);
    clamp_config(&mut config);
    Ok(config)
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("Failed to serialize configuration")
}

fn clamp_config(config: &mut AppConfig) {
    let sanitize = |value: f32, fallback: f32| if value.is_finite() { value } else { fallback };

    config.window_width = sanitize(config.window_width, 480.0).max(240.0);
    config.window_height = sanitize(config.window_height, 800.0).max(240.0);
    config.item_visible_percent_threshold =
        sanitize(config.item_visible_percent_threshold, 30.0).clamp(0.0, 100.0);
    config.scroll_to_location_offset = sanitize(config.scroll_to_location_offset, 0.0);
    config.scroll_animation_ms = config.scroll_animation_ms.min(MAX_SCROLL_ANIMATION_MS);
    config.section_header_height =
        sanitize(config.section_header_height, 44.0).clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT);
    config.item_height = sanitize(config.item_height, 72.0).clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT);
    config.tab_width = sanitize(config.tab_width, 120.0).clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH);
}
