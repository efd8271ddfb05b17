use section_tabs_core::{CoordinatorConfig, ViewabilityConfig};
use serde::Deserialize;
use std::time::Duration;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_minimum_view_time_ms")]
    pub minimum_view_time_ms: u64,
    #[serde(default = "crate::config::defaults::default_item_visible_percent_threshold")]
    pub item_visible_percent_threshold: f32,
    #[serde(default = "crate::config::defaults::default_scroll_to_location_offset")]
    pub scroll_to_location_offset: f32,
    #[serde(default = "crate::config::defaults::default_animate_tab_scroll")]
    pub animate_tab_scroll: bool,
    #[serde(default = "crate::config::defaults::default_scroll_animation_ms")]
    pub scroll_animation_ms: u64,
    #[serde(default = "crate::config::defaults::default_section_header_height")]
    pub section_header_height: f32,
    #[serde(default = "crate::config::defaults::default_item_height")]
    pub item_height: f32,
    #[serde(default = "crate::config::defaults::default_tab_width")]
    pub tab_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Day,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
            minimum_view_time_ms: crate::config::defaults::default_minimum_view_time_ms(),
            item_visible_percent_threshold:
                crate::config::defaults::default_item_visible_percent_threshold(),
            scroll_to_location_offset: crate::config::defaults::default_scroll_to_location_offset(),
            animate_tab_scroll: crate::config::defaults::default_animate_tab_scroll(),
            scroll_animation_ms: crate::config::defaults::default_scroll_animation_ms(),
            section_header_height: crate::config::defaults::default_section_header_height(),
            item_height: crate::config::defaults::default_item_height(),
            tab_width: crate::config::defaults::default_tab_width(),
        }
    }
}

impl AppConfig {
    pub fn viewability(&self) -> ViewabilityConfig {
        ViewabilityConfig {
            minimum_view_time_ms: self.minimum_view_time_ms,
            item_visible_percent_threshold: self.item_visible_percent_threshold,
        }
    }

    pub fn coordinator(&self) -> CoordinatorConfig {
        CoordinatorConfig {
            viewability: self.viewability(),
            scroll_to_location_offset: self.scroll_to_location_offset,
            animated: self.animate_tab_scroll,
        }
    }

    pub fn scroll_animation(&self) -> Duration {
        Duration::from_millis(self.scroll_animation_ms)
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
