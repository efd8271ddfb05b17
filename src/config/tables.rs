use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use section_tabs_core::ViewabilityConfig;
use serde::Deserialize;

/// On-disk layout of `config.toml`, grouped by concern.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    viewability: ViewabilityConfig,
    #[serde(default)]
    scroll: ScrollConfig,
    #[serde(default)]
    layout: LayoutConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            log_level: tables.logging.log_level,
            minimum_view_time_ms: tables.viewability.minimum_view_time_ms,
            item_visible_percent_threshold: tables.viewability.item_visible_percent_threshold,
            scroll_to_location_offset: tables.scroll.scroll_to_location_offset,
            animate_tab_scroll: tables.scroll.animated,
            scroll_animation_ms: tables.scroll.animation_ms,
            section_header_height: tables.layout.section_header_height,
            item_height: tables.layout.item_height,
            tab_width: tables.layout.tab_width,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            viewability: ViewabilityConfig {
                minimum_view_time_ms: config.minimum_view_time_ms,
                item_visible_percent_threshold: config.item_visible_percent_threshold,
            },
            scroll: ScrollConfig {
                scroll_to_location_offset: config.scroll_to_location_offset,
                animated: config.animate_tab_scroll,
                animation_ms: config.scroll_animation_ms,
            },
            layout: LayoutConfig {
                section_header_height: config.section_header_height,
                item_height: config.item_height,
                tab_width: config.tab_width,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrollConfig {
    #[serde(default = "defaults::default_scroll_to_location_offset")]
    scroll_to_location_offset: f32,
    #[serde(default = "defaults::default_animate_tab_scroll")]
    animated: bool,
    #[serde(default = "defaults::default_scroll_animation_ms")]
    animation_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            scroll_to_location_offset: defaults::default_scroll_to_location_offset(),
            animated: defaults::default_animate_tab_scroll(),
            animation_ms: defaults::default_scroll_animation_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LayoutConfig {
    #[serde(default = "defaults::default_section_header_height")]
    section_header_height: f32,
    #[serde(default = "defaults::default_item_height")]
    item_height: f32,
    #[serde(default = "defaults::default_tab_width")]
    tab_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            section_header_height: defaults::default_section_header_height(),
            item_height: defaults::default_item_height(),
            tab_width: defaults::default_tab_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
