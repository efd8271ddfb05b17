pub(crate) fn default_window_width() -> f32 {
    480.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_minimum_view_time_ms() -> u64 {
    50
}

pub(crate) fn default_item_visible_percent_threshold() -> f32 {
    30.0
}

pub(crate) fn default_scroll_to_location_offset() -> f32 {
    0.0
}

pub(crate) fn default_animate_tab_scroll() -> bool {
    true
}

pub(crate) fn default_scroll_animation_ms() -> u64 {
    320
}

pub(crate) fn default_section_header_height() -> f32 {
    44.0
}

pub(crate) fn default_item_height() -> f32 {
    72.0
}

pub(crate) fn default_tab_width() -> f32 {
    120.0
}
