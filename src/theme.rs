//! Maps the configured theme mode onto iced's built-in palettes.

use crate::config::ThemeMode;
use iced::Theme as IcedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}
