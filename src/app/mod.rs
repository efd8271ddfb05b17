mod messages;
mod state;
mod tab_bar;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::theme::Theme;
use iced::{Size, window};
use std::path::PathBuf;

/// Helper to launch the app with an optional menu fixture.
pub fn run_app(config: AppConfig, menu_path: Option<PathBuf>) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Menu", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.config.theme).into())
        .run_with(move || App::bootstrap(config, menu_path))
}
