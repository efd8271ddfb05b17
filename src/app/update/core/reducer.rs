use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::ThemeMode;
use std::time::Instant;
use tracing::{info, warn};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::MenuLoaded { path, menu } => {
                info!(path = %path.display(), "Menu ready");
                self.apply_menu(Some(path), menu, &mut effects);
            }
            Message::MenuLoadFailed { path, error } => {
                warn!(path = %path.display(), "Menu failed to load: {error}");
                self.menu.loading = false;
                self.menu.error = Some(error);
            }
            Message::TabPressed(index) => self.handle_tab_pressed(index, &mut effects),
            Message::ListScrolled {
                offset_y,
                viewport_height,
                content_height,
                bounds,
                at,
            } => {
                self.list.bounds = Some(bounds);
                self.handle_list_scrolled(
                    offset_y,
                    viewport_height,
                    content_height,
                    at,
                    &mut effects,
                );
            }
            Message::PointerMoved(position) => self.cursor = Some(position),
            Message::WheelScrolled => {
                if self.cursor.is_some_and(|cursor| self.is_over_list(cursor)) {
                    self.handle_scroll_begin_drag();
                }
            }
            Message::TouchMoved(position) => {
                if self.is_over_list(position) {
                    self.handle_scroll_begin_drag();
                }
            }
            Message::MomentumScrollEnd => self.handle_momentum_scroll_end(),
            Message::ToggleTheme => {
                self.config.theme = match self.config.theme {
                    ThemeMode::Day => ThemeMode::Night,
                    ThemeMode::Night => ThemeMode::Day,
                };
                info!(theme = %self.config.theme, "Toggled theme");
            }
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }

        effects
    }

    fn handle_window_resized(&mut self, width: f32, height: f32, effects: &mut Vec<Effect>) {
        if !(width.is_finite() && height.is_finite()) {
            return;
        }
        self.window_width = width.max(0.0);
        self.list.viewport_height = self.estimated_list_viewport(height);
        self.list.offset_y = self.list.clamp_offset(self.list.offset_y);
        tracing::debug!(
            width,
            height,
            list_viewport = self.list.viewport_height,
            "Window resized"
        );
        self.refresh_visibility(Instant::now(), effects);
    }
}
