mod animation;
mod constants;
mod list;

use crate::config::AppConfig;
use crate::menu::{Menu, MenuItem, sample_menu};
use iced::{Point, Rectangle, Task};
use section_tabs_core::{Section, SectionTabs, ViewabilityTracker};
use std::path::PathBuf;

use super::messages::Message;
use super::update::Effect;

pub(in crate::app) use animation::ScrollAnimation;
pub(crate) use constants::*;
pub(in crate::app) use list::ListState;

/// Loaded menu plus its loading status.
pub struct MenuState {
    pub(in crate::app) restaurant: String,
    pub(in crate::app) sections: Vec<Section<MenuItem>>,
    pub(in crate::app) source: Option<PathBuf>,
    pub(in crate::app) loading: bool,
    pub(in crate::app) error: Option<String>,
}

/// Core application state composed of sub-models.
pub struct App {
    pub(in crate::app) config: AppConfig,
    pub(in crate::app) menu: MenuState,
    pub(in crate::app) tabs: SectionTabs,
    pub(in crate::app) list: ListState,
    pub(in crate::app) viewability: ViewabilityTracker,
    pub(in crate::app) window_width: f32,
    pub(in crate::app) cursor: Option<Point>,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig, menu_path: Option<PathBuf>) -> (App, Task<Message>) {
        let mut app = App::new(config);
        match menu_path {
            Some(path) => {
                let task = app.run_effect(Effect::LoadMenu(path));
                (app, task)
            }
            None => {
                let mut effects = Vec::new();
                app.apply_menu(None, sample_menu(), &mut effects);
                let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
                (app, task)
            }
        }
    }

    pub(in crate::app) fn new(config: AppConfig) -> App {
        App {
            tabs: SectionTabs::new(config.coordinator()),
            viewability: ViewabilityTracker::new(config.viewability()),
            list: ListState::new(),
            menu: MenuState {
                restaurant: String::new(),
                sections: Vec::new(),
                source: None,
                loading: false,
                error: None,
            },
            window_width: config.window_width,
            cursor: None,
            config,
        }
    }

    /// Replace the displayed menu; the coordinator keeps its index in range.
    pub(in crate::app) fn apply_menu(
        &mut self,
        source: Option<PathBuf>,
        menu: Menu,
        effects: &mut Vec<Effect>,
    ) {
        let item_counts = menu.item_counts();
        self.menu.restaurant = menu.restaurant;
        self.menu.sections = menu.sections;
        self.menu.source = source;
        self.menu.loading = false;
        self.menu.error = None;

        self.list.relayout(
            &item_counts,
            self.config.section_header_height,
            self.config.item_height,
        );
        self.tabs.sections_changed(self.menu.sections.len());
        // Relayout drops any in-flight scroll, so nothing else will settle it.
        self.tabs.on_momentum_scroll_end();
        self.viewability.reset();
        tracing::debug!(
            sections = self.menu.sections.len(),
            content_height = self.list.content_height,
            active = self.tabs.active_index(),
            "Applied menu layout"
        );
        effects.push(Effect::SnapList(0.0));
        effects.push(Effect::RevealTab(self.tabs.active_index()));
        self.refresh_visibility(std::time::Instant::now(), effects);
    }

    pub(in crate::app) fn estimated_list_viewport(&self, window_height: f32) -> f32 {
        (window_height - CHROME_HEIGHT_PX).max(0.0)
    }

    /// Whether `point` (window coordinates) falls on the menu list rather than
    /// the header or the tab strip.
    pub(in crate::app) fn is_over_list(&self, point: Point) -> bool {
        let bounds = self.list.bounds.unwrap_or(Rectangle {
            x: PAGE_PADDING_PX,
            y: LIST_TOP_PX,
            width: (self.window_width - PAGE_PADDING_PX * 2.0).max(0.0),
            height: self.list.viewport_height,
        });
        bounds.contains(point)
    }
}

#[cfg(test)]
pub(in crate::app) mod test_support {
    use super::*;
    use section_tabs_core::{SectionData, index_sections};

    /// App with `counts.len()` sections, zero view time and a measured viewport.
    pub(in crate::app) fn build_test_app(counts: &[usize], viewport_height: f32) -> App {
        let mut config = AppConfig::default();
        config.minimum_view_time_ms = 0;
        config.item_visible_percent_threshold = 30.0;
        config.section_header_height = 40.0;
        config.item_height = 100.0;
        config.scroll_animation_ms = 300;

        let sections = index_sections(counts.iter().enumerate().map(|(section, &count)| {
            SectionData::new(
                format!("Section {section}"),
                (0..count)
                    .map(|item| MenuItem {
                        name: format!("Dish {section}.{item}"),
                        description: String::new(),
                        price: 1.0 + item as f64,
                    })
                    .collect(),
            )
        }));

        let mut app = App::new(config);
        app.list.viewport_height = viewport_height;
        let mut effects = Vec::new();
        app.apply_menu(
            None,
            Menu {
                restaurant: "Test Kitchen".to_string(),
                sections,
            },
            &mut effects,
        );
        app
    }
}
