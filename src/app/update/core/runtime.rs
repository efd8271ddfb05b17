use super::super::super::messages::Message;
use super::super::super::state::{App, LIST_SCROLL_ID, ScrollAnimation, TAB_SCROLL_ID};
use super::super::super::tab_bar::reveal_offset;
use super::super::Effect;
use crate::menu::load_menu;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollList { offset_y, animated } => {
                if animated && (offset_y - self.list.offset_y).abs() > f32::EPSILON {
                    debug!(
                        from = self.list.offset_y,
                        to = offset_y,
                        duration_ms = self.config.scroll_animation_ms,
                        "Starting list scroll animation"
                    );
                    self.list.animation = Some(ScrollAnimation::new(
                        self.list.offset_y,
                        offset_y,
                        Instant::now(),
                        self.config.scroll_animation(),
                    ));
                    return Task::none();
                }
                self.list.animation = None;
                self.list.offset_y = offset_y;
                scrollable::scroll_to(LIST_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y: offset_y })
                    .chain(Task::done(Message::MomentumScrollEnd))
            }
            Effect::SnapList(offset_y) => {
                scrollable::scroll_to(LIST_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y: offset_y })
            }
            Effect::RevealTab(index) => {
                let x = reveal_offset(index, self.config.tab_width, self.window_width);
                scrollable::scroll_to(TAB_SCROLL_ID.clone(), AbsoluteOffset { x, y: 0.0 })
            }
            Effect::LoadMenu(path) => {
                self.menu.loading = true;
                self.menu.error = None;
                info!(path = %path.display(), "Dispatching menu load task");
                Task::perform(
                    async move {
                        match load_menu(&path) {
                            Ok(menu) => Message::MenuLoaded { path, menu },
                            Err(err) => Message::MenuLoadFailed {
                                path,
                                error: format!("{err:#}"),
                            },
                        }
                    },
                    |message| message,
                )
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Scrollables capture pointer input; the reducer decides whether it
    // landed on the list.
    match &event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            return Some(Message::PointerMoved(*position));
        }
        Event::Mouse(mouse::Event::WheelScrolled { .. }) => return Some(Message::WheelScrolled),
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            return Some(Message::TouchMoved(*position));
        }
        _ => {}
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Opened { size, .. })
        | Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
