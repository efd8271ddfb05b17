use crate::menu::Menu;
use iced::keyboard::{Key, Modifiers};
use iced::{Point, Rectangle};
use std::path::PathBuf;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    MenuLoaded {
        path: PathBuf,
        menu: Menu,
    },
    MenuLoadFailed {
        path: PathBuf,
        error: String,
    },
    TabPressed(usize),
    ListScrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
        bounds: Rectangle,
        at: Instant,
    },
    PointerMoved(Point),
    /// Mouse wheel turned somewhere in the window.
    WheelScrolled,
    /// Finger dragged somewhere in the window.
    TouchMoved(Point),
    /// A programmatic list scroll came to rest.
    MomentumScrollEnd,
    ToggleTheme,
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
}
