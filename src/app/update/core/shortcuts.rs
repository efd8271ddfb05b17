use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Arrow keys step through tabs the same way a tap would; the coordinator
    /// rejects steps past either end.
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }
        let active = self.tabs.active_index();
        match key.as_ref() {
            Key::Named(key::Named::ArrowLeft) => active.checked_sub(1).map(Message::TabPressed),
            Key::Named(key::Named::ArrowRight) => Some(Message::TabPressed(active + 1)),
            Key::Named(key::Named::Home) => Some(Message::TabPressed(0)),
            Key::Named(key::Named::End) => self
                .menu
                .sections
                .len()
                .checked_sub(1)
                .map(Message::TabPressed),
            Key::Character("t") => Some(Message::ToggleTheme),
            _ => None,
        }
    }
}
