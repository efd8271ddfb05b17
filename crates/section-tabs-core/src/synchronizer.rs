use tracing::debug;

/// Active tab plus the flag that mutes visibility updates during a tap scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveIndexState {
    pub active_index: usize,
    pub suppressed: bool,
}

/// Request to bring the start of a section into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub target_section_index: usize,
    pub target_item_index: usize,
    pub view_offset: f32,
    pub animated: bool,
}

impl ScrollCommand {
    pub fn to_section(target_section_index: usize) -> Self {
        Self {
            target_section_index,
            target_item_index: 0,
            view_offset: 0.0,
            animated: true,
        }
    }

    pub fn with_view_offset(mut self, view_offset: f32) -> Self {
        self.view_offset = view_offset;
        self
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}

/// Arbitrates between visibility-driven and tap-driven tab changes.
///
/// Two states: tracking (`suppressed == false`), where the visibility winner
/// drives the active tab, and suppressed, entered by a tap and left on the
/// first drag-start or momentum-end. Indices are assumed validated by the
/// caller.
#[derive(Debug, Clone, Default)]
pub struct TabSynchronizer {
    state: ActiveIndexState,
}

impl TabSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ActiveIndexState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn is_suppressed(&self) -> bool {
        self.state.suppressed
    }

    /// Returns `true` when the active index changed.
    pub fn on_visibility_winner(&mut self, winner: Option<usize>) -> bool {
        let Some(index) = winner else {
            return false;
        };
        if self.state.suppressed {
            debug!(
                winner = index,
                active = self.state.active_index,
                "Ignoring visibility winner while tap scroll is in flight"
            );
            return false;
        }
        if index == self.state.active_index {
            return false;
        }
        debug!(
            from = self.state.active_index,
            to = index,
            "Active tab follows visible section"
        );
        self.state.active_index = index;
        true
    }

    /// Tap wins immediately and mutes visibility until the scroll settles.
    pub fn on_tab_tapped(&mut self, index: usize) -> ScrollCommand {
        debug!(
            from = self.state.active_index,
            to = index,
            was_suppressed = self.state.suppressed,
            "Tab tapped"
        );
        self.state.active_index = index;
        self.state.suppressed = true;
        ScrollCommand::to_section(index)
    }

    /// Returns `true` when suppression was lifted.
    pub fn on_scroll_begin_drag(&mut self) -> bool {
        self.release("drag")
    }

    /// Returns `true` when suppression was lifted.
    pub fn on_programmatic_scroll_settled(&mut self) -> bool {
        self.release("momentum")
    }

    /// Keep the active index inside a section list of `len` entries.
    pub fn clamp_to(&mut self, len: usize) -> bool {
        let clamped = self.state.active_index.min(len.saturating_sub(1));
        if clamped == self.state.active_index {
            return false;
        }
        debug!(
            from = self.state.active_index,
            to = clamped,
            sections = len,
            "Clamped active tab to shrunken section list"
        );
        self.state.active_index = clamped;
        true
    }

    fn release(&mut self, cause: &'static str) -> bool {
        if !self.state.suppressed {
            return false;
        }
        self.state.suppressed = false;
        debug!(cause, active = self.state.active_index, "Visibility regains control");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_tracking_at_first_tab() {
        let sync = TabSynchronizer::new();
        assert_eq!(
            sync.state(),
            ActiveIndexState {
                active_index: 0,
                suppressed: false
            }
        );
    }

    #[test]
    fn visibility_moves_active_tab_while_tracking() {
        let mut sync = TabSynchronizer::new();
        assert!(sync.on_visibility_winner(Some(2)));
        assert_eq!(sync.active_index(), 2);
        assert!(!sync.on_visibility_winner(Some(2)));
        assert!(!sync.on_visibility_winner(None));
        assert_eq!(sync.active_index(), 2);
    }

    #[test]
    fn tap_is_immediate_and_raises_suppression() {
        let mut sync = TabSynchronizer::new();
        let command = sync.on_tab_tapped(3);
        assert_eq!(sync.active_index(), 3);
        assert!(sync.is_suppressed());
        assert_eq!(command, ScrollCommand::to_section(3));
        assert_eq!(command.target_item_index, 0);
        assert!(command.animated);
    }

    #[test]
    fn suppression_holds_until_settle() {
        let mut sync = TabSynchronizer::new();
        sync.on_tab_tapped(2);
        for transit in [0, 1, 0, 1] {
            assert!(!sync.on_visibility_winner(Some(transit)));
            assert_eq!(sync.active_index(), 2);
        }
        assert!(sync.on_programmatic_scroll_settled());
        assert!(!sync.is_suppressed());
        assert!(sync.on_visibility_winner(Some(1)));
        assert_eq!(sync.active_index(), 1);
    }

    #[test]
    fn drag_hands_back_control_before_momentum_end() {
        let mut sync = TabSynchronizer::new();
        sync.on_tab_tapped(4);
        assert!(sync.on_scroll_begin_drag());
        assert!(sync.on_visibility_winner(Some(1)));
        assert_eq!(sync.active_index(), 1);
        // A late momentum-end after the drag changes nothing.
        assert!(!sync.on_programmatic_scroll_settled());
        assert_eq!(sync.active_index(), 1);
    }

    #[test]
    fn settle_signals_are_ignored_while_tracking() {
        let mut sync = TabSynchronizer::new();
        assert!(!sync.on_scroll_begin_drag());
        assert!(!sync.on_programmatic_scroll_settled());
        assert_eq!(sync.state(), ActiveIndexState::default());
    }

    #[test]
    fn retap_overrides_pending_scroll() {
        let mut sync = TabSynchronizer::new();
        sync.on_tab_tapped(1);
        let command = sync.on_tab_tapped(5);
        assert_eq!(command.target_section_index, 5);
        assert_eq!(sync.active_index(), 5);
        assert!(sync.is_suppressed());
    }

    #[test]
    fn tap_then_matching_visibility_is_a_no_op() {
        let mut sync = TabSynchronizer::new();
        sync.on_tab_tapped(2);
        sync.on_programmatic_scroll_settled();
        assert!(!sync.on_visibility_winner(Some(2)));
        assert_eq!(sync.active_index(), 2);
    }

    #[test]
    fn clamp_keeps_index_in_range() {
        let mut sync = TabSynchronizer::new();
        sync.on_visibility_winner(Some(6));
        assert!(sync.clamp_to(3));
        assert_eq!(sync.active_index(), 2);
        assert!(!sync.clamp_to(3));
        assert!(sync.clamp_to(0));
        assert_eq!(sync.active_index(), 0);
    }
}
