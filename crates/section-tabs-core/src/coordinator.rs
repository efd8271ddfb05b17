use crate::dispatch::{DispatchError, ListHandle, ScrollToLocation, try_dispatch};
use crate::section::Section;
use crate::synchronizer::{ActiveIndexState, TabSynchronizer};
use crate::viewability::ViewabilityConfig;
use crate::visibility::{VisibleItemSample, compute_winner};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatorConfig {
    pub viewability: ViewabilityConfig,
    /// Pixel offset applied to every dispatched scroll command.
    pub scroll_to_location_offset: f32,
    pub animated: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            viewability: ViewabilityConfig::default(),
            scroll_to_location_offset: 0.0,
            animated: true,
        }
    }
}

/// Owns the tab state of one section list and routes its four inputs.
#[derive(Debug, Clone, Default)]
pub struct SectionTabs {
    config: CoordinatorConfig,
    sync: TabSynchronizer,
    section_count: usize,
}

impl SectionTabs {
    pub fn new(config: CoordinatorConfig) -> Self {
        Self {
            config,
            sync: TabSynchronizer::new(),
            section_count: 0,
        }
    }

    pub fn config(&self) -> CoordinatorConfig {
        self.config
    }

    pub fn state(&self) -> ActiveIndexState {
        self.sync.state()
    }

    pub fn active_index(&self) -> usize {
        self.sync.active_index()
    }

    pub fn is_suppressed(&self) -> bool {
        self.sync.is_suppressed()
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Call whenever the caller supplies a fresh section list. Visibility
    /// winners are only accepted below this count.
    pub fn sections_changed(&mut self, len: usize) -> bool {
        self.section_count = len;
        self.sync.clamp_to(len)
    }

    /// List reported a new viewable batch. Returns the new active index when
    /// the highlighted tab moved.
    pub fn on_viewable_items_changed(&mut self, batch: &[VisibleItemSample]) -> Option<usize> {
        let winner = match compute_winner(batch) {
            Some(index) if index >= self.section_count => {
                warn!(
                    index,
                    sections = self.section_count,
                    "Ignoring visibility winner outside the section list"
                );
                None
            }
            winner => winner,
        };
        self.sync
            .on_visibility_winner(winner)
            .then(|| self.sync.active_index())
    }

    /// Tab `index` was pressed.
    ///
    /// Out-of-range taps never reach the state machine. A valid tap always
    /// updates the active tab, even when the scroll itself is dropped because
    /// the list is not ready.
    pub fn on_tab_pressed<T, H>(
        &mut self,
        index: usize,
        sections: &[Section<T>],
        handle: &mut H,
    ) -> Result<ScrollToLocation, DispatchError>
    where
        H: ListHandle + ?Sized,
    {
        if index >= sections.len() {
            let err = DispatchError::OutOfRangeIndex {
                index,
                len: sections.len(),
            };
            warn!("Ignoring tab press: {err}");
            return Err(err);
        }

        let command = self
            .sync
            .on_tab_tapped(index)
            .with_view_offset(self.config.scroll_to_location_offset)
            .with_animated(self.config.animated);
        let result = try_dispatch(&command, sections, handle);
        if let Err(err) = &result {
            debug!(index, "Tab press scroll dropped: {err}");
            // No scroll is in flight, so there is nothing to wait for.
            self.sync.on_programmatic_scroll_settled();
        }
        result
    }

    pub fn on_scroll_begin_drag(&mut self) -> bool {
        self.sync.on_scroll_begin_drag()
    }

    pub fn on_momentum_scroll_end(&mut self) -> bool {
        self.sync.on_programmatic_scroll_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{SectionData, index_sections};

    #[derive(Default)]
    struct RecordingHandle {
        ready: bool,
        requests: Vec<ScrollToLocation>,
    }

    impl ListHandle for RecordingHandle {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn scroll_to_location(&mut self, request: ScrollToLocation) {
            self.requests.push(request);
        }
    }

    fn sections(count: usize) -> Vec<Section<usize>> {
        index_sections((0..count).map(|i| SectionData::new(format!("S{i}"), vec![i; 4])))
    }

    fn favoring(section: usize) -> Vec<VisibleItemSample> {
        vec![
            VisibleItemSample::new(section, 0),
            VisibleItemSample::new(section, 1),
            VisibleItemSample::new(section + 1, 0),
        ]
    }

    fn ready_handle() -> RecordingHandle {
        RecordingHandle {
            ready: true,
            ..Default::default()
        }
    }

    fn tabs_for(sections: &[Section<usize>]) -> SectionTabs {
        let mut tabs = SectionTabs::default();
        tabs.sections_changed(sections.len());
        tabs
    }

    #[test]
    fn tap_scroll_settle_then_follow_visibility() {
        let sections = sections(3);
        let mut handle = ready_handle();
        let mut tabs = tabs_for(&sections);
        assert_eq!(tabs.active_index(), 0);

        tabs.on_tab_pressed(2, &sections, &mut handle)
            .expect("valid tap dispatches");
        assert_eq!(tabs.active_index(), 2);
        assert!(tabs.is_suppressed());

        assert_eq!(tabs.on_viewable_items_changed(&favoring(0)), None);
        assert_eq!(tabs.active_index(), 2);

        assert!(tabs.on_momentum_scroll_end());
        assert!(!tabs.is_suppressed());

        assert_eq!(tabs.on_viewable_items_changed(&favoring(1)), Some(1));
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn drag_hands_back_control() {
        let sections = sections(4);
        let mut handle = ready_handle();
        let mut tabs = tabs_for(&sections);

        tabs.on_tab_pressed(3, &sections, &mut handle).unwrap();
        assert!(tabs.on_scroll_begin_drag());
        assert_eq!(tabs.on_viewable_items_changed(&favoring(1)), Some(1));
    }

    #[test]
    fn dispatched_request_carries_config() {
        let sections = sections(3);
        let mut handle = ready_handle();
        let mut tabs = SectionTabs::new(CoordinatorConfig {
            scroll_to_location_offset: 24.0,
            animated: false,
            ..CoordinatorConfig::default()
        });

        let request = tabs.on_tab_pressed(1, &sections, &mut handle).unwrap();
        assert_eq!(
            request,
            ScrollToLocation {
                section_index: 1,
                item_index: 0,
                view_offset: 24.0,
                animated: false,
            }
        );
        assert_eq!(handle.requests, vec![request]);
    }

    #[test]
    fn out_of_range_tap_leaves_state_untouched() {
        let sections = sections(3);
        let mut handle = ready_handle();
        let mut tabs = SectionTabs::default();

        let result = tabs.on_tab_pressed(5, &sections, &mut handle);
        assert_eq!(
            result,
            Err(DispatchError::OutOfRangeIndex { index: 5, len: 3 })
        );
        assert_eq!(tabs.state(), ActiveIndexState::default());
        assert!(handle.requests.is_empty());
    }

    #[test]
    fn unready_list_still_highlights_the_tab() {
        let sections = sections(3);
        let mut handle = RecordingHandle::default();
        let mut tabs = SectionTabs::default();

        let result = tabs.on_tab_pressed(2, &sections, &mut handle);
        assert_eq!(result, Err(DispatchError::HandleNotReady));
        assert_eq!(tabs.active_index(), 2);
        assert!(!tabs.is_suppressed());
        assert!(handle.requests.is_empty());
    }

    #[test]
    fn empty_batch_keeps_previous_tab() {
        let mut tabs = tabs_for(&sections(4));
        tabs.on_viewable_items_changed(&favoring(2));
        assert_eq!(tabs.on_viewable_items_changed(&[]), None);
        assert_eq!(tabs.active_index(), 2);
    }

    #[test]
    fn shrinking_sections_clamps_active_tab() {
        let mut tabs = tabs_for(&sections(6));
        assert_eq!(tabs.on_viewable_items_changed(&favoring(4)), Some(4));
        assert!(tabs.sections_changed(2));
        assert_eq!(tabs.active_index(), 1);
        assert_eq!(tabs.section_count(), 2);
    }

    #[test]
    fn stale_winner_beyond_sections_is_ignored() {
        let mut tabs = tabs_for(&sections(3));
        let moved = tabs.on_viewable_items_changed(&[VisibleItemSample::new(9, 0)]);
        assert_eq!(moved, None);
        assert_eq!(tabs.active_index(), 0);

        let mut fresh = SectionTabs::default();
        assert_eq!(fresh.on_viewable_items_changed(&favoring(1)), None);
        assert_eq!(fresh.active_index(), 0);
    }

    #[test]
    fn explicitly_indexed_section_is_tappable() {
        let mut drinks = SectionData::new("Drinks", vec![1, 2]);
        drinks.index = Some(7);
        let sections = index_sections(vec![SectionData::new("Mains", vec![0]), drinks]);
        let mut handle = ready_handle();
        let mut tabs = tabs_for(&sections);

        let published = sections[1].index;
        let request = tabs
            .on_tab_pressed(published, &sections, &mut handle)
            .expect("tab index addresses the section");
        assert_eq!(request.section_index, 1);
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn stale_winner_after_shrink_keeps_index_in_range() {
        let mut tabs = tabs_for(&sections(5));
        tabs.sections_changed(2);
        assert_eq!(tabs.on_viewable_items_changed(&favoring(3)), None);
        assert!(tabs.active_index() < 2);
    }
}
