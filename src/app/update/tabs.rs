use super::super::state::App;
use super::Effect;
use section_tabs_core::{DispatchError, VisibleItemSample};
use tracing::debug;

impl App {
    pub(super) fn handle_tab_pressed(&mut self, index: usize, effects: &mut Vec<Effect>) {
        match self
            .tabs
            .on_tab_pressed(index, &self.menu.sections, &mut self.list)
        {
            Ok(_) => {
                if let Some(pending) = self.list.pending_scroll.take() {
                    effects.push(Effect::ScrollList {
                        offset_y: pending.offset_y,
                        animated: pending.animated,
                    });
                }
                effects.push(Effect::RevealTab(index));
            }
            Err(DispatchError::HandleNotReady) => effects.push(Effect::RevealTab(index)),
            Err(DispatchError::OutOfRangeIndex { .. }) => {}
        }
    }

    /// Route a viewable batch through the tracker and synchronizer.
    pub(in crate::app) fn handle_viewable_items_changed(
        &mut self,
        batch: &[VisibleItemSample],
        effects: &mut Vec<Effect>,
    ) {
        debug!(
            items = batch.len(),
            suppressed = self.tabs.is_suppressed(),
            "Viewable items changed"
        );
        if let Some(index) = self.tabs.on_viewable_items_changed(batch) {
            effects.push(Effect::RevealTab(index));
        }
    }
}
