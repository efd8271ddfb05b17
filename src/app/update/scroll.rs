use super::super::state::App;
use super::Effect;
use std::time::Instant;
use tracing::debug;

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

impl App {
    pub(super) fn handle_list_scrolled(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
        at: Instant,
        effects: &mut Vec<Effect>,
    ) {
        self.list.viewport_height = sanitize_extent(viewport_height);
        self.list.content_height = sanitize_extent(content_height);

        // Frames pushed by a running animation echo back here; the animation
        // owns the offset until it finishes or the user grabs the list.
        if self.list.animation.is_none() {
            self.list.offset_y = self.list.clamp_offset(offset_y);
        }

        self.refresh_visibility(at, effects);
    }

    pub(super) fn handle_scroll_begin_drag(&mut self) {
        if self.list.animation.take().is_some() {
            debug!(offset_y = self.list.offset_y, "User grabbed list mid-animation");
        }
        self.tabs.on_scroll_begin_drag();
    }

    pub(super) fn handle_momentum_scroll_end(&mut self) {
        self.tabs.on_momentum_scroll_end();
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if let Some(animation) = self.list.animation {
            let (offset_y, done) = animation.sample(now);
            self.list.offset_y = self.list.clamp_offset(offset_y);
            effects.push(Effect::SnapList(self.list.offset_y));
            self.refresh_visibility(now, effects);
            if done {
                self.list.animation = None;
                debug!(offset_y = self.list.offset_y, "List scroll animation finished");
                self.handle_momentum_scroll_end();
            }
            return;
        }

        self.refresh_visibility(now, effects);
    }

    /// Feed the current viewport to the viewability tracker.
    pub(in crate::app) fn refresh_visibility(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.list.viewport_height <= 0.0 || self.menu.sections.is_empty() {
            return;
        }
        let batch = self.viewability.update(
            self.list.geometry.frames(),
            self.list.offset_y,
            self.list.viewport_height,
            now,
        );
        if let Some(batch) = batch {
            self.handle_viewable_items_changed(&batch, effects);
        }
    }
}
