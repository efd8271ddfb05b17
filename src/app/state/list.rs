use super::animation::ScrollAnimation;
use iced::Rectangle;
use section_tabs_core::{ListGeometry, ListHandle, ScrollToLocation};
use tracing::debug;

/// A resolved list scroll waiting to be turned into a task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(in crate::app) struct PendingScroll {
    pub(in crate::app) offset_y: f32,
    pub(in crate::app) animated: bool,
}

/// Geometry and scroll position of the sectioned menu list.
pub struct ListState {
    pub(in crate::app) geometry: ListGeometry,
    pub(in crate::app) offset_y: f32,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) content_height: f32,
    pub(in crate::app) pending_scroll: Option<PendingScroll>,
    pub(in crate::app) animation: Option<ScrollAnimation>,
    /// Window-space bounds from the last scroll report.
    pub(in crate::app) bounds: Option<Rectangle>,
}

impl ListState {
    pub(in crate::app) fn new() -> Self {
        Self {
            geometry: ListGeometry::default(),
            offset_y: 0.0,
            viewport_height: 0.0,
            content_height: 0.0,
            pending_scroll: None,
            animation: None,
            bounds: None,
        }
    }

    pub(in crate::app) fn relayout(&mut self, item_counts: &[usize], header: f32, item: f32) {
        self.geometry = ListGeometry::new(item_counts, header, item);
        self.content_height = self.geometry.content_height();
        self.offset_y = 0.0;
        self.pending_scroll = None;
        self.animation = None;
    }

    pub(in crate::app) fn clamp_offset(&self, offset_y: f32) -> f32 {
        if !offset_y.is_finite() {
            return 0.0;
        }
        offset_y.clamp(0.0, self.geometry.max_scroll(self.viewport_height))
    }
}

impl ListHandle for ListState {
    fn is_ready(&self) -> bool {
        self.viewport_height > 0.0 && self.geometry.section_count() > 0
    }

    fn scroll_to_location(&mut self, request: ScrollToLocation) {
        let Some(offset_y) = self.geometry.scroll_offset(
            request.section_index,
            request.item_index,
            request.view_offset,
            self.viewport_height,
        ) else {
            return;
        };
        debug!(
            section = request.section_index,
            from = self.offset_y,
            to = offset_y,
            animated = request.animated,
            "Resolved list scroll target"
        );
        self.pending_scroll = Some(PendingScroll {
            offset_y,
            animated: request.animated,
        });
    }
}
