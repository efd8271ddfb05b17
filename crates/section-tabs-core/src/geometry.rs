//! Fixed-row layout of a sectioned list.
//!
//! Every section renders a header of `header_height` followed by its items at
//! `item_height` each. With fixed rows the host never has to measure children
//! to resolve a scroll target or a visible percentage.
//!
//! Rows are addressed the same way everywhere: item index 0 is the section
//! header and index `k > 0` is data item `k - 1`. Frames, visibility samples
//! and scroll targets all share that numbering.

use crate::visibility::VisibleItemSample;

/// Vertical placement of one list item in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    pub sample: VisibleItemSample,
    pub top: f32,
    pub height: f32,
}

impl ItemFrame {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListGeometry {
    header_height: f32,
    item_height: f32,
    section_tops: Vec<f32>,
    frames: Vec<ItemFrame>,
    content_height: f32,
}

impl ListGeometry {
    pub fn new(item_counts: &[usize], header_height: f32, item_height: f32) -> Self {
        let header_height = header_height.max(0.0);
        let item_height = item_height.max(1.0);
        let mut section_tops = Vec::with_capacity(item_counts.len());
        let mut frames = Vec::with_capacity(item_counts.iter().sum::<usize>() + item_counts.len());
        let mut cursor = 0.0f32;

        for (section_index, &count) in item_counts.iter().enumerate() {
            section_tops.push(cursor);
            if header_height > 0.0 {
                frames.push(ItemFrame {
                    sample: VisibleItemSample::new(section_index, 0),
                    top: cursor,
                    height: header_height,
                });
            }
            cursor += header_height;
            for row in 0..count {
                frames.push(ItemFrame {
                    sample: VisibleItemSample::new(section_index, row + 1),
                    top: cursor,
                    height: item_height,
                });
                cursor += item_height;
            }
        }

        Self {
            header_height,
            item_height,
            section_tops,
            frames,
            content_height: cursor,
        }
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn section_count(&self) -> usize {
        self.section_tops.len()
    }

    pub fn section_top(&self, section_index: usize) -> Option<f32> {
        self.section_tops.get(section_index).copied()
    }

    pub fn frames(&self) -> &[ItemFrame] {
        &self.frames
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Largest valid scroll offset for a viewport of `viewport_height`.
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.content_height - viewport_height.max(0.0)).max(0.0)
    }

    /// Content offset that puts row `(section_index, item_index)` at the top of
    /// the viewport, `view_offset` pixels below its edge.
    pub fn scroll_offset(
        &self,
        section_index: usize,
        item_index: usize,
        view_offset: f32,
        viewport_height: f32,
    ) -> Option<f32> {
        let section_top = self.section_top(section_index)?;
        let target = if item_index == 0 {
            section_top
        } else {
            section_top + self.header_height + (item_index - 1) as f32 * self.item_height
        };
        let offset = target - view_offset;
        Some(offset.clamp(0.0, self.max_scroll(viewport_height)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_tops_accumulate_headers_and_items() {
        let geometry = ListGeometry::new(&[2, 0, 3], 40.0, 60.0);
        assert_eq!(geometry.section_count(), 3);
        assert_eq!(geometry.section_top(0), Some(0.0));
        assert_eq!(geometry.section_top(1), Some(160.0));
        assert_eq!(geometry.section_top(2), Some(200.0));
        assert_eq!(geometry.section_top(3), None);
        assert_eq!(geometry.content_height(), 200.0 + 40.0 + 180.0);
    }

    #[test]
    fn frames_are_contiguous_within_sections() {
        let geometry = ListGeometry::new(&[3, 2], 30.0, 50.0);
        let frames = geometry.frames();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[0].sample, VisibleItemSample::new(0, 0));
        assert_eq!(frames[0].height, 30.0);
        assert_eq!(frames[1].top, 30.0);
        assert_eq!(frames[2].top, frames[1].bottom());
        assert_eq!(frames[4].sample, VisibleItemSample::new(1, 0));
        assert_eq!(frames[4].top, frames[3].bottom());
        assert_eq!(frames[5].sample, VisibleItemSample::new(1, 1));
    }

    #[test]
    fn zero_height_headers_have_no_frame() {
        let geometry = ListGeometry::new(&[2], 0.0, 50.0);
        let samples: Vec<_> = geometry.frames().iter().map(|f| f.sample).collect();
        assert_eq!(
            samples,
            vec![VisibleItemSample::new(0, 1), VisibleItemSample::new(0, 2)]
        );
    }

    #[test]
    fn frame_samples_resolve_back_to_their_own_top() {
        let geometry = ListGeometry::new(&[2, 3], 20.0, 50.0);
        for frame in geometry.frames() {
            let offset = geometry.scroll_offset(
                frame.sample.section_index,
                frame.sample.item_index,
                0.0,
                0.0,
            );
            assert_eq!(offset, Some(frame.top), "{:?}", frame.sample);
        }
    }

    #[test]
    fn scroll_offset_applies_view_offset_and_clamps() {
        let geometry = ListGeometry::new(&[4, 4, 1], 20.0, 50.0);
        let viewport = 200.0;

        assert_eq!(geometry.scroll_offset(1, 0, 0.0, viewport), Some(220.0));
        assert_eq!(geometry.scroll_offset(1, 0, 20.0, viewport), Some(200.0));
        assert_eq!(geometry.scroll_offset(0, 0, 10.0, viewport), Some(0.0));
        // The last section is short; the offset stops at the end of the content.
        assert_eq!(
            geometry.scroll_offset(2, 0, 0.0, viewport),
            Some(geometry.max_scroll(viewport))
        );
        assert_eq!(geometry.scroll_offset(3, 0, 0.0, viewport), None);
    }

    #[test]
    fn positive_item_index_skips_the_header() {
        let geometry = ListGeometry::new(&[2, 5], 20.0, 50.0);
        assert_eq!(geometry.scroll_offset(1, 1, 0.0, 100.0), Some(140.0));
        assert_eq!(geometry.scroll_offset(1, 3, 0.0, 100.0), Some(240.0));
    }
}
