//! Viewability gate for list items.
//!
//! An item is viewable once at least `item_visible_percent_threshold` percent
//! of its height has stayed inside the viewport for `minimum_view_time_ms`.
//! The tracker reports the full viewable set every time that set changes,
//! which is the batch the section tracker consumes.

use crate::geometry::ItemFrame;
use crate::visibility::VisibleItemSample;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

fn default_minimum_view_time_ms() -> u64 {
    50
}

fn default_item_visible_percent_threshold() -> f32 {
    30.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewabilityConfig {
    #[serde(default = "default_minimum_view_time_ms")]
    pub minimum_view_time_ms: u64,
    #[serde(default = "default_item_visible_percent_threshold")]
    pub item_visible_percent_threshold: f32,
}

impl Default for ViewabilityConfig {
    fn default() -> Self {
        Self {
            minimum_view_time_ms: default_minimum_view_time_ms(),
            item_visible_percent_threshold: default_item_visible_percent_threshold(),
        }
    }
}

impl ViewabilityConfig {
    pub fn minimum_view_time(&self) -> Duration {
        Duration::from_millis(self.minimum_view_time_ms)
    }
}

/// Share of `frame` inside `[viewport_top, viewport_top + viewport_height)`,
/// as a percentage of the frame's height.
pub fn visible_percent(frame: &ItemFrame, viewport_top: f32, viewport_height: f32) -> f32 {
    if frame.height <= f32::EPSILON || viewport_height <= 0.0 {
        return 0.0;
    }
    let viewport_bottom = viewport_top + viewport_height;
    let overlap = frame.bottom().min(viewport_bottom) - frame.top.max(viewport_top);
    if overlap <= 0.0 {
        return 0.0;
    }
    (overlap / frame.height * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Default)]
pub struct ViewabilityTracker {
    config: ViewabilityConfig,
    candidates: BTreeMap<VisibleItemSample, Instant>,
    viewable: BTreeSet<VisibleItemSample>,
}

impl ViewabilityTracker {
    pub fn new(config: ViewabilityConfig) -> Self {
        Self {
            config,
            candidates: BTreeMap::new(),
            viewable: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> ViewabilityConfig {
        self.config
    }

    pub fn viewable(&self) -> impl Iterator<Item = VisibleItemSample> + '_ {
        self.viewable.iter().copied()
    }

    /// Items above the area threshold that are still waiting out the minimum
    /// view time. Hosts keep a timer running while this is `true`.
    pub fn has_pending(&self) -> bool {
        self.candidates
            .keys()
            .any(|sample| !self.viewable.contains(sample))
    }

    /// Forget every timer, e.g. after the sections were replaced.
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.viewable.clear();
    }

    /// Re-evaluate `frames` against the viewport.
    ///
    /// Returns the new viewable batch when it differs from the previous one.
    pub fn update(
        &mut self,
        frames: &[ItemFrame],
        viewport_top: f32,
        viewport_height: f32,
        now: Instant,
    ) -> Option<Vec<VisibleItemSample>> {
        let threshold = self.config.item_visible_percent_threshold;
        let in_view: BTreeSet<VisibleItemSample> = frames
            .iter()
            .filter(|frame| {
                let percent = visible_percent(frame, viewport_top, viewport_height);
                percent > 0.0 && percent >= threshold
            })
            .map(|frame| frame.sample)
            .collect();

        self.candidates.retain(|sample, _| in_view.contains(sample));
        for sample in &in_view {
            self.candidates.entry(*sample).or_insert(now);
        }

        let minimum = self.config.minimum_view_time();
        let qualifying: BTreeSet<VisibleItemSample> = self
            .candidates
            .iter()
            .filter(|(_, since)| now.saturating_duration_since(**since) >= minimum)
            .map(|(sample, _)| *sample)
            .collect();

        if qualifying == self.viewable {
            return None;
        }
        self.viewable = qualifying;
        Some(self.viewable.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ListGeometry;

    fn frame(top: f32, height: f32) -> ItemFrame {
        ItemFrame {
            sample: VisibleItemSample::new(0, 0),
            top,
            height,
        }
    }

    #[test]
    fn visible_percent_covers_partial_overlap() {
        assert_eq!(visible_percent(&frame(0.0, 100.0), 0.0, 500.0), 100.0);
        assert_eq!(visible_percent(&frame(450.0, 100.0), 0.0, 500.0), 50.0);
        assert_eq!(visible_percent(&frame(-75.0, 100.0), 0.0, 500.0), 25.0);
        assert_eq!(visible_percent(&frame(600.0, 100.0), 0.0, 500.0), 0.0);
        assert_eq!(visible_percent(&frame(0.0, 100.0), 0.0, 0.0), 0.0);
    }

    #[test]
    fn items_below_threshold_are_never_reported() {
        // Viewport shows the whole first item and 20% of the second.
        let geometry = ListGeometry::new(&[2], 0.0, 100.0);
        let mut tracker = ViewabilityTracker::new(ViewabilityConfig {
            minimum_view_time_ms: 0,
            item_visible_percent_threshold: 30.0,
        });
        let now = Instant::now();

        let batch = tracker
            .update(geometry.frames(), 0.0, 120.0, now)
            .expect("first evaluation reports");
        assert_eq!(batch, vec![VisibleItemSample::new(0, 1)]);
    }

    #[test]
    fn minimum_view_time_delays_reporting() {
        let geometry = ListGeometry::new(&[3], 0.0, 100.0);
        let mut tracker = ViewabilityTracker::new(ViewabilityConfig::default());
        let start = Instant::now();

        assert_eq!(tracker.update(geometry.frames(), 0.0, 200.0, start), None);
        assert!(tracker.has_pending());

        let later = start + Duration::from_millis(60);
        let batch = tracker
            .update(geometry.frames(), 0.0, 200.0, later)
            .expect("items qualify after the minimum view time");
        assert_eq!(
            batch,
            vec![VisibleItemSample::new(0, 1), VisibleItemSample::new(0, 2)]
        );
        assert!(!tracker.has_pending());
    }

    #[test]
    fn unchanged_set_is_not_reported_twice() {
        let geometry = ListGeometry::new(&[3], 0.0, 100.0);
        let mut tracker = ViewabilityTracker::new(ViewabilityConfig {
            minimum_view_time_ms: 0,
            item_visible_percent_threshold: 30.0,
        });
        let now = Instant::now();

        assert!(tracker.update(geometry.frames(), 0.0, 200.0, now).is_some());
        assert!(tracker.update(geometry.frames(), 5.0, 200.0, now).is_none());
        let moved = tracker
            .update(geometry.frames(), 100.0, 200.0, now)
            .expect("scrolling one row changes the set");
        assert_eq!(
            moved,
            vec![VisibleItemSample::new(0, 2), VisibleItemSample::new(0, 3)]
        );
    }

    #[test]
    fn fast_fly_by_never_qualifies() {
        let geometry = ListGeometry::new(&[10], 0.0, 100.0);
        let mut tracker = ViewabilityTracker::new(ViewabilityConfig::default());
        let start = Instant::now();

        for step in 0..5u64 {
            let now = start + Duration::from_millis(step * 10);
            let top = step as f32 * 200.0;
            assert_eq!(tracker.update(geometry.frames(), top, 200.0, now), None);
        }
        assert_eq!(tracker.viewable().count(), 0);
    }

    #[test]
    fn reset_clears_timers() {
        let geometry = ListGeometry::new(&[2], 0.0, 100.0);
        let mut tracker = ViewabilityTracker::new(ViewabilityConfig::default());
        tracker.update(geometry.frames(), 0.0, 200.0, Instant::now());
        assert!(tracker.has_pending());
        tracker.reset();
        assert!(!tracker.has_pending());
    }
}
