use std::ops::Range;

/// Measured card heights for a variable-height list.
///
/// Unmeasured rows count as `estimate`. Offsets are prefix sums over the
/// rows before an index.
#[derive(Debug, Clone)]
pub struct HeightCache {
    heights: Vec<Option<f32>>,
    estimate: f32,
}

impl HeightCache {
    pub fn new(estimate: f32) -> Self {
        Self {
            heights: Vec::new(),
            estimate: estimate.max(1.0),
        }
    }

    pub fn resize(&mut self, len: usize) {
        self.heights.resize(len, None);
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Stores a measurement. Returns true when the layout changed.
    pub fn record(&mut self, index: usize, height: f32) -> bool {
        let Some(slot) = self.heights.get_mut(index) else {
            return false;
        };
        let changed = slot.map_or(true, |old| (old - height).abs() > 0.5);
        *slot = Some(height);
        changed
    }

    pub fn height(&self, index: usize) -> f32 {
        self.heights
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(self.estimate)
    }

    pub fn offset_of(&self, index: usize) -> f32 {
        (0..index.min(self.len())).map(|i| self.height(i)).sum()
    }

    pub fn total_height(&self) -> f32 {
        self.offset_of(self.len())
    }

    /// Rows intersecting `[scroll_top, scroll_top + viewport_height)`.
    pub fn visible_range(&self, scroll_top: f32, viewport_height: f32) -> Range<usize> {
        if self.heights.is_empty() || viewport_height <= 0.0 {
            return 0..0;
        }

        let scroll_top = scroll_top.max(0.0);
        let bottom = scroll_top + viewport_height;
        let mut start = None;
        let mut end = self.len();
        let mut top = 0.0;

        for index in 0..self.len() {
            let row_bottom = top + self.height(index);
            if start.is_none() && row_bottom > scroll_top {
                start = Some(index);
            }
            if top >= bottom {
                end = index;
                break;
            }
            top = row_bottom;
        }

        match start {
            Some(start) => start..end.max(start),
            None => self.len()..self.len(),
        }
    }

    pub fn render_range(&self, scroll_top: f32, viewport_height: f32, overscan: usize) -> Range<usize> {
        let visible = self.visible_range(scroll_top, viewport_height);
        if visible.is_empty() {
            return visible;
        }
        let start = visible.start.saturating_sub(overscan);
        let end = (visible.end + overscan).min(self.len());
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(len: usize) -> HeightCache {
        let mut cache = HeightCache::new(100.0);
        cache.resize(len);
        cache
    }

    #[test]
    fn empty_list_has_empty_range() {
        let cache = cache(0);
        assert_eq!(cache.visible_range(0.0, 500.0), 0..0);
        assert_eq!(cache.total_height(), 0.0);
    }

    #[test]
    fn offsets_are_prefix_sums() {
        let mut cache = cache(4);
        cache.record(1, 250.0);
        assert_eq!(cache.offset_of(0), 0.0);
        assert_eq!(cache.offset_of(2), 350.0);
        assert_eq!(cache.total_height(), 550.0);
    }

    #[test]
    fn visible_range_covers_viewport() {
        let cache = cache(10);
        assert_eq!(cache.visible_range(0.0, 250.0), 0..3);
        assert_eq!(cache.visible_range(150.0, 100.0), 1..3);
        assert_eq!(cache.visible_range(900.0, 500.0), 9..10);
    }

    #[test]
    fn scrolled_past_end_is_empty() {
        let cache = cache(3);
        assert!(cache.visible_range(1_000.0, 100.0).is_empty());
    }

    #[test]
    fn render_range_adds_overscan_within_bounds() {
        let cache = cache(10);
        assert_eq!(cache.render_range(300.0, 200.0, 2), 1..7);
        assert_eq!(cache.render_range(0.0, 100.0, 2), 0..3);
    }

    #[test]
    fn record_reports_layout_changes() {
        let mut cache = cache(2);
        assert!(cache.record(0, 80.0));
        assert!(!cache.record(0, 80.2));
        assert!(cache.record(0, 140.0));
        assert!(!cache.record(5, 10.0));
    }
}
