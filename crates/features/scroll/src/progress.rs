//! # Section Progress Mapping
//!
//! Maps an absolute scroll offset to a normalized position inside a tracked
//! section's vertical range. The range starts when the section's top enters
//! the bottom of the viewport and ends when its bottom reaches the viewport
//! midpoint, matching how the page paces its scroll-driven effects.

use arkiv_kernel::geometry::Rect;

/// Normalized progress of the scroll offset through a section.
///
/// `section_top` and `section_bottom` are document-relative. The tracked
/// range is `[section_top - viewport_height, section_bottom - viewport_height / 2]`.
/// A degenerate range (zero or negative) yields 0.
///
/// The result is exactly 0 at or before the range start, exactly 1 at or
/// after the range end, and monotonically non-decreasing in between.
#[must_use]
pub fn section_progress(
    scroll_offset: f64,
    section_top: f64,
    section_bottom: f64,
    viewport_height: f64,
) -> f64 {
    let start = section_top - viewport_height;
    let end = viewport_height.mul_add(-0.5, section_bottom);
    let range = end - start;

    if range <= 0.0 {
        return 0.0;
    }

    ((scroll_offset - start) / range).clamp(0.0, 1.0)
}

/// Tracks one section's document-relative bounds across layout changes.
///
/// Layout can shift at any time, so bounds are re-derived from a fresh
/// viewport rectangle on every scroll and resize event rather than cached.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct SectionTracker {
    top: f64,
    bottom: f64,
    viewport_height: f64,
}

impl SectionTracker {
    /// Re-reads the section bounds from a viewport-relative rectangle taken
    /// at the current scroll offset.
    pub fn update(&mut self, rect: Rect, scroll_offset: f64, viewport_height: f64) {
        self.top = rect.top + scroll_offset;
        self.bottom = rect.bottom() + scroll_offset;
        self.viewport_height = viewport_height;
    }

    /// Progress for the given scroll offset against the last measured bounds.
    #[must_use]
    pub fn progress(&self, scroll_offset: f64) -> f64 {
        section_progress(scroll_offset, self.top, self.bottom, self.viewport_height)
    }

    /// Fraction of the section currently inside the viewport, in [0, 1].
    #[must_use]
    pub fn visible_fraction(&self, scroll_offset: f64) -> f64 {
        let height = self.bottom - self.top;
        if height <= 0.0 || self.viewport_height <= 0.0 {
            return 0.0;
        }

        let viewport_top = scroll_offset;
        let viewport_bottom = scroll_offset + self.viewport_height;
        let visible = (self.bottom.min(viewport_bottom) - self.top.max(viewport_top)).max(0.0);
        (visible / height.min(self.viewport_height)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_before_range_and_one_after() {
        // Section at 2000..3000, viewport 1000: range is 1000..2500.
        assert!((section_progress(999.0, 2000.0, 3000.0, 1000.0)).abs() < f64::EPSILON);
        assert!((section_progress(1000.0, 2000.0, 3000.0, 1000.0)).abs() < f64::EPSILON);
        assert!((section_progress(2500.0, 2000.0, 3000.0, 1000.0) - 1.0).abs() < f64::EPSILON);
        assert!((section_progress(9000.0, 2000.0, 3000.0, 1000.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_at_midpoint() {
        let p = section_progress(1750.0, 2000.0, 3000.0, 1000.0);
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_is_zero() {
        // bottom - vh/2 <= top - vh collapses the range: end = -100, start = 0.
        assert!((section_progress(500.0, 1000.0, 400.0, 1000.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn tracker_rereads_layout() {
        let mut tracker = SectionTracker::default();
        tracker.update(Rect::new(0.0, 500.0, 800.0, 1000.0), 1500.0, 1000.0);
        // Document top 2000, bottom 3000.
        assert!((tracker.progress(1750.0) - 0.5).abs() < 1e-12);

        // Layout shifted; a new measurement replaces the old bounds.
        tracker.update(Rect::new(0.0, 1500.0, 800.0, 1000.0), 1500.0, 1000.0);
        assert!((tracker.progress(1750.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn visible_fraction_saturates() {
        let mut tracker = SectionTracker::default();
        tracker.update(Rect::new(0.0, 0.0, 800.0, 800.0), 2000.0, 1000.0);
        // Fully inside the viewport.
        assert!((tracker.visible_fraction(2000.0) - 1.0).abs() < f64::EPSILON);
        // Fully outside.
        assert!((tracker.visible_fraction(5000.0)).abs() < f64::EPSILON);
    }
}
