//! Page-wide motion state: one place that owns the smooth-scroll offset,
//! the gallery and carousel cores, the wheel tease, and the per-section
//! trackers. The frame driver ticks it; components read the resulting
//! snapshot and feed input events back in.

use arkiv::carousel::{Carousel, WheelTease};
use arkiv::domain::config::MotionConfig;
use arkiv::gallery::Gallery;
use arkiv::kernel::geometry::Rect;
use arkiv::scroll::{PinnedChapter, SectionTracker, SmoothScroll};
use parking_lot::RwLock;
use std::sync::Arc;

/// Everything the presentation needs from one frame.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct MotionSnapshot {
    /// Smoothed virtual scroll offset.
    pub offset: f64,
    pub hero_progress: f64,
    pub chapter_progress: f64,
    pub gallery_progress: f64,
    /// Displayed gallery rotation in radians.
    pub gallery_rotation: f64,
    /// Fraction of the writing section in view, for the wheel tease.
    pub writing_visible: f64,
}

/// The page's interaction state. One instance per window.
#[derive(Debug)]
pub struct PageMotion {
    pub motion: MotionConfig,
    pub scroll: SmoothScroll,
    pub gallery: Gallery,
    pub carousel: Carousel,
    pub tease: WheelTease,
    hero: SectionTracker,
    gallery_section: SectionTracker,
    writing_section: SectionTracker,
    chapter: PinnedChapter,
    viewport_height: f64,
}

impl PageMotion {
    /// Builds the cores from the motion tuning and the archive sizes.
    ///
    /// # Errors
    /// Propagates invalid tuning from the cores.
    pub fn new(
        motion: MotionConfig,
        artifact_count: usize,
        writing_count: usize,
    ) -> anyhow::Result<Self> {
        let scroll = SmoothScroll::new(&motion.scroll).map_err(|e| anyhow::anyhow!(e))?;
        let gallery =
            Gallery::new(artifact_count, motion.gallery.clone()).map_err(|e| anyhow::anyhow!(e))?;
        let carousel = Carousel::new(writing_count, motion.carousel.clone());

        Ok(Self {
            motion,
            scroll,
            gallery,
            carousel,
            tease: WheelTease::default(),
            hero: SectionTracker::default(),
            gallery_section: SectionTracker::default(),
            writing_section: SectionTracker::default(),
            chapter: PinnedChapter::new(0.0, 0.0, 0.0),
            viewport_height: 0.0,
        })
    }

    /// Advances one frame and returns the values the page binds to.
    pub fn frame(&mut self, dt: f64) -> MotionSnapshot {
        let offset = self.scroll.tick(dt);
        let gallery_progress = self.gallery_section.progress(offset);
        let gallery_rotation = self.gallery.frame(dt, gallery_progress);

        MotionSnapshot {
            offset,
            hero_progress: self.hero.progress(offset),
            chapter_progress: self.chapter.progress(offset),
            gallery_progress,
            gallery_rotation,
            writing_visible: self.writing_section.visible_fraction(offset),
        }
    }

    /// Routes a vertical wheel delta. Returns the horizontal delta for the
    /// carousel track when the tease captures the event; otherwise the
    /// delta feeds the page scroll.
    pub fn wheel(&mut self, delta_y: f64) -> Option<f64> {
        let visible = self.writing_section.visible_fraction(self.scroll.offset());
        if let Some(horizontal) = self.tease.redirect(delta_y, visible, &self.motion.carousel) {
            return Some(horizontal);
        }

        self.scroll.wheel(delta_y);
        None
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    pub fn update_hero(&mut self, rect: Rect) {
        self.hero.update(rect, self.scroll.offset(), self.viewport_height);
    }

    pub fn update_gallery_section(&mut self, rect: Rect) {
        self.gallery_section.update(rect, self.scroll.offset(), self.viewport_height);
    }

    pub fn update_writing_section(&mut self, rect: Rect) {
        self.writing_section.update(rect, self.scroll.offset(), self.viewport_height);
    }

    pub fn update_chapter(&mut self, rect: Rect, pin_duration_factor: f64) {
        let section_top = rect.top + self.scroll.offset();
        self.chapter = PinnedChapter::new(section_top, self.viewport_height, pin_duration_factor);
    }
}

/// Shared handle the frame driver and the components both hold.
pub type SharedMotion = Arc<RwLock<PageMotion>>;

/// Convenience constructor used by `main`.
///
/// # Errors
/// See [`PageMotion::new`].
pub fn shared_motion(
    motion: MotionConfig,
    artifact_count: usize,
    writing_count: usize,
) -> Result<SharedMotion, anyhow::Error> {
    Ok(Arc::new(RwLock::new(PageMotion::new(motion, artifact_count, writing_count)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageMotion {
        PageMotion::new(MotionConfig::default(), 8, 3).expect("valid defaults")
    }

    #[test]
    fn frame_reflects_scroll_through_the_gallery_section() {
        let mut page = page();
        page.set_viewport_height(1000.0);
        // Gallery section at document 2000..3000 (viewport-relative at offset 0).
        page.update_gallery_section(Rect::new(0.0, 2000.0, 800.0, 1000.0));

        page.scroll.scroll_to(1750.0);
        let mut snapshot = MotionSnapshot::default();
        for _ in 0..240 {
            snapshot = page.frame(1.0 / 60.0);
        }

        assert!((snapshot.offset - 1750.0).abs() < f64::EPSILON);
        assert!((snapshot.gallery_progress - 0.5).abs() < 1e-9);
        assert!(snapshot.gallery_rotation > 0.0);
    }

    #[test]
    fn wheel_feeds_the_tease_only_in_view() {
        let mut page = page();
        page.set_viewport_height(1000.0);
        // Writing section fully in view.
        page.update_writing_section(Rect::new(0.0, 100.0, 800.0, 800.0));
        assert_eq!(page.wheel(50.0), Some(50.0));

        // Out of view: the delta scrolls the page instead.
        page.update_writing_section(Rect::new(0.0, 5000.0, 800.0, 800.0));
        assert_eq!(page.wheel(50.0), None);
        assert!(page.scroll.is_animating());
    }
}
