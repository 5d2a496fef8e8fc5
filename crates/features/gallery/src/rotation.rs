//! # Rotation State
//!
//! The cylinder's rotation target is the sum of three parts: a slow idle
//! rotation that advances with time, a scroll-coupled offset, and the drag
//! offset. The displayed rotation eases toward the target every frame so it
//! never jumps.

use arkiv_kernel::domain::config::GalleryMotion;

/// Smoothed rotation of the gallery cylinder.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    base: f64,
    displayed: f64,
}

impl RotationState {
    /// Advances one frame and returns the displayed rotation.
    ///
    /// `scroll_progress` is the section progress in [0, 1]; `drag_offset`
    /// is the accumulated drag rotation. The idle rotation pauses while a
    /// drag is active so the cylinder tracks the pointer exactly.
    pub fn tick(
        &mut self,
        dt: f64,
        scroll_progress: f64,
        drag_offset: f64,
        drag_active: bool,
        motion: &GalleryMotion,
    ) -> f64 {
        if !drag_active {
            self.base = motion.angular_speed.mul_add(dt.max(0.0), self.base);
        }

        let target = motion
            .scroll_rotation_range
            .mul_add(scroll_progress.clamp(0.0, 1.0), self.base)
            + drag_offset;

        self.displayed += (target - self.displayed) * motion.smoothing.clamp(0.0, 1.0);
        self.displayed
    }

    #[must_use]
    pub const fn displayed(&self) -> f64 {
        self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_rotation_advances_with_time() {
        let motion = GalleryMotion::default();
        let mut rotation = RotationState::default();

        let first = rotation.tick(1.0 / 60.0, 0.0, 0.0, false, &motion);
        let second = rotation.tick(1.0 / 60.0, 0.0, 0.0, false, &motion);
        assert!(second > first);
    }

    #[test]
    fn idle_rotation_pauses_during_drag() {
        let motion = GalleryMotion::default();
        let mut rotation = RotationState::default();

        rotation.tick(1.0, 0.0, 0.0, true, &motion);
        let mut paused = rotation;
        let held = paused.tick(1.0, 0.0, 0.0, true, &motion);
        // Only smoothing toward an unchanged target, no new base rotation.
        let mut running = rotation;
        let advanced = running.tick(1.0, 0.0, 0.0, false, &motion);
        assert!(advanced > held);
    }

    #[test]
    fn displayed_converges_without_jumping() {
        let motion = GalleryMotion::default();
        let mut rotation = RotationState::default();

        // A large scroll jump moves the target by the full range at once.
        let before = rotation.tick(0.0, 0.0, 0.0, false, &motion);
        let after = rotation.tick(0.0, 1.0, 0.0, false, &motion);

        let step = after - before;
        assert!(step > 0.0);
        assert!(step < motion.scroll_rotation_range * motion.smoothing + 1e-9);

        for _ in 0..2_000 {
            rotation.tick(0.0, 1.0, 0.0, false, &motion);
        }
        assert!((rotation.displayed() - motion.scroll_rotation_range).abs() < 1e-3);
    }

    #[test]
    fn drag_offset_feeds_the_target() {
        let motion = GalleryMotion::default();
        let mut rotation = RotationState::default();

        let neutral = rotation.tick(0.0, 0.0, 0.0, true, &motion);
        let pulled = rotation.tick(0.0, 0.0, 1.0, true, &motion);
        assert!(pulled > neutral);
    }
}
