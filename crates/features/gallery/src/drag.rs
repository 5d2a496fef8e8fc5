//! # Drag and Inertia
//!
//! Pointer-drag rotation with flick inertia. While the pointer is captured,
//! horizontal movement accumulates into the rotation offset; on release the
//! recorded velocity decays geometrically until it falls below the epsilon
//! in the tuning.

use arkiv_kernel::domain::config::GalleryMotion;

/// Drag phase of the gallery.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer captured, offset follows the pointer.
    Dragging,
    /// Pointer released with velocity, offset coasting.
    Coasting,
}

/// Pointer-drag state driving the gallery's manual rotation offset.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    phase: DragPhase,
    last_x: f64,
    velocity: f64,
    offset: f64,
}

impl DragState {
    /// Captures the pointer. Resets velocity, which also cancels any
    /// inertia still decaying from a previous flick.
    pub fn pointer_down(&mut self, x: f64) {
        self.phase = DragPhase::Dragging;
        self.last_x = x;
        self.velocity = 0.0;
    }

    /// Accumulates pointer movement into the rotation offset. Dragging
    /// right rotates the cylinder left, hence the negated delta.
    pub fn pointer_move(&mut self, x: f64, motion: &GalleryMotion) {
        if self.phase != DragPhase::Dragging {
            return;
        }

        let delta = x - self.last_x;
        let step = -delta * motion.drag_sensitivity;
        self.offset += step;
        self.velocity = step;
        self.last_x = x;
    }

    /// Releases the pointer. The last recorded velocity, if above the
    /// epsilon, carries the offset forward as inertia.
    pub fn pointer_up(&mut self, motion: &GalleryMotion) {
        if self.phase != DragPhase::Dragging {
            return;
        }

        self.phase = if self.velocity.abs() > motion.velocity_epsilon {
            DragPhase::Coasting
        } else {
            DragPhase::Idle
        };
    }

    /// One inertia frame: adds the velocity to the offset and decays it.
    /// Returns `true` while still coasting.
    pub fn inertia_tick(&mut self, motion: &GalleryMotion) -> bool {
        if self.phase != DragPhase::Coasting {
            return false;
        }

        self.offset += self.velocity;
        self.velocity *= motion.damping;

        if self.velocity.abs() < motion.velocity_epsilon {
            self.velocity = 0.0;
            self.phase = DragPhase::Idle;
            return false;
        }

        true
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_accumulates_negated_scaled_delta() {
        let motion = GalleryMotion::default();
        let mut drag = DragState::default();

        drag.pointer_down(100.0);
        drag.pointer_move(140.0, &motion);

        assert!((drag.offset() + 40.0 * motion.drag_sensitivity).abs() < 1e-12);
        assert!(drag.is_dragging());
    }

    #[test]
    fn release_without_velocity_goes_idle() {
        let motion = GalleryMotion::default();
        let mut drag = DragState::default();

        drag.pointer_down(100.0);
        drag.pointer_up(&motion);

        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(!drag.inertia_tick(&motion));
    }

    #[test]
    fn inertia_approaches_the_geometric_limit() {
        let motion = GalleryMotion::default();
        let mut drag = DragState::default();

        drag.pointer_down(0.0);
        drag.pointer_move(-50.0, &motion);
        let v0 = 50.0 * motion.drag_sensitivity;
        let offset0 = drag.offset();
        drag.pointer_up(&motion);
        assert_eq!(drag.phase(), DragPhase::Coasting);

        let mut frames = 0;
        while drag.inertia_tick(&motion) {
            frames += 1;
            assert!(frames < 10_000, "inertia must terminate");
        }

        // offset0 + v0 * (1 - d^n) / (1 - d) approaches offset0 + v0 / (1 - d).
        let limit = offset0 + v0 / (1.0 - motion.damping);
        assert!(drag.offset() <= limit + 1e-12);
        assert!(drag.offset() > offset0);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn new_drag_cancels_coasting() {
        let motion = GalleryMotion::default();
        let mut drag = DragState::default();

        drag.pointer_down(0.0);
        drag.pointer_move(-100.0, &motion);
        drag.pointer_up(&motion);
        assert_eq!(drag.phase(), DragPhase::Coasting);

        drag.pointer_down(10.0);
        assert_eq!(drag.phase(), DragPhase::Dragging);
        assert!(!drag.inertia_tick(&motion));
    }
}
