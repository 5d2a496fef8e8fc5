//! The gallery core: owns layout, rotation, drag, and hover state for one
//! cylinder of cards. Geometry in, placements and a rotation out; rendering
//! stays on the other side of the boundary.

use crate::drag::DragState;
use crate::error::GalleryError;
use crate::layout::{CardPlacement, layout};
use crate::rotation::RotationState;
use arkiv_kernel::domain::config::GalleryMotion;

/// Interaction core for one rotating gallery instance.
#[derive(Debug, Clone)]
pub struct Gallery {
    motion: GalleryMotion,
    placements: Vec<CardPlacement>,
    rotation: RotationState,
    drag: DragState,
    hovered: Option<usize>,
}

impl Gallery {
    /// Builds the core and computes the static cylinder layout.
    ///
    /// # Errors
    /// [`GalleryError::InvalidLayout`] when the tuning cannot place cards.
    pub fn new(card_count: usize, motion: GalleryMotion) -> Result<Self, GalleryError> {
        let placements = layout(card_count, &motion)?;
        Ok(Self {
            motion,
            placements,
            rotation: RotationState::default(),
            drag: DragState::default(),
            hovered: None,
        })
    }

    /// Static placement of every card, in card order.
    #[must_use]
    pub fn placements(&self) -> &[CardPlacement] {
        &self.placements
    }

    /// Advances one frame: runs any pending inertia, then eases the
    /// displayed rotation toward its target. Returns the rotation to apply
    /// to the cylinder this frame.
    pub fn frame(&mut self, dt: f64, scroll_progress: f64) -> f64 {
        self.drag.inertia_tick(&self.motion);
        self.rotation.tick(
            dt,
            scroll_progress,
            self.drag.offset(),
            self.drag.is_dragging(),
            &self.motion,
        )
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.drag.pointer_down(x);
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.drag.pointer_move(x, &self.motion);
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up(&self.motion);
    }

    /// Records which card the pointer is over, if any.
    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.placements.len());
    }

    /// Card index currently hovered, for the overlay label.
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation.displayed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_ignores_out_of_range_indices() {
        let mut gallery = Gallery::new(4, GalleryMotion::default()).expect("valid gallery");
        gallery.hover(Some(2));
        assert_eq!(gallery.hovered(), Some(2));
        gallery.hover(Some(99));
        assert_eq!(gallery.hovered(), None);
    }

    #[test]
    fn flick_keeps_rotating_after_release() {
        let mut gallery = Gallery::new(8, GalleryMotion::default()).expect("valid gallery");

        gallery.pointer_down(200.0);
        gallery.pointer_move(100.0);
        gallery.pointer_up();

        let mut last = gallery.frame(1.0 / 60.0, 0.0);
        let mut moved = false;
        for _ in 0..20 {
            let next = gallery.frame(1.0 / 60.0, 0.0);
            if (next - last).abs() > 1e-9 {
                moved = true;
            }
            last = next;
        }
        assert!(moved, "inertia should keep the cylinder moving");
    }
}
