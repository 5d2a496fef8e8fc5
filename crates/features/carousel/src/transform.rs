//! # Card Visual Mapping
//!
//! Pure function of the signed distance `index - active_index`: every card
//! rotates, shrinks, recedes, and fades by its distance from the active
//! card. Symmetric around distance 0.

use arkiv_kernel::domain::config::CarouselMotion;

/// Style values for one card at a given distance from the active card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Rotation around the vertical axis, in degrees. Signed: cards left
    /// of the active card rotate one way, cards right of it the other.
    pub rotation: f64,
    pub scale: f64,
    /// Depth offset in pixels, zero or negative.
    pub depth: f64,
    pub opacity: f64,
    /// Stacking order; the active card stacks on top.
    pub z_index: i32,
}

/// Transform for a card `distance` steps away from the active card.
#[must_use]
pub fn card_transform(distance: isize, motion: &CarouselMotion) -> CardTransform {
    let d = distance as f64;
    let steps = d.abs();

    CardTransform {
        rotation: d * motion.degrees_per_step,
        scale: motion.shrink_per_step.mul_add(-steps, 1.0).max(motion.min_scale),
        depth: -motion.depth_per_step * steps,
        opacity: motion.fade_per_step.mul_add(-steps, 1.0).max(motion.min_opacity),
        z_index: motion.base_z.saturating_sub(i32::try_from(distance.abs()).unwrap_or(i32::MAX)),
    }
}
