//! # Cylinder Layout
//!
//! Places cards on a cylinder in consecutive rings. Within a ring, cards
//! are spread evenly around the circumference; rings stack vertically,
//! centered around y = 0. Placement is a pure function of the card index
//! and the gallery tuning, independent of rendering.

use crate::error::GalleryError;
use arkiv_kernel::domain::config::GalleryMotion;
use arkiv_kernel::geometry::Vec3;
use std::f64::consts::{PI, TAU};

/// Position and facing of one card on the cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub position: Vec3,
    /// Rotation around the vertical axis; cards face the common center.
    pub rotation_y: f64,
}

/// Number of rings needed for `card_count` cards.
#[must_use]
pub const fn ring_count(card_count: usize, ring_size: usize) -> usize {
    if ring_size == 0 {
        return 0;
    }
    card_count.div_ceil(ring_size)
}

/// Placements for every card, in card order.
///
/// Card `i` lands in ring `i / ring_size` at slot `i % ring_size`. The slot
/// determines the angle around the cylinder; the ring determines the
/// vertical offset, with the ring stack centered on y = 0.
///
/// # Errors
/// [`GalleryError::InvalidLayout`] when `ring_size` is zero.
pub fn layout(card_count: usize, motion: &GalleryMotion) -> Result<Vec<CardPlacement>, GalleryError> {
    if motion.ring_size == 0 {
        return Err(GalleryError::InvalidLayout {
            message: "Ring size must be at least 1".into(),
            context: None,
        });
    }

    let rings = ring_count(card_count, motion.ring_size);
    let slot_angle = TAU / motion.ring_size as f64;
    let stack_center = (rings.saturating_sub(1)) as f64 / 2.0;

    let placements = (0..card_count)
        .map(|index| {
            let ring = (index / motion.ring_size) as f64;
            let slot = (index % motion.ring_size) as f64;

            let angle = slot * slot_angle;
            let y = (ring - stack_center) * motion.ring_spacing;

            CardPlacement {
                position: Vec3::new(
                    motion.radius * angle.cos(),
                    y,
                    motion.radius * angle.sin(),
                ),
                rotation_y: angle + PI,
            }
        })
        .collect();

    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_angle_is_independent_of_ring() {
        let motion = GalleryMotion::default();
        let placements = layout(12, &motion).expect("valid layout");

        for (index, placement) in placements.iter().enumerate() {
            let slot = index % motion.ring_size;
            let expected = slot as f64 * (TAU / 4.0) + PI;
            assert!(
                (placement.rotation_y - expected).abs() < 1e-12,
                "card {index} rotation"
            );
        }
    }

    #[test]
    fn eight_cards_make_two_centered_rings() {
        let motion = GalleryMotion::default();
        let placements = layout(8, &motion).expect("valid layout");
        let half_spacing = motion.ring_spacing / 2.0;

        for placement in &placements[..4] {
            assert!((placement.position.y + half_spacing).abs() < 1e-12);
        }
        for placement in &placements[4..] {
            assert!((placement.position.y - half_spacing).abs() < 1e-12);
        }

        // Slot 0 of both rings: same angle, different height.
        assert!((placements[0].rotation_y - PI).abs() < 1e-12);
        assert!((placements[4].rotation_y - PI).abs() < 1e-12);
        assert!((placements[0].position.x - placements[4].position.x).abs() < 1e-12);
        assert!((placements[0].position.z - placements[4].position.z).abs() < 1e-12);
        assert!(placements[0].position.y < placements[4].position.y);
    }

    #[test]
    fn cards_sit_on_the_cylinder() {
        let motion = GalleryMotion::default();
        for placement in layout(10, &motion).expect("valid layout") {
            let r = placement.position.x.hypot(placement.position.z);
            assert!((r - motion.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn partial_last_ring_is_allowed() {
        let motion = GalleryMotion::default();
        assert_eq!(ring_count(6, 4), 2);
        assert_eq!(layout(6, &motion).expect("valid layout").len(), 6);
    }

    #[test]
    fn zero_ring_size_is_rejected() {
        let motion = GalleryMotion { ring_size: 0, ..GalleryMotion::default() };
        assert!(layout(4, &motion).is_err());
    }
}
