//! One-time wheel tease: while the writing section is well in view,
//! vertical wheel input is redirected into the track's horizontal scroll
//! until a cumulative budget is spent. After that the tease is permanently
//! done and vertical scrolling passes through untouched.

use arkiv_kernel::domain::config::CarouselMotion;
use tracing::debug;

/// Converts vertical wheel deltas into horizontal track scroll, once.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WheelTease {
    spent: f64,
    done: bool,
}

impl WheelTease {
    /// Offers a wheel event to the tease.
    ///
    /// Returns the horizontal delta to apply to the track when the event
    /// should be captured, or `None` when vertical scrolling should proceed
    /// normally (tease finished or section not sufficiently in view).
    pub fn redirect(
        &mut self,
        delta_y: f64,
        visible_fraction: f64,
        motion: &CarouselMotion,
    ) -> Option<f64> {
        if self.done || visible_fraction < motion.in_view_threshold {
            return None;
        }

        self.spent += delta_y.abs();
        if self.spent >= motion.tease_distance {
            self.done = true;
            debug!("Wheel tease budget spent");
        }

        Some(delta_y)
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_view_events_pass_through() {
        let motion = CarouselMotion::default();
        let mut tease = WheelTease::default();
        assert_eq!(tease.redirect(100.0, 0.3, &motion), None);
        assert!(!tease.is_done());
    }

    #[test]
    fn budget_spends_on_absolute_deltas() {
        let motion = CarouselMotion::default();
        let mut tease = WheelTease::default();

        assert_eq!(tease.redirect(150.0, 1.0, &motion), Some(150.0));
        assert_eq!(tease.redirect(-150.0, 1.0, &motion), Some(-150.0));
        assert!(!tease.is_done());

        // 400px budget spent on this event; it is still captured.
        assert_eq!(tease.redirect(100.0, 1.0, &motion), Some(100.0));
        assert!(tease.is_done());

        // Done is permanent, even fully in view.
        assert_eq!(tease.redirect(100.0, 1.0, &motion), None);
    }
}
