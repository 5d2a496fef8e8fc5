//! # Carousel Core
//!
//! Active-card selection, programmatic centering with a bounded
//! measure-and-retry loop, and debounced settle detection after free
//! scrolling. The core is event-in / command-out: the shell feeds it
//! selection, scroll, and timer events and executes the returned scroll
//! commands, owning the actual timers.
//!
//! A re-entrancy guard keeps programmatic and user-driven scroll handling
//! from feeding back into each other: centering enters `ProgrammaticScroll`
//! and scroll events are ignored until the shell reports the scroll
//! animation timeout.

use crate::error::CarouselError;
use arkiv_kernel::domain::config::CarouselMotion;
use arkiv_kernel::measure::TrackMeasurer;
use tracing::debug;

/// What the carousel is currently doing.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    #[default]
    Idle,
    /// A centering scroll is in flight; scroll events are ignored.
    ProgrammaticScroll,
    /// The user is free-scrolling; a settle check is pending.
    UserScroll,
}

/// A smooth horizontal scroll the shell should perform on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub left: f64,
}

/// Result of a centering attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CenterAction {
    /// Card measured; scroll the track.
    Scroll(ScrollTo),
    /// Card not yet measurable; try again after the configured delay.
    RetryAfter { delay_ms: u64 },
}

/// Interaction core for one horizontal card carousel.
///
/// One core instance exclusively drives one scroll track; two cores must
/// never share a track.
#[derive(Debug, Clone)]
pub struct Carousel {
    motion: CarouselMotion,
    count: usize,
    active: usize,
    phase: CarouselPhase,
    retries_left: u32,
}

impl Carousel {
    #[must_use]
    pub fn new(count: usize, motion: CarouselMotion) -> Self {
        let retries = motion.center_retry_limit;
        Self { motion, count, active: 0, phase: CarouselPhase::Idle, retries_left: retries }
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn phase(&self) -> CarouselPhase {
        self.phase
    }

    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.active + 1 < self.count
    }

    #[must_use]
    pub const fn can_go_previous(&self) -> bool {
        self.active > 0
    }

    /// Selects a card and starts centering it. The index is clamped to
    /// `[0, count - 1]` on every entry point.
    ///
    /// Returns the first centering action, or `None` for an empty carousel.
    ///
    /// # Errors
    /// [`CarouselError::CenteringFailed`] if the retry budget is already
    /// exhausted (only possible via repeated [`Self::retry_center`]).
    pub fn select(
        &mut self,
        index: isize,
        measurer: &impl TrackMeasurer,
    ) -> Result<Option<CenterAction>, CarouselError> {
        if self.count == 0 {
            return Ok(None);
        }

        let max = (self.count - 1) as isize;
        self.active = usize::try_from(index.clamp(0, max)).unwrap_or(0);
        self.retries_left = self.motion.center_retry_limit;
        self.phase = CarouselPhase::ProgrammaticScroll;
        self.try_center(measurer).map(Some)
    }

    /// Advances to the next card, saturating at the end.
    ///
    /// # Errors
    /// See [`Self::select`].
    pub fn next(
        &mut self,
        measurer: &impl TrackMeasurer,
    ) -> Result<Option<CenterAction>, CarouselError> {
        self.select(self.active.cast_signed() + 1, measurer)
    }

    /// Goes back to the previous card, saturating at the start.
    ///
    /// # Errors
    /// See [`Self::select`].
    pub fn previous(
        &mut self,
        measurer: &impl TrackMeasurer,
    ) -> Result<Option<CenterAction>, CarouselError> {
        self.select(self.active.cast_signed() - 1, measurer)
    }

    /// Re-attempts centering after a [`CenterAction::RetryAfter`] delay.
    ///
    /// # Errors
    /// [`CarouselError::CenteringFailed`] once the retry budget runs out;
    /// the card never became measurable.
    pub fn retry_center(
        &mut self,
        measurer: &impl TrackMeasurer,
    ) -> Result<CenterAction, CarouselError> {
        self.try_center(measurer)
    }

    fn try_center(&mut self, measurer: &impl TrackMeasurer) -> Result<CenterAction, CarouselError> {
        let Some((track, card)) = measurer.track().zip(measurer.card(self.active)) else {
            if self.retries_left == 0 {
                self.phase = CarouselPhase::Idle;
                return Err(CarouselError::CenteringFailed {
                    message: format!(
                        "Card {} never became measurable after {} retries",
                        self.active, self.motion.center_retry_limit
                    )
                    .into(),
                    context: None,
                });
            }

            self.retries_left -= 1;
            debug!(
                index = self.active,
                retries_left = self.retries_left,
                "Card not measurable yet, retrying"
            );
            return Ok(CenterAction::RetryAfter { delay_ms: self.motion.center_retry_delay_ms });
        };

        let delta = card.center_x() - track.center_x();
        Ok(CenterAction::Scroll(ScrollTo { left: measurer.scroll_left() + delta }))
    }

    /// A scroll event arrived on the track. Returns the debounce delay the
    /// shell should wait before calling [`Self::settle`], or `None` while
    /// a programmatic scroll is in flight.
    pub fn on_scroll(&mut self) -> Option<u64> {
        if self.phase == CarouselPhase::ProgrammaticScroll {
            return None;
        }

        self.phase = CarouselPhase::UserScroll;
        Some(self.motion.settle_debounce_ms)
    }

    /// The programmatic scroll animation has run its course; scroll events
    /// are user-driven again.
    pub fn end_programmatic_scroll(&mut self) {
        if self.phase == CarouselPhase::ProgrammaticScroll {
            self.phase = CarouselPhase::Idle;
        }
    }

    /// How long a programmatic scroll suppresses scroll handling.
    #[must_use]
    pub const fn programmatic_timeout_ms(&self) -> u64 {
        self.motion.programmatic_timeout_ms
    }

    /// The settle debounce fired: picks the card whose center is nearest
    /// the track's center and makes it active without re-centering, so a
    /// user scroll never triggers a programmatic scroll.
    ///
    /// Returns the new active index when it changed.
    pub fn settle(&mut self, measurer: &impl TrackMeasurer) -> Option<usize> {
        if self.phase != CarouselPhase::UserScroll {
            return None;
        }
        self.phase = CarouselPhase::Idle;

        let track = measurer.track()?;
        let track_center = track.center_x();

        let mut closest = self.active;
        let mut closest_distance = f64::INFINITY;
        for index in 0..self.count {
            if let Some(card) = measurer.card(index) {
                let distance = (card.center_x() - track_center).abs();
                if distance < closest_distance {
                    closest_distance = distance;
                    closest = index;
                }
            }
        }

        (closest != self.active).then(|| {
            self.active = closest;
            closest
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkiv_kernel::geometry::Rect;
    use arkiv_kernel::measure::StaticMeasurer;

    fn measurer(card_count: usize) -> StaticMeasurer {
        // Track 0..1000, cards 260px wide laid out side by side.
        StaticMeasurer {
            track: Some(Rect::new(0.0, 0.0, 1000.0, 600.0)),
            cards: (0..card_count)
                .map(|i| Some(Rect::new(i as f64 * 260.0, 0.0, 260.0, 520.0)))
                .collect(),
            scroll_left: 0.0,
        }
    }

    #[test]
    fn select_clamps_into_range() {
        let m = measurer(5);
        let mut carousel = Carousel::new(5, CarouselMotion::default());

        carousel.select(7, &m).expect("select");
        assert_eq!(carousel.active_index(), 4);

        carousel.select(-3, &m).expect("select");
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn select_emits_a_centering_scroll() {
        let m = measurer(5);
        let mut carousel = Carousel::new(5, CarouselMotion::default());

        let action = carousel.select(1, &m).expect("select").expect("non-empty");
        // Card 1 center at 390, track center at 500: scroll by -110.
        assert_eq!(action, CenterAction::Scroll(ScrollTo { left: -110.0 }));
        assert_eq!(carousel.phase(), CarouselPhase::ProgrammaticScroll);
    }

    #[test]
    fn unmeasurable_card_retries_then_gives_up() {
        let mut m = measurer(3);
        m.cards[2] = None;
        let motion = CarouselMotion { center_retry_limit: 2, ..CarouselMotion::default() };
        let mut carousel = Carousel::new(3, motion);

        let first = carousel.select(2, &m).expect("select").expect("non-empty");
        assert_eq!(first, CenterAction::RetryAfter { delay_ms: 50 });

        let second = carousel.retry_center(&m).expect("retry");
        assert_eq!(second, CenterAction::RetryAfter { delay_ms: 50 });

        let exhausted = carousel.retry_center(&m);
        assert!(exhausted.is_err());
        assert_eq!(carousel.phase(), CarouselPhase::Idle);
    }

    #[test]
    fn late_mount_recovers_within_budget() {
        let mut m = measurer(3);
        m.cards[2] = None;
        let mut carousel = Carousel::new(3, CarouselMotion::default());

        carousel.select(2, &m).expect("select");
        // The card mounts before the budget runs out.
        m.cards[2] = Some(Rect::new(520.0, 0.0, 260.0, 520.0));
        let action = carousel.retry_center(&m).expect("retry");
        assert!(matches!(action, CenterAction::Scroll(_)));
    }

    #[test]
    fn scroll_events_are_ignored_while_programmatic() {
        let m = measurer(3);
        let mut carousel = Carousel::new(3, CarouselMotion::default());

        carousel.select(1, &m).expect("select");
        assert_eq!(carousel.on_scroll(), None);

        carousel.end_programmatic_scroll();
        assert_eq!(carousel.on_scroll(), Some(100));
        assert_eq!(carousel.phase(), CarouselPhase::UserScroll);
    }

    #[test]
    fn settle_picks_the_nearest_card_without_recentering() {
        let mut m = measurer(3);
        let mut carousel = Carousel::new(3, CarouselMotion::default());

        carousel.on_scroll();
        // After the user scrolls, card 2's center lands exactly on the
        // track center at 500.
        m.cards = vec![
            Some(Rect::new(-500.0, 0.0, 260.0, 520.0)),
            Some(Rect::new(-240.0, 0.0, 260.0, 520.0)),
            Some(Rect::new(370.0, 0.0, 260.0, 520.0)),
        ];

        assert_eq!(carousel.settle(&m), Some(2));
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.phase(), CarouselPhase::Idle);
    }

    #[test]
    fn settle_with_unchanged_nearest_reports_nothing() {
        let m = measurer(3);
        let mut carousel = Carousel::new(3, CarouselMotion::default());

        carousel.on_scroll();
        // Centers are 130, 390, 650 against a track center of 500, so the
        // first settle moves to card 1; a second settle changes nothing.
        assert_eq!(carousel.settle(&m), Some(1));
        carousel.on_scroll();
        assert_eq!(carousel.settle(&m), None);
    }

    #[test]
    fn navigation_saturates_at_the_ends() {
        let m = measurer(2);
        let mut carousel = Carousel::new(2, CarouselMotion::default());

        assert!(!carousel.can_go_previous());
        carousel.previous(&m).expect("previous");
        assert_eq!(carousel.active_index(), 0);

        carousel.next(&m).expect("next");
        assert_eq!(carousel.active_index(), 1);
        assert!(!carousel.can_go_next());
        carousel.next(&m).expect("next");
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn empty_carousel_selects_nothing() {
        let m = measurer(0);
        let mut carousel = Carousel::new(0, CarouselMotion::default());
        assert_eq!(carousel.select(0, &m).expect("select"), None);
    }
}
