//! Scroll-driven presentation helpers: parallax interpolation, staggered
//! word reveals, and pinned-chapter bookkeeping. All pure progress-in /
//! values-out; the shell binds the results to styles.

/// Linear parallax offset over a scrubbed trigger range.
///
/// `progress` is clamped to [0, 1] before interpolating from `from_y`
/// to `to_y`.
#[must_use]
pub fn parallax_offset(progress: f64, from_y: f64, to_y: f64) -> f64 {
    (to_y - from_y).mul_add(progress.clamp(0.0, 1.0), from_y)
}

/// One word's state inside a staggered reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordTransform {
    pub opacity: f64,
    pub y: f64,
}

/// Staggered word-reveal timeline for split-text entrances.
///
/// Word `i` starts `i * stagger` seconds after the reveal triggers and
/// fades in over `duration` seconds while rising from `rise` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordReveal {
    pub stagger: f64,
    pub duration: f64,
    pub rise: f64,
}

impl Default for WordReveal {
    fn default() -> Self {
        Self { stagger: 0.02, duration: 0.6, rise: 20.0 }
    }
}

impl WordReveal {
    /// Whether the reveal should fire, given the section top's position in
    /// the viewport. Triggers once the top crosses 80% of the viewport.
    #[must_use]
    pub fn should_trigger(top_in_viewport: f64, viewport_height: f64) -> bool {
        top_in_viewport < viewport_height * 0.8
    }

    /// Progress of word `index` at `elapsed` seconds since trigger.
    #[must_use]
    pub fn word_progress(&self, elapsed: f64, index: usize) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }

        let start = self.stagger * index as f64;
        ((elapsed - start) / self.duration).clamp(0.0, 1.0)
    }

    /// Opacity and vertical offset of word `index` at `elapsed` seconds.
    #[must_use]
    pub fn word_transform(&self, elapsed: f64, index: usize) -> WordTransform {
        let progress = self.word_progress(elapsed, index);
        WordTransform { opacity: progress, y: self.rise * (1.0 - progress) }
    }

    /// Seconds until every word of an `n`-word reveal has finished.
    #[must_use]
    pub fn total_duration(&self, word_count: usize) -> f64 {
        if word_count == 0 {
            return 0.0;
        }
        self.stagger.mul_add((word_count - 1) as f64, self.duration)
    }
}

/// Scroll range over which a chapter stays pinned to the viewport top.
///
/// The pin engages when the section top reaches the viewport top and holds
/// for `viewport_height * pin_duration_factor` pixels of scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedChapter {
    start: f64,
    end: f64,
}

impl PinnedChapter {
    #[must_use]
    pub fn new(section_top: f64, viewport_height: f64, pin_duration_factor: f64) -> Self {
        let start = section_top;
        let end = viewport_height.mul_add(pin_duration_factor.max(0.0), start);
        Self { start, end }
    }

    #[must_use]
    pub fn is_pinned(&self, scroll_offset: f64) -> bool {
        scroll_offset >= self.start && scroll_offset < self.end
    }

    /// Progress through the pinned range, clamped to [0, 1].
    #[must_use]
    pub fn progress(&self, scroll_offset: f64) -> f64 {
        let range = self.end - self.start;
        if range <= 0.0 {
            return 0.0;
        }
        ((scroll_offset - self.start) / range).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_interpolates_and_clamps() {
        assert!((parallax_offset(0.0, 0.0, -50.0)).abs() < f64::EPSILON);
        assert!((parallax_offset(0.5, 0.0, -50.0) + 25.0).abs() < f64::EPSILON);
        assert!((parallax_offset(2.0, 0.0, -50.0) + 50.0).abs() < f64::EPSILON);
        assert!((parallax_offset(-1.0, 10.0, 20.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn words_reveal_in_stagger_order() {
        let reveal = WordReveal::default();
        let early = reveal.word_transform(0.3, 0);
        let late = reveal.word_transform(0.3, 10);

        assert!(early.opacity > late.opacity);
        assert!(early.y < late.y);
    }

    #[test]
    fn finished_word_is_fully_visible() {
        let reveal = WordReveal::default();
        let done = reveal.word_transform(5.0, 3);
        assert!((done.opacity - 1.0).abs() < f64::EPSILON);
        assert!(done.y.abs() < f64::EPSILON);
    }

    #[test]
    fn reveal_total_duration() {
        let reveal = WordReveal::default();
        assert!((reveal.total_duration(0)).abs() < f64::EPSILON);
        assert!((reveal.total_duration(1) - 0.6).abs() < 1e-12);
        assert!((reveal.total_duration(11) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn trigger_fires_below_eighty_percent() {
        assert!(WordReveal::should_trigger(700.0, 1000.0));
        assert!(!WordReveal::should_trigger(900.0, 1000.0));
    }

    #[test]
    fn pin_range_holds_for_factor_times_viewport() {
        let chapter = PinnedChapter::new(2000.0, 1000.0, 1.5);
        assert!(!chapter.is_pinned(1999.0));
        assert!(chapter.is_pinned(2000.0));
        assert!(chapter.is_pinned(3499.0));
        assert!(!chapter.is_pinned(3500.0));
        assert!((chapter.progress(2750.0) - 0.5).abs() < f64::EPSILON);
    }
}
