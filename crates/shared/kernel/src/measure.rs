//! The measurement seam between the pure cores and whatever actually lays
//! out the page. The cores only ever see [`Rect`] values; in tests the seam
//! is a plain struct with canned rectangles.

use crate::geometry::Rect;

/// Layout measurements for a horizontal scroll track and its cards.
///
/// Returning `None` means the element is not mounted or not yet laid out;
/// callers are expected to retry rather than fail.
pub trait TrackMeasurer {
    /// Viewport rectangle of the scroll track.
    fn track(&self) -> Option<Rect>;

    /// Viewport rectangle of the card at `index`.
    fn card(&self, index: usize) -> Option<Rect>;

    /// Current horizontal scroll position of the track.
    fn scroll_left(&self) -> f64;
}

/// Fixed measurements backed by plain vectors.
#[derive(Default, Debug, Clone)]
pub struct StaticMeasurer {
    pub track: Option<Rect>,
    pub cards: Vec<Option<Rect>>,
    pub scroll_left: f64,
}

impl TrackMeasurer for StaticMeasurer {
    fn track(&self) -> Option<Rect> {
        self.track
    }

    fn card(&self, index: usize) -> Option<Rect> {
        self.cards.get(index).copied().flatten()
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }
}
