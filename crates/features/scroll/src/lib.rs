//! Scroll feature slice.
//!
//! Everything scroll-related that is not a widget: mapping the scroll
//! offset to per-section progress, the eased virtual scroll offset the
//! page runs on, and the pure helpers behind parallax, split-text
//! reveals, and pinned chapters.

mod error;
mod presentation;
mod progress;
mod smooth;

pub use crate::error::{ScrollError, ScrollErrorExt};
pub use crate::presentation::{PinnedChapter, WordReveal, WordTransform, parallax_offset};
pub use crate::progress::{SectionTracker, section_progress};
pub use crate::smooth::SmoothScroll;
