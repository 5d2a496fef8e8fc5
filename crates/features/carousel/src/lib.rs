//! Writing carousel feature slice.
//!
//! A horizontal card track with one active card: selection clamps and
//! centers, free scrolling settles on the nearest card, and each card's
//! visual transform is a pure function of its distance from the active
//! one. Includes the one-time wheel tease that nudges new visitors to
//! scroll the track sideways.

mod carousel;
mod error;
mod tease;
mod transform;

pub use crate::carousel::{Carousel, CarouselPhase, CenterAction, ScrollTo};
pub use crate::error::{CarouselError, CarouselErrorExt};
pub use crate::tease::WheelTease;
pub use crate::transform::{CardTransform, card_transform};
