//! Rotating gallery feature slice.
//!
//! Cards on a cylinder, grouped in rings, slowly turning; scroll and drag
//! both feed the rotation, and a flick coasts on inertia. The whole slice
//! is pure state: the shell applies the returned placements and rotation
//! to whatever renders the scene.

mod drag;
mod error;
mod gallery;
mod layout;
mod rotation;

pub use crate::drag::{DragPhase, DragState};
pub use crate::error::{GalleryError, GalleryErrorExt};
pub use crate::gallery::Gallery;
pub use crate::layout::{CardPlacement, layout, ring_count};
pub use crate::rotation::RotationState;
