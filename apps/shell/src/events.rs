//! Event types carried on the page bus.
//!
//! Watch channels hold the observable values the components bind to;
//! broadcast channels carry discrete notifications.

use crate::state::MotionSnapshot;

/// Latest motion snapshot, published every frame (watch).
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ScrollProgressChanged(pub MotionSnapshot);

/// The carousel's active card changed (watch).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCardChanged(pub usize);

/// The gallery's hovered artifact overlay label, if any (watch).
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHovered(pub Option<String>);

/// Horizontal delta captured by the wheel tease (broadcast).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeaseScroll(pub f64);
