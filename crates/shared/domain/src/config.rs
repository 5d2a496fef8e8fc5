use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level motion tuning shared across the interaction cores.
///
/// Every constant the cores consume lives here so the whole feel of the
/// page can be adjusted from one place (file or `ARKIV__` environment
/// overrides). Defaults match the shipped page.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotionConfigInner {
    pub gallery: GalleryMotion,
    pub carousel: CarouselMotion,
    pub scroll: ScrollMotion,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct MotionConfig {
    #[serde(flatten, default)]
    inner: Arc<MotionConfigInner>,
}

impl Deref for MotionConfig {
    type Target = MotionConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for MotionConfig {
    fn deref_mut(&mut self) -> &mut MotionConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Rotating gallery tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryMotion {
    /// Cylinder radius the cards sit on.
    pub radius: f64,
    /// Cards per ring.
    pub ring_size: usize,
    /// Vertical distance between ring centers.
    pub ring_spacing: f64,
    /// Idle rotation in radians per second.
    pub angular_speed: f64,
    /// Extra rotation (radians) applied across the full scroll range.
    pub scroll_rotation_range: f64,
    /// Per-frame interpolation factor toward the rotation target.
    pub smoothing: f64,
    /// Radians of rotation per pixel of horizontal drag.
    pub drag_sensitivity: f64,
    /// Velocity multiplier per inertia frame, below 1.
    pub damping: f64,
    /// Inertia stops once |velocity| falls below this.
    pub velocity_epsilon: f64,
}

/// Writing carousel tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselMotion {
    /// Card rotation in degrees per step of distance from the active card.
    pub degrees_per_step: f64,
    /// Scale lost per step of distance.
    pub shrink_per_step: f64,
    pub min_scale: f64,
    /// Depth pushed back per step of distance, in pixels.
    pub depth_per_step: f64,
    /// Opacity lost per step of distance.
    pub fade_per_step: f64,
    pub min_opacity: f64,
    /// Stacking order of the active card; neighbors stack below it.
    pub base_z: i32,
    /// Quiet period before a free scroll is considered settled.
    pub settle_debounce_ms: u64,
    /// How long a programmatic centering scroll suppresses settle handling.
    pub programmatic_timeout_ms: u64,
    /// Delay before re-trying to center a card that is not yet measurable.
    pub center_retry_delay_ms: u64,
    /// Give up centering after this many failed measurements.
    pub center_retry_limit: u32,
    /// Cumulative wheel distance (px) consumed by the one-time tease.
    pub tease_distance: f64,
    /// Minimum visible fraction of the section for the tease to engage.
    pub in_view_threshold: f64,
}

/// Smooth-scroll controller tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollMotion {
    /// Nominal animation duration in seconds.
    pub duration: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

// --- Default ---

impl Default for GalleryMotion {
    fn default() -> Self {
        Self {
            radius: 5.0,
            ring_size: 4,
            ring_spacing: 1.6,
            angular_speed: 0.1,
            scroll_rotation_range: 2.0,
            smoothing: 0.05,
            drag_sensitivity: 0.005,
            damping: 0.95,
            velocity_epsilon: 0.001,
        }
    }
}

impl Default for CarouselMotion {
    fn default() -> Self {
        Self {
            degrees_per_step: 12.0,
            shrink_per_step: 0.15,
            min_scale: 0.7,
            depth_per_step: 80.0,
            fade_per_step: 0.3,
            min_opacity: 0.4,
            base_z: 10,
            settle_debounce_ms: 100,
            programmatic_timeout_ms: 600,
            center_retry_delay_ms: 50,
            center_retry_limit: 8,
            tease_distance: 400.0,
            in_view_threshold: 0.6,
        }
    }
}

impl Default for ScrollMotion {
    fn default() -> Self {
        Self { duration: 1.2, wheel_multiplier: 1.0, touch_multiplier: 2.0 }
    }
}
