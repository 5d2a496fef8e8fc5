//! # Smooth Scroll Controller
//!
//! Owns the page's virtual scroll offset and eases it toward a target over a
//! fixed duration, the way a smooth-scroll library would. The controller is
//! pure state: the shell feeds it wheel deltas and frame ticks and applies
//! the returned offset.

use crate::error::ScrollError;
use arkiv_kernel::domain::config::ScrollMotion;

/// Exponential ease-out used for every scroll animation.
fn ease(t: f64) -> f64 {
    (1.001 - 2.0_f64.powf(-10.0 * t)).min(1.0)
}

/// Eased virtual scroll offset with wheel and touch input scaling.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    duration: f64,
    wheel_multiplier: f64,
    touch_multiplier: f64,
    current: f64,
    from: f64,
    target: f64,
    elapsed: f64,
    animating: bool,
}

impl SmoothScroll {
    /// Creates a controller from the scroll tuning section.
    ///
    /// # Errors
    /// [`ScrollError::InvalidTuning`] when the configured duration is not
    /// strictly positive.
    pub fn new(motion: &ScrollMotion) -> Result<Self, ScrollError> {
        if motion.duration <= 0.0 {
            return Err(ScrollError::InvalidTuning {
                message: format!("Scroll duration must be positive, got {}", motion.duration)
                    .into(),
                context: None,
            });
        }

        Ok(Self {
            duration: motion.duration,
            wheel_multiplier: motion.wheel_multiplier,
            touch_multiplier: motion.touch_multiplier,
            current: 0.0,
            from: 0.0,
            target: 0.0,
            elapsed: 0.0,
            animating: false,
        })
    }

    /// Starts easing toward an absolute offset. A new target supersedes any
    /// animation in flight, starting from the current offset.
    pub fn scroll_to(&mut self, target: f64) {
        self.from = self.current;
        self.target = target.max(0.0);
        self.elapsed = 0.0;
        self.animating = true;
    }

    /// Accumulates a wheel delta into the target.
    pub fn wheel(&mut self, delta: f64) {
        let target = delta.mul_add(self.wheel_multiplier, self.target);
        self.scroll_to(target);
    }

    /// Accumulates a touch-drag delta into the target.
    pub fn touch(&mut self, delta: f64) {
        let target = delta.mul_add(self.touch_multiplier, self.target);
        self.scroll_to(target);
    }

    /// Advances the animation by `dt` seconds and returns the new offset.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.animating {
            self.elapsed += dt.max(0.0);
            let t = (self.elapsed / self.duration).min(1.0);
            self.current = (self.target - self.from).mul_add(ease(t), self.from);

            if t >= 1.0 {
                self.current = self.target;
                self.animating = false;
            }
        }

        self.current
    }

    /// Stops the animation at the current offset.
    pub fn cancel(&mut self) {
        self.target = self.current;
        self.animating = false;
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animating
    }
}
