//! Frame-tick driver for animation state updates.
//!
//! The interaction cores are pure `(state, dt) -> state` machines; something
//! still has to call them at a steady cadence. [`FrameTicker`] owns that
//! cadence: it spawns a timer task that invokes a callback with the elapsed
//! time per tick, and the returned [`FrameHandle`] cancels the task when the
//! owning view is torn down or a new loop supersedes an old one.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::trace;

/// Default tick period, roughly a 60 Hz display.
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Spawns and owns per-frame update tasks.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    period: Duration,
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self { period: DEFAULT_FRAME_PERIOD }
    }
}

impl FrameTicker {
    /// Creates a ticker with a custom tick period.
    #[must_use]
    pub const fn with_period(period: Duration) -> Self {
        Self { period }
    }

    /// Spawns a frame loop that calls `on_frame` with the elapsed seconds
    /// since the previous tick.
    ///
    /// The loop runs until the returned handle is dropped or canceled. Ticks
    /// are delta-scaled rather than assumed fixed: a stalled frame produces a
    /// proportionally larger `dt` on the next tick.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, mut on_frame: F) -> FrameHandle
    where
        F: FnMut(f64) + Send + 'static,
    {
        let period = self.period;
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            // Skipping is the right recovery for an animation loop: the next
            // dt covers the missed time.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut last = Instant::now();
            loop {
                ticker.tick().await;
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f64();
                last = now;
                on_frame(dt);
            }
        });
        FrameHandle { task: Some(task) }
    }
}

/// Cancellation handle for a running frame loop.
///
/// Dropping the handle aborts the loop, so storing it in the owning view's
/// state is enough to guarantee no tick outlives the view.
#[derive(Debug)]
pub struct FrameHandle {
    task: Option<JoinHandle<()>>,
}

impl FrameHandle {
    /// Stops the frame loop immediately.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            trace!("Frame loop canceled");
            task.abort();
        }
    }

    /// Whether the loop is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn frame_loop_ticks_and_reports_delta() {
        let ticks = Arc::new(AtomicU32::new(0));
        let seen = ticks.clone();

        let ticker = FrameTicker::with_period(Duration::from_millis(5));
        let _handle = ticker.spawn(move |dt| {
            assert!(dt >= 0.0);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(ticks.load(Ordering::SeqCst) >= 2, "expected at least two ticks");
    }

    #[tokio::test]
    async fn dropping_the_handle_stops_the_loop() {
        let ticks = Arc::new(AtomicU32::new(0));
        let seen = ticks.clone();

        let ticker = FrameTicker::with_period(Duration::from_millis(5));
        let handle = ticker.spawn(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(handle);
        let after_drop = ticks.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), after_drop, "loop must not tick after drop");
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let ticker = FrameTicker::default();
        let mut handle = ticker.spawn(|_| {});
        handle.cancel();
        handle.cancel();
        assert!(!handle.is_active());
    }
}
