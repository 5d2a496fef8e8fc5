//! Writing carousel section: a horizontal track of writing cards with the
//! active card centered. Selection, retry-centering, the programmatic
//! scroll window, and the settle debounce all live in the carousel core;
//! this component owns the timers and the measurements.

use super::measure;
use crate::app::AppState;
use crate::events::{ActiveCardChanged, TeaseScroll};
use arkiv::carousel::{CardTransform, CenterAction, card_transform};
use arkiv::domain::sample;
use arkiv::domain::writing::Writing;
use arkiv::events::EventReceiverExt;
use arkiv::kernel::geometry::Rect;
use arkiv::kernel::measure::{StaticMeasurer, TrackMeasurer};
use dioxus::prelude::*;
use std::time::Duration;
use tracing::{debug, trace};

/// Mount-time measurements shifted by the track's virtual scroll.
///
/// The track and its cards are measured once, at scroll position zero;
/// the current scroll offset moves every card rectangle left by the same
/// amount, which is exactly what the cores need for centering math.
#[derive(Debug, Clone)]
struct TrackView {
    base: StaticMeasurer,
    scroll_left: f64,
}

impl TrackMeasurer for TrackView {
    fn track(&self) -> Option<Rect> {
        self.base.track
    }

    fn card(&self, index: usize) -> Option<Rect> {
        self.base
            .card(index)
            .map(|r| Rect::new(r.left - self.scroll_left, r.top, r.width, r.height))
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }
}

#[component]
pub fn WritingCarousel() -> Element {
    let state = use_context::<AppState>();
    let writings = use_hook(sample::writings);
    let count = writings.len();

    let base = use_signal(|| StaticMeasurer {
        track: None,
        cards: vec![None; count],
        scroll_left: 0.0,
    });
    let scroll_left = use_signal(|| 0.0f64);
    let mut active = use_signal(|| 0usize);
    let settle_task: Signal<Option<Task>> = use_signal(|| None);
    let unlock_task: Signal<Option<Task>> = use_signal(|| None);

    // Wheel deltas captured by the tease arrive over the bus and move the
    // track like a user scroll would.
    use_hook({
        let state = state.clone();
        move || {
            if let Ok(mut rx) = state.bus.subscribe::<TeaseScroll>() {
                spawn({
                    let state = state.clone();
                    async move {
                        while let Some(event) = rx.recv().await {
                            let mut track = scroll_left;
                            let shifted = (*track.peek() + event.0).max(0.0);
                            track.set(shifted);
                            let delay = state.motion.write().carousel.on_scroll();
                            if let Some(delay) = delay {
                                schedule_settle(
                                    state.clone(),
                                    delay,
                                    base,
                                    scroll_left,
                                    active,
                                    settle_task,
                                );
                            }
                        }
                    }
                });
            }
        }
    });

    let select = {
        let state = state.clone();
        move |index: isize| {
            let measurer = TrackView { base: base.peek().clone(), scroll_left: *scroll_left.peek() };
            let (chosen, result) = {
                let mut motion = state.motion.write();
                let result = motion.carousel.select(index, &measurer);
                (motion.carousel.active_index(), result)
            };
            match result {
                Ok(Some(action)) => {
                    active.set(chosen);
                    if state.bus.publish_watch(ActiveCardChanged(chosen)).is_err() {
                        trace!("Active card update dropped, bus is closed");
                    }
                    apply_action(state.clone(), action, base, scroll_left, unlock_task);
                },
                Ok(None) => {},
                Err(err) => debug!(%err, "Card selection failed"),
            }
        }
    };

    let can_go_previous = state.motion.read().carousel.can_go_previous();
    let can_go_next = state.motion.read().carousel.can_go_next();
    let current = *active.read();
    let track_shift = -*scroll_left.read();

    rsx! {
        section {
            onmounted: {
                let state = state.clone();
                move |evt: Event<MountedData>| {
                    let state = state.clone();
                    async move {
                        if let Some(rect) = measure(&evt.data()).await {
                            state.motion.write().update_writing_section(rect);
                        }
                    }
                }
            },
            style: "position: relative; padding: 6rem 0; overflow: hidden;",
            h2 {
                style: "text-align: center; font-size: 0.9rem; letter-spacing: 0.3em; \
                        text-transform: uppercase; color: #a3a3a3; margin-bottom: 3rem;",
                "Writing"
            }
            div {
                onmounted: move |evt: Event<MountedData>| async move {
                    if let Some(rect) = measure(&evt.data()).await {
                        let mut base = base;
                        base.write().track = Some(rect);
                    }
                },
                style: "position: relative; height: 340px; perspective: 1000px; \
                        display: flex; align-items: center; justify-content: center;",
                div {
                    style: "position: absolute; display: flex; gap: 2rem; \
                            transform-style: preserve-3d; \
                            transform: translateX({track_shift:.2}px); \
                            transition: transform 0.6s cubic-bezier(0.25, 0.1, 0.25, 1);",
                    for (index, writing) in writings.iter().enumerate() {
                        article {
                            key: "{writing.slug}",
                            onmounted: move |evt: Event<MountedData>| async move {
                                if let Some(rect) = measure(&evt.data()).await {
                                    let mut base = base;
                                    if let Some(slot) = base.write().cards.get_mut(index) {
                                        *slot = Some(rect);
                                    }
                                }
                            },
                            onclick: {
                                let mut select = select.clone();
                                move |_| select(index.cast_signed())
                            },
                            style: card_style(&card_transform(
                                index.cast_signed() - current.cast_signed(),
                                &state.motion.read().motion.carousel,
                            )),
                            if let Some(thumbnail) = writing.thumbnail_url.as_deref() {
                                img {
                                    src: "{thumbnail}",
                                    alt: "{writing.title}",
                                    style: "width: 100%; height: 150px; object-fit: cover; \
                                            border-radius: 0.5rem 0.5rem 0 0;",
                                }
                            } else {
                                div {
                                    style: "width: 100%; height: 150px; background: #262626; \
                                            border-radius: 0.5rem 0.5rem 0 0;",
                                }
                            }
                            div {
                                style: "padding: 1rem;",
                                span {
                                    style: "font-size: 0.7rem; letter-spacing: 0.2em; \
                                            text-transform: uppercase; color: #a3a3a3;",
                                    {kind_line(writing)}
                                }
                                h3 {
                                    style: "margin: 0.5rem 0; font-size: 1.1rem;",
                                    "{writing.title}"
                                }
                                p {
                                    style: "font-size: 0.85rem; color: #d4d4d4; margin: 0;",
                                    "{writing.summary}"
                                }
                                span {
                                    style: "display: block; margin-top: 0.75rem; \
                                            font-size: 0.75rem; color: #737373;",
                                    {meta_line(writing)}
                                }
                            }
                        }
                    }
                }
            }
            div {
                style: "display: flex; justify-content: center; gap: 1rem; margin-top: 2rem;",
                button {
                    disabled: !can_go_previous,
                    onclick: {
                        let mut select = select.clone();
                        move |_| select(current.cast_signed() - 1)
                    },
                    "Previous"
                }
                button {
                    disabled: !can_go_next,
                    onclick: {
                        let mut select = select.clone();
                        move |_| select(current.cast_signed() + 1)
                    },
                    "Next"
                }
            }
        }
    }
}

/// Runs one centering action: either scroll the track now, or wait for the
/// card to become measurable and ask the core again. The core owns the
/// retry budget, so the loop here always terminates.
fn apply_action(
    state: AppState,
    action: CenterAction,
    base: Signal<StaticMeasurer>,
    mut scroll_left: Signal<f64>,
    unlock_task: Signal<Option<Task>>,
) {
    match action {
        CenterAction::Scroll(cmd) => {
            scroll_left.set(cmd.left.max(0.0));
            schedule_unlock(state, unlock_task);
        },
        CenterAction::RetryAfter { delay_ms } => {
            spawn(async move {
                let mut delay = delay_ms;
                loop {
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    let measurer =
                        TrackView { base: base.peek().clone(), scroll_left: *scroll_left.peek() };
                    let attempt = state.motion.write().carousel.retry_center(&measurer);
                    match attempt {
                        Ok(CenterAction::Scroll(cmd)) => {
                            scroll_left.set(cmd.left.max(0.0));
                            schedule_unlock(state, unlock_task);
                            break;
                        },
                        Ok(CenterAction::RetryAfter { delay_ms }) => delay = delay_ms,
                        Err(err) => {
                            debug!(%err, "Centering abandoned");
                            break;
                        },
                    }
                }
            });
        },
    }
}

/// Ends the programmatic scroll window once the scroll animation has had
/// time to finish. Re-selecting restarts the window.
fn schedule_unlock(state: AppState, mut unlock_task: Signal<Option<Task>>) {
    let timeout = state.motion.read().carousel.programmatic_timeout_ms();
    if let Some(task) = unlock_task.write().take() {
        task.cancel();
    }
    let task = spawn(async move {
        tokio::time::sleep(Duration::from_millis(timeout)).await;
        state.motion.write().carousel.end_programmatic_scroll();
    });
    unlock_task.set(Some(task));
}

/// Debounced settle after user-driven scrolling: the nearest card becomes
/// active without triggering another programmatic scroll.
fn schedule_settle(
    state: AppState,
    delay_ms: u64,
    base: Signal<StaticMeasurer>,
    scroll_left: Signal<f64>,
    mut active: Signal<usize>,
    mut settle_task: Signal<Option<Task>>,
) {
    if let Some(task) = settle_task.write().take() {
        task.cancel();
    }
    let task = spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        let measurer = TrackView { base: base.peek().clone(), scroll_left: *scroll_left.peek() };
        if let Some(index) = state.motion.write().carousel.settle(&measurer) {
            active.set(index);
            if state.bus.publish_watch(ActiveCardChanged(index)).is_err() {
                trace!("Active card update dropped, bus is closed");
            }
        }
    });
    settle_task.set(Some(task));
}

/// The card's register line; the separator only appears when the optional
/// category exists.
fn kind_line(writing: &Writing) -> String {
    match writing.category.as_deref() {
        Some(category) => format!("{} · {category}", writing.kind),
        None => writing.kind.to_string(),
    }
}

/// Publication date plus an optional read time.
fn meta_line(writing: &Writing) -> String {
    match writing.read_time.as_deref() {
        Some(read_time) => format!("{} · {read_time}", writing.published_label()),
        None => writing.published_label(),
    }
}

/// CSS for one card given its distance-derived transform.
fn card_style(transform: &CardTransform) -> String {
    format!(
        "flex: 0 0 260px; background: #171717; border-radius: 0.5rem; \
         cursor: pointer; transform-style: preserve-3d; \
         transition: transform 0.4s ease, opacity 0.4s ease; \
         transform: translateZ({depth:.1}px) rotateY({rotation:.1}deg) scale({scale:.3}); \
         opacity: {opacity:.3}; z-index: {z};",
        depth = transform.depth,
        rotation = transform.rotation,
        scale = transform.scale,
        opacity = transform.opacity,
        z = transform.z_index,
    )
}

#[cfg(test)]
mod tests {
    use super::{kind_line, meta_line};
    use arkiv::domain::sample;

    #[test]
    fn card_lines_skip_absent_optionals() {
        let writings = sample::writings();
        assert_eq!(kind_line(&writings[0]), "article");
        assert_eq!(meta_line(&writings[0]), "Mar 15, 2024");
    }

    #[test]
    fn card_lines_join_present_optionals() {
        let mut writing = sample::writings().remove(0);
        writing.category = Some("essays".to_owned());
        writing.read_time = Some("6 min".to_owned());
        assert_eq!(kind_line(&writing), "article · essays");
        assert_eq!(meta_line(&writing), "Mar 15, 2024 · 6 min");
    }
}
