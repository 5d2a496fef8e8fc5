//! Hero banner: parallax background and a staggered word reveal over the
//! tagline, both driven by the hero section's scroll progress.

use super::{measure, use_motion_snapshot};
use crate::app::AppState;
use arkiv::domain::sample;
use arkiv::scroll::{WordReveal, parallax_offset};
use dioxus::prelude::*;
use std::time::Instant;

#[component]
pub fn Hero() -> Element {
    let state = use_context::<AppState>();
    let profile = use_hook(sample::identity_profile);
    let snapshot = use_motion_snapshot();
    let mut revealed_at: Signal<Option<Instant>> = use_signal(|| None);

    // The hero starts in view, so any progress means the reveal may run.
    // Stamping the clock is a side effect and must stay out of the render
    // body, or every write would schedule another render.
    use_effect(move || {
        let progress = snapshot.read().hero_progress;
        if should_start_reveal(revealed_at.peek().is_none(), progress) {
            revealed_at.set(Some(Instant::now()));
        }
    });

    let progress = snapshot.read().hero_progress;

    let banner_y = parallax_offset(progress, 0.0, -100.0);
    let reveal = WordReveal::default();
    let elapsed = revealed_at.read().map_or(0.0, |t| t.elapsed().as_secs_f64());
    let words: Vec<String> = profile.tagline.split(' ').map(str::to_owned).collect();

    rsx! {
        section {
            onmounted: move |evt| {
                let state = state.clone();
                async move {
                    if let Some(rect) = measure(&evt.data()).await {
                        state.motion.write().update_hero(rect);
                    }
                }
            },
            style: "position: relative; height: 100vh; display: flex; flex-direction: column; \
                    justify-content: center; padding: 0 2rem; overflow: hidden;",
            div {
                style: "position: absolute; inset: -10% 0; z-index: 0; \
                        background: linear-gradient(to bottom, #171717, #0a0a0a); \
                        transform: translateY({banner_y}px);",
            }
            h1 {
                style: "position: relative; z-index: 1; font-size: 3.5rem; margin: 0;",
                "{profile.name}"
            }
            p {
                style: "position: relative; z-index: 1; font-size: 1.5rem; color: #a3a3a3;",
                for (index, word) in words.iter().enumerate() {
                    {
                        let t = reveal.word_transform(elapsed, index);
                        rsx! {
                            span {
                                key: "{index}",
                                style: "display: inline-block; margin-right: 0.35em; \
                                        opacity: {t.opacity}; transform: translateY({t.y}px);",
                                "{word}"
                            }
                        }
                    }
                }
            }
            if let Some(location) = profile.location.as_deref() {
                p {
                    style: "position: relative; z-index: 1; font-size: 0.8rem; \
                            text-transform: uppercase; letter-spacing: 0.2em; color: #737373;",
                    "{location}"
                }
            }
        }
    }
}

/// The reveal clock starts once, on the first frame the hero reports any
/// progress, and never restarts.
const fn should_start_reveal(not_started: bool, progress: f64) -> bool {
    not_started && progress >= 0.0
}

#[cfg(test)]
mod tests {
    use super::should_start_reveal;

    #[test]
    fn reveal_starts_once() {
        assert!(should_start_reveal(true, 0.0));
        assert!(should_start_reveal(true, 0.4));
        assert!(!should_start_reveal(false, 0.4));
    }
}
