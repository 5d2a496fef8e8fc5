//! Pinned chapter: the section holds at the viewport top while its heading
//! scrubs in with the pin progress.

use super::{measure, use_motion_snapshot};
use crate::app::AppState;
use arkiv::scroll::parallax_offset;
use dioxus::prelude::*;

const PIN_DURATION_FACTOR: f64 = 1.5;

#[component]
pub fn PinnedChapterSection() -> Element {
    let state = use_context::<AppState>();
    let snapshot = use_motion_snapshot();

    let progress = snapshot.read().chapter_progress;
    let heading_opacity = progress.min(1.0);
    let heading_y = parallax_offset(progress, 30.0, 0.0);
    let block_y = parallax_offset(progress, 0.0, -50.0);

    rsx! {
        section {
            onmounted: move |evt| {
                let state = state.clone();
                async move {
                    if let Some(rect) = measure(&evt.data()).await {
                        state.motion.write().update_chapter(rect, PIN_DURATION_FACTOR);
                    }
                }
            },
            style: "min-height: 150vh; padding: 8rem 2rem; text-align: center;",
            h2 {
                style: "font-size: 2.2rem; opacity: {heading_opacity}; \
                        transform: translateY({heading_y}px);",
                "This space is allowed to be inconsistent"
            }
            p {
                style: "color: #737373; text-transform: uppercase; letter-spacing: 0.25em; \
                        font-size: 0.75rem; opacity: {heading_opacity};",
                "Scroll slowly"
            }
            div {
                style: "max-width: 42rem; margin: 4rem auto 0; padding: 3rem; \
                        border: 1px solid #262626; border-radius: 1.5rem; \
                        background: linear-gradient(to bottom right, #171717, #0a0a0a); \
                        transform: translateY({block_y}px);",
                p {
                    style: "font-size: 1.05rem; line-height: 1.8; color: #d4d4d4; margin: 0;",
                    "This space is allowed to be inconsistent, unfinished, and deeply human. \
                     Scroll slowly."
                }
            }
        }
    }
}
