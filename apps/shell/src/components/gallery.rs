//! Rotating gallery section: renders the cylinder placements as CSS 3D
//! transforms and forwards pointer input to the gallery core. The hovered
//! artifact feeds the overlay label.

use super::{measure, use_motion_snapshot};
use crate::app::AppState;
use crate::events::ArtifactHovered;
use arkiv::domain::artifact::Artifact;
use arkiv::domain::sample;
use arkiv::gallery::CardPlacement;
use dioxus::prelude::*;
use tracing::trace;

/// Pixels per scene unit when projecting the cylinder into CSS space.
const SCENE_SCALE: f64 = 60.0;

#[component]
pub fn GallerySection() -> Element {
    let state = use_context::<AppState>();
    let artifacts = use_hook(sample::artifacts);
    let snapshot = use_motion_snapshot();
    let mut hovered: Signal<Option<String>> = use_signal(|| None);

    let rotation = snapshot.read().gallery_rotation;
    let placements: Vec<CardPlacement> =
        state.motion.read().gallery.placements().to_vec();

    let set_hover = {
        let state = state.clone();
        let artifacts = artifacts.clone();
        move |index: Option<usize>| {
            state.motion.write().gallery.hover(index);
            let label = index.and_then(|i| artifacts.get(i)).map(Artifact::overlay_label);
            hovered.set(label.clone());
            if state.bus.publish_watch(ArtifactHovered(label)).is_err() {
                trace!("Hover dropped, bus is closed");
            }
        }
    };

    rsx! {
        section {
            onmounted: {
                let state = state.clone();
                move |evt: Event<MountedData>| {
                    let state = state.clone();
                    async move {
                        if let Some(rect) = measure(&evt.data()).await {
                            state.motion.write().update_gallery_section(rect);
                        }
                    }
                }
            },
            style: "position: relative; height: 120vh; overflow: hidden; \
                    display: flex; align-items: center; justify-content: center;",
            div {
                style: "position: absolute; inset: 0; perspective: 1200px; cursor: grab;",
                onpointerdown: {
                    let state = state.clone();
                    move |evt: Event<PointerData>| {
                        state.motion.write().gallery.pointer_down(evt.client_coordinates().x);
                    }
                },
                onpointermove: {
                    let state = state.clone();
                    move |evt: Event<PointerData>| {
                        state.motion.write().gallery.pointer_move(evt.client_coordinates().x);
                    }
                },
                onpointerup: {
                    let state = state.clone();
                    move |_| state.motion.write().gallery.pointer_up()
                },
                onpointerleave: {
                    let state = state.clone();
                    move |_| state.motion.write().gallery.pointer_up()
                },
                div {
                    style: "position: absolute; left: 50%; top: 50%; \
                            transform-style: preserve-3d;",
                    for (index, artifact) in artifacts.iter().enumerate() {
                        if let Some(placement) = placements.get(index) {
                            div {
                                key: "{artifact.id}",
                                style: card_style(placement, rotation),
                                onmouseenter: {
                                    let mut set_hover = set_hover.clone();
                                    move |_| set_hover(Some(index))
                                },
                                onmouseleave: {
                                    let mut set_hover = set_hover.clone();
                                    move |_| set_hover(None)
                                },
                                img {
                                    src: "{artifact.image_url}",
                                    alt: "{artifact.title}",
                                    draggable: false,
                                    style: "width: 100%; height: 100%; object-fit: cover; \
                                            border-radius: 0.5rem;",
                                }
                            }
                        }
                    }
                }
            }
            if let Some(label) = hovered.read().as_deref() {
                span {
                    style: "position: absolute; bottom: 3rem; z-index: 2; \
                            font-size: 0.9rem; text-transform: uppercase; \
                            letter-spacing: 0.3em; color: #e5e5e5; pointer-events: none;",
                    "{label}"
                }
            }
        }
    }
}

/// CSS transform for one card given the cylinder's current rotation.
fn card_style(placement: &CardPlacement, rotation: f64) -> String {
    let (sin, cos) = rotation.sin_cos();
    let p = placement.position;
    // Rotate the placement around the vertical axis, then face the center.
    let x = p.z.mul_add(sin, p.x * cos) * SCENE_SCALE;
    let z = p.z.mul_add(cos, -p.x * sin) * SCENE_SCALE;
    let y = -p.y * SCENE_SCALE;
    let yaw = -(placement.rotation_y + rotation);

    format!(
        "position: absolute; width: 160px; height: 200px; margin: -100px 0 0 -80px; \
         background: #171717; \
         transform: translate3d({x:.2}px, {y:.2}px, {z:.2}px) rotateY({yaw:.4}rad);"
    )
}
