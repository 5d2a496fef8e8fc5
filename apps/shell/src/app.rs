//! Window bootstrap and the root component: owns the frame driver, the
//! event bus, and the page-level wheel routing. Everything below it is a
//! section component bound to the motion snapshot.

use crate::components::{
    AboutStrip, ExperienceTimeline, Footer, GallerySection, Hero, Navbar, PhotoGrid,
    PinnedChapterSection, WritingCarousel, use_motion_snapshot,
};
use crate::events::{ScrollProgressChanged, TeaseScroll};
use crate::state::SharedMotion;
use arkiv::events::EventBus;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// Context handed to every component at launch.
#[derive(Debug, Clone)]
pub struct AppState {
    pub motion: SharedMotion,
    pub bus: EventBus,
}

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: "Arkiv".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The entry point for launching the app
    pub fn launch(self, root: fn() -> Element, state: AppState) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(state.clone()))
            .launch(root);
    }
}

/// Root of the page. Owns the frame loop and the smooth-scroll offset;
/// tearing this component down cancels the loop and closes the bus.
#[component]
pub fn App() -> Element {
    let state = use_context::<AppState>();

    // One frame loop for the whole page. The ticker task lives on the
    // global runtime; the handle aborts it when the root unmounts.
    let frame = use_hook(|| {
        let motion = state.motion.clone();
        let bus = state.bus.clone();
        let runtime = arkiv_runtime::get_global_runtime();
        let _guard = runtime.enter();
        Rc::new(RefCell::new(arkiv_runtime::FrameTicker::default().spawn(move |dt| {
            let snapshot = motion.write().frame(dt);
            if bus.publish_watch(ScrollProgressChanged(snapshot)).is_err() {
                trace!("Frame snapshot dropped, bus is closed");
            }
        })))
    });

    use_drop({
        let state = state.clone();
        move || {
            frame.borrow_mut().cancel();
            let closed = state.bus.shutdown();
            debug!(channels = closed, "Page torn down");
        }
    });

    let snapshot = use_motion_snapshot();
    let offset = snapshot.read().offset;

    rsx! {
        div {
            style: "height: 100vh; overflow: hidden; background: #0a0a0a; color: #e5e5e5; \
                    font-family: Georgia, serif;",
            onwheel: {
                let state = state.clone();
                move |evt| {
                    let delta = wheel_delta_y(&evt);
                    let captured = state.motion.write().wheel(delta);
                    if let Some(horizontal) = captured {
                        if state.bus.publish(TeaseScroll(horizontal)).is_err() {
                            trace!("Tease delta dropped, bus is closed");
                        }
                    }
                }
            },
            onresize: move |evt| {
                if let Ok(size) = evt.get_border_box_size() {
                    state.motion.write().set_viewport_height(size.height);
                }
            },
            Navbar {}
            div {
                style: "transform: translateY(-{offset}px); will-change: transform;",
                Hero {}
                AboutStrip {}
                PinnedChapterSection {}
                PhotoGrid {}
                GallerySection {}
                WritingCarousel {}
                ExperienceTimeline {}
                Footer {}
            }
        }
    }
}

/// Normalizes the wheel delta to pixels.
fn wheel_delta_y(evt: &Event<WheelData>) -> f64 {
    match evt.delta() {
        WheelDelta::Pixels(v) => v.y,
        WheelDelta::Lines(v) => v.y * 16.0,
        WheelDelta::Pages(v) => v.y * 800.0,
    }
}
