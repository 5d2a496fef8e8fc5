//! Section components. Each binds one slice of the motion snapshot to
//! markup; none of them owns interaction logic beyond forwarding events
//! to the cores.

mod about;
mod chapter;
mod experience;
mod footer;
mod gallery;
mod hero;
mod navbar;
mod photos;
mod writing;

pub use about::AboutStrip;
pub use chapter::PinnedChapterSection;
pub use experience::ExperienceTimeline;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use hero::Hero;
pub use navbar::Navbar;
pub use photos::PhotoGrid;
pub use writing::WritingCarousel;

use crate::app::AppState;
use crate::events::ScrollProgressChanged;
use crate::state::MotionSnapshot;
use arkiv::kernel::geometry::Rect;
use dioxus::prelude::*;

/// Subscribes the calling component to the per-frame motion snapshot.
///
/// The subscription task is a component-scoped future, so it is dropped
/// with the component.
pub fn use_motion_snapshot() -> Signal<MotionSnapshot> {
    let state = use_context::<AppState>();
    let mut snapshot = use_signal(MotionSnapshot::default);

    use_hook(move || {
        if let Ok(mut rx) = state.bus.subscribe_watch(ScrollProgressChanged::default()) {
            spawn(async move {
                while rx.changed().await.is_ok() {
                    let latest = rx.borrow_and_update().0;
                    snapshot.set(latest);
                }
            });
        }
    });

    snapshot
}

/// Converts a mounted element's client rectangle into kernel geometry.
pub async fn measure(data: &MountedData) -> Option<Rect> {
    data.get_client_rect()
        .await
        .ok()
        .map(|r| Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height))
}
