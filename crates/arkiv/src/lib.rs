//! Facade crate for the Arkiv interaction cores and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement
//! page logic.
//!
//! ## Usage
//! - Add `arkiv` and pull the slices through it (`arkiv::gallery`,
//!   `arkiv::carousel`, `arkiv::scroll`).
//! - Load the motion tuning via `arkiv::kernel::config::load_config`.

pub use arkiv_carousel as carousel;
pub use arkiv_domain as domain;
pub use arkiv_event_bus as events;
pub use arkiv_gallery as gallery;
pub use arkiv_kernel as kernel;
pub use arkiv_scroll as scroll;

/// Feature registry for runtime introspection.
pub mod features {
    /// Compiled-in interaction slices.
    pub const ENABLED: &[&str] = &["gallery", "carousel", "scroll"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn slices_are_registered() {
        assert!(features::is_enabled("gallery"));
        assert!(features::is_enabled("carousel"));
        assert!(features::is_enabled("scroll"));
        assert!(!features::is_enabled("licensing"));
    }
}
