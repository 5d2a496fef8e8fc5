//! Kernel utilities shared across the interaction cores.
//! Keep this crate lightweight; it provides config loading, layout geometry,
//! and the measurement seam the cores use instead of touching a layout engine.
//!
//! ## Config loading
//! ```rust,ignore
//! use arkiv_kernel::config::load_config;
//! use arkiv_domain::config::MotionConfig;
//!
//! let motion: MotionConfig = load_config(Some("arkiv")).unwrap_or_default();
//! ```

pub mod config;
pub mod geometry;
pub mod measure;

pub use arkiv_domain as domain;
