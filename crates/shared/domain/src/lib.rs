//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `chrono`).
//! Keep it lean: no I/O, networking, or heavy logic. Just data and simple helpers.

pub mod artifact;
pub mod config;
pub mod constants;
pub mod experience;
pub mod identity;
pub mod photo;
pub mod sample;
pub mod writing;
