//! Section anchors shared between the cores and the presentation shell.

pub const ABOUT: &str = "about";
pub const CHAPTER: &str = "chapter";
pub const PHOTOS: &str = "photos";
pub const GALLERY: &str = "gallery";
pub const WRITING: &str = "writing";
pub const EXPERIENCE: &str = "experience";
