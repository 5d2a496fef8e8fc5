use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse grouping for the photo diary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoCategory {
    Portrait,
    Travel,
    Everyday,
    Experimental,
}

/// A single photo diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub taken_at: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<PhotoCategory>,
}

/// An ordered, immutable photo collection with simple filtered views.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLibrary {
    photos: Vec<Photo>,
}

impl PhotoLibrary {
    #[must_use]
    pub const fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// Every photo, in archive order.
    #[must_use]
    pub fn all(&self) -> &[Photo] {
        &self.photos
    }

    /// Photos in the given category, preserving archive order.
    pub fn by_category(&self, category: PhotoCategory) -> impl Iterator<Item = &Photo> {
        self.photos.iter().filter(move |photo| photo.category == Some(category))
    }

    /// Photos carrying the given tag, preserving archive order.
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Photo> {
        self.photos.iter().filter(move |photo| photo.tags.iter().any(|t| t == tag))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
