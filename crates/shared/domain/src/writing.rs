use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editorial register of a writing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingKind {
    Article,
    Blog,
    Note,
    Culture,
}

impl fmt::Display for WritingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Article => "article",
            Self::Blog => "blog",
            Self::Note => "note",
            Self::Culture => "culture",
        };
        f.write_str(label)
    }
}

/// A published piece shown in the writing carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Writing {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub published_at: NaiveDate,
    #[serde(rename = "type")]
    pub kind: WritingKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub read_time: Option<String>,
}

impl Writing {
    /// Human-readable publication date, e.g. "Mar 15, 2024".
    #[must_use]
    pub fn published_label(&self) -> String {
        self.published_at.format("%b %-d, %Y").to_string()
    }
}
