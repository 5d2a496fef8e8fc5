use serde::{Deserialize, Serialize};

/// What kind of thing a gallery card represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Photo,
    Article,
    Project,
}

/// A card in the rotating gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub title: String,
    pub kind: ArtifactKind,
    /// Texture for the card face.
    pub image_url: String,
    /// Short overlay label, e.g. "TOKYO".
    #[serde(default)]
    pub label: Option<String>,
    /// Optional number shown in parentheses after the label.
    #[serde(default)]
    pub count: Option<u32>,
}

impl Artifact {
    /// Text for the hover overlay: the short label when present, otherwise
    /// the title, with the count appended in parentheses.
    #[must_use]
    pub fn overlay_label(&self) -> String {
        let base = self.label.as_deref().unwrap_or(&self.title);
        match self.count {
            Some(count) => format!("{base} ({count})"),
            None => base.to_owned(),
        }
    }
}
