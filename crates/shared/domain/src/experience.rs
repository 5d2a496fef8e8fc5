use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in the experience timeline. `end` of `None` means the
/// position is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub organization: String,
    pub role: String,
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    pub summary: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Experience {
    /// Human-readable duration, e.g. "Sep 2024 - Present" or "May 2024 - Aug 2024".
    #[must_use]
    pub fn period_label(&self) -> String {
        let start = self.start.format("%b %Y");
        match self.end {
            Some(end) => format!("{start} - {}", end.format("%b %Y")),
            None => format!("{start} - Present"),
        }
    }

    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.end.is_none()
    }
}
