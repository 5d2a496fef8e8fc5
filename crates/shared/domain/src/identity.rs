use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The person behind the archive.
///
/// `links` maps a platform name (e.g. `instagram`, `substack`) to a URL;
/// a `BTreeMap` keeps render order stable.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityProfile {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub location: Option<String>,
    pub links: BTreeMap<String, String>,
    pub roles: Vec<String>,
}
