//! Hardcoded archive content. The page has no backend; these builders are
//! the whole data source.

use crate::artifact::{Artifact, ArtifactKind};
use crate::experience::Experience;
use crate::identity::IdentityProfile;
use crate::photo::{Photo, PhotoCategory, PhotoLibrary};
use crate::writing::{Writing, WritingKind};
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[must_use]
pub fn identity_profile() -> IdentityProfile {
    let links = BTreeMap::from([
        ("instagram".to_owned(), "https://www.instagram.com/tairruh/".to_owned()),
        ("linkedin".to_owned(), "https://www.linkedin.com/in/tarayang/".to_owned()),
        ("spotify".to_owned(), "https://open.spotify.com/user/tairruh".to_owned()),
        ("substack".to_owned(), "https://substack.com/@tairruh".to_owned()),
    ]);

    IdentityProfile {
        name: "Tara Yang".to_owned(),
        tagline: "Building slowly, thinking deeply".to_owned(),
        bio: "A collection of moments, thoughts, and visual fragments. This is a \
              living archive, not a feed. Western University."
            .to_owned(),
        location: Some("Calgary, AB and London, Ontario".to_owned()),
        links,
        roles: vec!["Senior Culture Editor".to_owned(), "Business Dev Intern".to_owned()],
    }
}

#[must_use]
pub fn photo_library() -> PhotoLibrary {
    let photo = |id: &str, title: &str, taken: NaiveDate, tags: &[&str], category| Photo {
        id: id.to_owned(),
        title: Some(title.to_owned()),
        url: "/sample-photos/study.jpg".to_owned(),
        thumbnail_url: "/sample-photos/study.jpg".to_owned(),
        taken_at: Some(taken),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
        category: Some(category),
    };

    PhotoLibrary::new(vec![
        photo("1", "Morning Light", date(2024, 1, 15), &["minimal", "interior"], PhotoCategory::Everyday),
        photo("2", "City Streets", date(2024, 2, 20), &["urban", "street"], PhotoCategory::Travel),
        photo("3", "Portrait Study", date(2024, 3, 10), &["portrait", "bw"], PhotoCategory::Portrait),
        photo("4", "Abstract", date(2024, 3, 25), &["abstract", "experimental"], PhotoCategory::Experimental),
    ])
}

#[must_use]
pub fn writings() -> Vec<Writing> {
    let writing = |slug: &str, title: &str, summary: &str, published: NaiveDate, kind| Writing {
        slug: slug.to_owned(),
        title: title.to_owned(),
        summary: summary.to_owned(),
        published_at: published,
        kind,
        url: None,
        thumbnail_url: None,
        category: None,
        read_time: None,
    };

    vec![
        writing(
            "on-slowness",
            "On Slowness",
            "A reflection on building things that take time, and the value of \
             inconsistent progress.",
            date(2024, 3, 15),
            WritingKind::Article,
        ),
        writing(
            "visual-notes-march",
            "Visual Notes: March",
            "Fragments from the month: sketches, thoughts, things that caught \
             my attention.",
            date(2024, 3, 28),
            WritingKind::Blog,
        ),
        writing(
            "reading-list",
            "Reading List",
            "Books and essays that shaped how I think about identity, memory, \
             and digital archives.",
            date(2024, 4, 1),
            WritingKind::Note,
        ),
    ]
}

#[must_use]
pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_owned(),
            organization: "The Western Gazette".to_owned(),
            role: "Senior Culture Editor".to_owned(),
            start: date(2024, 9, 1),
            end: None,
            summary: vec![
                "Lead editorial coverage of arts, culture, and student life".to_owned(),
                "Manage a team of writers and coordinate weekly culture section".to_owned(),
            ],
            location: Some("London, Ontario".to_owned()),
        },
        Experience {
            id: "2".to_owned(),
            organization: "Reya Health".to_owned(),
            role: "Business Development Intern".to_owned(),
            start: date(2024, 5, 1),
            end: Some(date(2024, 8, 1)),
            summary: vec![
                "Supported strategic partnerships and market research initiatives".to_owned(),
                "Assisted with client outreach and business development processes".to_owned(),
            ],
            location: Some("Remote".to_owned()),
        },
        Experience {
            id: "3".to_owned(),
            organization: "Nanyang Technological University".to_owned(),
            role: "Research Assistant".to_owned(),
            start: date(2024, 1, 1),
            end: Some(date(2024, 4, 1)),
            summary: vec![
                "Conducted qualitative research and data analysis".to_owned(),
                "Contributed to academic publications and presentations".to_owned(),
            ],
            location: Some("Singapore".to_owned()),
        },
    ]
}

/// Eight cards, two full rings on the gallery cylinder.
#[must_use]
pub fn artifacts() -> Vec<Artifact> {
    let artifact = |id: &str, title: &str, kind, label: Option<&str>, count: Option<u32>| Artifact {
        id: id.to_owned(),
        title: title.to_owned(),
        kind,
        image_url: "/sample-photos/study.jpg".to_owned(),
        label: label.map(str::to_owned),
        count,
    };

    vec![
        artifact("1", "Tokyo Diary", ArtifactKind::Photo, Some("TOKYO"), Some(12)),
        artifact("2", "Vietnam Notes", ArtifactKind::Photo, Some("VIETNAM"), Some(8)),
        artifact("3", "On Slowness", ArtifactKind::Article, None, None),
        artifact("4", "Archive Build Log", ArtifactKind::Project, Some("ARCHIVE"), None),
        artifact("5", "Street Portraits", ArtifactKind::Photo, Some("PORTRAITS"), Some(5)),
        artifact("6", "Reading List", ArtifactKind::Article, None, None),
        artifact("7", "Calgary Winter", ArtifactKind::Photo, Some("CALGARY"), Some(9)),
        artifact("8", "Gazette Culture Desk", ArtifactKind::Project, Some("GAZETTE"), None),
    ]
}
