use arkiv_domain::photo::PhotoCategory;
use arkiv_domain::sample;

#[test]
fn profile_has_required_fields() {
    let profile = sample::identity_profile();
    assert_eq!(profile.name, "Tara Yang");
    assert!(!profile.tagline.is_empty());
    assert!(profile.links.contains_key("substack"));
}

#[test]
fn photo_library_filters() {
    let library = sample::photo_library();
    assert_eq!(library.len(), 4);
    assert_eq!(library.by_category(PhotoCategory::Travel).count(), 1);

    let tagged: Vec<_> = library.tagged("portrait").collect();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].id, "3");
}

#[test]
fn writings_carry_formatted_dates() {
    let writings = sample::writings();
    assert_eq!(writings.len(), 3);
    assert_eq!(writings[0].slug, "on-slowness");
    assert_eq!(writings[0].published_label(), "Mar 15, 2024");
    assert_eq!(writings[2].published_label(), "Apr 1, 2024");
}

#[test]
fn experience_period_labels() {
    let experiences = sample::experiences();
    assert_eq!(experiences[0].period_label(), "Sep 2024 - Present");
    assert!(experiences[0].is_current());
    assert_eq!(experiences[1].period_label(), "May 2024 - Aug 2024");
}

#[test]
fn artifacts_fill_two_rings() {
    let artifacts = sample::artifacts();
    assert_eq!(artifacts.len(), 8);
    assert_eq!(artifacts[0].overlay_label(), "TOKYO (12)");
    assert_eq!(artifacts[2].overlay_label(), "On Slowness");
}
