use arkiv_domain::config::{CarouselMotion, GalleryMotion, MotionConfig, ScrollMotion};
use serde_json::json;

#[test]
fn motion_defaults_are_sane() {
    let gallery = GalleryMotion::default();
    assert_eq!(gallery.ring_size, 4);
    assert!((gallery.radius - 5.0).abs() < f64::EPSILON);
    assert!(gallery.damping < 1.0);
    assert!(gallery.velocity_epsilon > 0.0);

    let carousel = CarouselMotion::default();
    assert!((carousel.degrees_per_step - 12.0).abs() < f64::EPSILON);
    assert!(carousel.min_scale < 1.0);
    assert!(carousel.min_opacity < 1.0);
    assert_eq!(carousel.settle_debounce_ms, 100);
    assert_eq!(carousel.programmatic_timeout_ms, 600);
    assert_eq!(carousel.center_retry_limit, 8);

    let scroll = ScrollMotion::default();
    assert!((scroll.duration - 1.2).abs() < f64::EPSILON);
}

#[test]
fn motion_config_deserializes_partial_overrides() {
    let raw = json!({
        "gallery": { "radius": 7.5, "ring_size": 6 },
        "carousel": { "center_retry_limit": 3 }
    });

    let cfg: MotionConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!((cfg.gallery.radius - 7.5).abs() < f64::EPSILON);
    assert_eq!(cfg.gallery.ring_size, 6);
    assert_eq!(cfg.carousel.center_retry_limit, 3);
    // Untouched sections keep their defaults.
    assert!((cfg.gallery.smoothing - 0.05).abs() < f64::EPSILON);
    assert!((cfg.scroll.duration - 1.2).abs() < f64::EPSILON);
}

#[test]
fn motion_config_clones_share_until_mutated() {
    let base = MotionConfig::default();
    let mut tweaked = base.clone();
    tweaked.gallery.radius = 9.0;

    assert!((base.gallery.radius - 5.0).abs() < f64::EPSILON);
    assert!((tweaked.gallery.radius - 9.0).abs() < f64::EPSILON);
}
