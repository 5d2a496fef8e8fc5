use arkiv_domain::config::MotionConfig;
use arkiv_kernel::config::load_config;
use serial_test::serial;
use std::io::Write;

#[test]
#[serial]
fn loads_motion_config_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("arkiv.toml");
    let mut file = std::fs::File::create(&path).expect("create config file");
    writeln!(
        file,
        "[gallery]\nradius = 7.0\nring_size = 6\n\n[carousel]\ncenter_retry_limit = 3\n"
    )
    .expect("write config file");

    let cfg: MotionConfig = load_config(Some(&path)).expect("load config");
    assert!((cfg.gallery.radius - 7.0).abs() < f64::EPSILON);
    assert_eq!(cfg.gallery.ring_size, 6);
    assert_eq!(cfg.carousel.center_retry_limit, 3);
    // Sections the file does not mention keep their defaults.
    assert!((cfg.carousel.degrees_per_step - 12.0).abs() < f64::EPSILON);
    assert!((cfg.scroll.duration - 1.2).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.toml");

    let result = load_config::<MotionConfig>(Some(&path));
    assert!(result.is_err());
}
