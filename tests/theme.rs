use particle_field_wasm::color::{parse_css_color, DEFAULT_ACCENT, DEFAULT_BACKGROUND};
use particle_field_wasm::config::MAX_PARTICLES;
use particle_field_wasm::{FieldConfig, InitError, Theme};

#[test]
fn parses_hex_and_rgb() {
    assert_eq!(parse_css_color("#ffffff"), Some([1.0, 1.0, 1.0]));
    assert_eq!(parse_css_color(" #000 "), Some([0.0, 0.0, 0.0]));
    assert_eq!(parse_css_color("#f00"), Some([1.0, 0.0, 0.0]));
    assert_eq!(parse_css_color("rgb(255, 0, 255)"), Some([1.0, 0.0, 1.0]));
    assert_eq!(parse_css_color("rgba(0, 255, 0, 0.5)"), Some([0.0, 1.0, 0.0]));
}

#[test]
fn rejects_garbage() {
    assert_eq!(parse_css_color(""), None);
    assert_eq!(parse_css_color("#12345"), None);
    assert_eq!(parse_css_color("#gggggg"), None);
    assert_eq!(parse_css_color("rgb(300, 0, 0)"), None);
    assert_eq!(parse_css_color("blue"), None);
}

#[test]
fn theme_falls_back_per_slot() {
    let t = Theme::from_css("", "#fff");
    assert_eq!(t.background, DEFAULT_BACKGROUND);
    assert_eq!(t.accent, [1.0, 1.0, 1.0]);

    let t = Theme::from_css("#000000", "not-a-color");
    assert_eq!(t.background, [0.0, 0.0, 0.0]);
    assert_eq!(t.accent, DEFAULT_ACCENT);
}

#[test]
fn config_defaults_match_animation_constants() {
    let c = FieldConfig::default();
    assert_eq!(c.count, 2000);
    assert_eq!(c.spread, 50.0);
    assert_eq!(c.max_speed, 0.0025);
    assert_eq!(c.wrap_margin, 10.0);
    assert_eq!(c.wrap_span, 100.0);
    assert_eq!(c.easing_gain, 0.01);
    assert_eq!(c.swirl_rate, 0.0002);
    assert_eq!(c.pointer_gain, 0.2);
    assert!(c.validate().is_ok());
}

#[test]
fn config_overrides_from_dataset() {
    let c = FieldConfig::default()
        .with_overrides([("particleCount", " 500 "), ("seed", "9"), ("theme", "ignored")])
        .unwrap();
    assert_eq!(c.count, 500);
    assert_eq!(c.seed, Some(9));
    assert_eq!(c.point_size, 0.02);
}

#[test]
fn config_rejects_bad_overrides() {
    let err = FieldConfig::default()
        .with_overrides([("particleCount", "lots")])
        .unwrap_err();
    assert!(matches!(err, InitError::InvalidConfig(_)));

    let err = FieldConfig::default().with_overrides([("opacity", "1.5")]).unwrap_err();
    assert!(err.to_string().contains("opacity"));

    assert!(FieldConfig::default().with_overrides([("particleCount", "0")]).is_err());
}

#[test]
fn config_rejects_oversized_particle_count() {
    let err = FieldConfig::default()
        .with_overrides([("particleCount", "6148914691236517206")])
        .unwrap_err();
    assert!(matches!(err, InitError::InvalidConfig(_)));

    let at_limit = FieldConfig { count: MAX_PARTICLES, ..FieldConfig::default() };
    assert!(at_limit.validate().is_ok());
    let over = FieldConfig { count: MAX_PARTICLES + 1, ..FieldConfig::default() };
    assert!(over.validate().is_err());
}
