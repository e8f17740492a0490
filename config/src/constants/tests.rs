//! Tests for the layout configuration value.

use super::*;

/// Ensures the default config mirrors the constants.
#[test]
fn default_matches_constants() {
    let cfg = LayoutConfig::default();
    assert_eq!(cfg.scale(), SCALE);
    assert_eq!(cfg.margin(), MARGIN);
    assert_eq!(cfg.pitch(), PITCH);
    assert_eq!(cfg.space(), SPACE);
    assert_eq!(cfg.interval(), INTERVAL);
    assert!(cfg.show_outlines());
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        LayoutConfig::new(3.0, 1.0, 2).unwrap_err(),
        ConfigError::MarginTooSmall(3.0)
    );
    assert_eq!(
        LayoutConfig::new(4.0, 0.0, 2).unwrap_err(),
        ConfigError::InvalidScale(0.0)
    );
    assert_eq!(
        LayoutConfig::new(4.0, 1.0, 0).unwrap_err(),
        ConfigError::InvalidInterval(0)
    );
}

#[test]
fn new_rejects_nan_margin() {
    assert!(matches!(
        LayoutConfig::new(f64::NAN, 1.0, 2),
        Err(ConfigError::MarginTooSmall(_))
    ));
}

#[test]
fn new_derives_pitch_and_space() {
    let cfg = LayoutConfig::new(4.0, 1.0, 2).unwrap();
    assert_eq!(cfg, LayoutConfig::default());
}

#[test]
fn toggles_return_modified_copies() {
    let base = LayoutConfig::default();
    let dark = ColorTable {
        primal: 0x111111,
        ..ColorTable::default()
    };
    let cfg = base.with_outlines(false).with_colors(dark);
    assert!(!cfg.show_outlines());
    assert_eq!(cfg.colors().primal, 0x111111);
    assert!(base.show_outlines());
}

#[test]
fn error_display_mentions_value() {
    let msg = ConfigError::MarginTooSmall(2.5).to_string();
    assert!(msg.contains("2.5"));
}
