// Host-side tests for option parsing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod attrs {
    include!("../src/attrs.rs");
}

use attrs::*;
use cyl_core::CarouselConfig;

fn text(s: &str) -> RawOption {
    RawOption::Text(s.to_string())
}

#[test]
fn defaults_when_nothing_is_set() {
    assert_eq!(config_from_pairs([]), CarouselConfig::default());
}

#[test]
fn data_attributes_override_defaults() {
    let config = config_from_pairs([
        ("gutter", text("0.01")),
        ("duplicate-threshold", text("2")),
        ("duration", text("800")),
        ("background", text("#ffffff")),
        ("background-opacity", text("0.25")),
        ("debug", text("")),
        ("asset-timeout", text("3000")),
    ]);
    assert_eq!(config.gutter_fraction, 0.01);
    assert_eq!(config.duplicate_threshold, 2);
    assert_eq!(config.transition_duration_ms, 800);
    assert_eq!(config.background_color, [1.0, 1.0, 1.0]);
    assert_eq!(config.background_opacity, 0.25);
    assert!(config.debug_overlay, "bare data-debug enables the overlay");
    assert_eq!(config.asset_timeout_ms, 3000);
}

#[test]
fn js_options_accept_numbers_and_bools() {
    let config = config_from_pairs([
        ("gutterFraction", RawOption::Number(0.0)),
        ("transitionDurationMs", RawOption::Number(250.0)),
        ("backgroundColor", RawOption::Number(0xff0000 as f64)),
        ("debug", RawOption::Bool(true)),
    ]);
    assert_eq!(config.gutter_fraction, 0.0);
    assert_eq!(config.transition_duration_ms, 250);
    assert_eq!(config.background_color, [1.0, 0.0, 0.0]);
    assert!(config.debug_overlay);
}

#[test]
fn bad_values_are_ignored() {
    let mut config = CarouselConfig::default();
    assert!(!apply_option(&mut config, "duration", &text("soon")));
    assert!(!apply_option(&mut config, "duration", &RawOption::Number(-5.0)));
    assert!(!apply_option(&mut config, "gutter", &RawOption::Number(f64::NAN)));
    assert!(!apply_option(&mut config, "background", &text("#12")));
    assert!(!apply_option(&mut config, "debug", &text("maybe")));
    assert!(!apply_option(&mut config, "unknown", &text("1")));
    assert_eq!(config, CarouselConfig::default());
}

#[test]
fn false_like_strings_disable_debug() {
    for s in ["false", "0", "no", "off", " FALSE "] {
        let mut config = CarouselConfig {
            debug_overlay: true,
            ..CarouselConfig::default()
        };
        assert!(apply_option(&mut config, "debug", &text(s)));
        assert!(!config.debug_overlay, "{s:?} should disable debug");
    }
}

#[test]
fn every_listed_key_is_understood() {
    for key in DATA_OPTION_KEYS.iter().chain(JS_OPTION_KEYS) {
        let mut config = CarouselConfig::default();
        let value = if key.contains("ackground") && !key.contains("pacity") {
            text("#000")
        } else if key.contains("ebug") {
            RawOption::Bool(false)
        } else {
            RawOption::Number(1.0)
        };
        assert!(apply_option(&mut config, key, &value), "key {key} rejected");
    }
}
