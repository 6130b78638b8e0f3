// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn lifecycle_classes_are_distinct() {
    let classes = [CLASS_LOADING, CLASS_READY, CLASS_FAILED];
    for (i, a) in classes.iter().enumerate() {
        assert!(a.starts_with("cyl-"), "{a} should be namespaced");
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn navigation_keys_differ() {
    assert_ne!(KEY_NEXT, KEY_PREV);
}

#[test]
fn selectors_target_data_attributes() {
    for sel in [AUTO_MOUNT_SELECTOR, NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR] {
        assert!(
            sel.starts_with("[data-cyl") && sel.ends_with(']'),
            "{sel} should be an attribute selector"
        );
    }
    assert!(CAPTION_TARGET_SELECTOR.starts_with('.'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_never_collapses() {
    assert!(MIN_CANVAS_PX >= 1);
}
