// Host-side tests for log level selection.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod logging {
    include!("../src/logging.rs");
}

use logging::*;

#[test]
fn debug_overlay_selects_debug_level() {
    assert_eq!(level_for(true), log::LevelFilter::Debug);
    assert_eq!(level_for(false), log::LevelFilter::Info);
}

#[test]
fn first_widget_decides_the_level() {
    assert_eq!(choose_level_once(false), Some(log::LevelFilter::Info));
    assert_eq!(choose_level_once(true), None);
    assert_eq!(choose_level_once(false), None);
    assert_eq!(log::max_level(), log::LevelFilter::Info);
}

#[test]
fn repeated_failures_are_logged_sparingly() {
    let mut limiter = RepeatLimiter::new(600);
    let logged = (0..1800).filter(|_| limiter.hit()).count();
    assert_eq!(logged, 3);
    assert_eq!(limiter.count(), 1800);
}

#[test]
fn success_starts_a_new_run() {
    let mut limiter = RepeatLimiter::new(600);
    assert!(limiter.hit());
    assert!(!limiter.hit());
    limiter.reset();
    assert!(limiter.hit());
}

#[test]
fn zero_interval_logs_every_failure() {
    let mut limiter = RepeatLimiter::new(0);
    assert!(limiter.hit());
    assert!(limiter.hit());
}
