// Host-side tests for the per-thread widget registry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod registry {
    include!("../src/registry.rs");
}

use registry::Registry;

#[test]
fn ids_are_unique_per_mount() {
    let mut r: Registry<&str> = Registry::default();
    let a = r.next_id();
    let b = r.next_id();
    assert_ne!(a, b);
}

#[test]
fn container_already_mounted_is_found() {
    let mut r = Registry::default();
    let id = r.next_id();
    r.insert(id, "gallery");
    assert_eq!(r.find(|w| *w == "gallery"), Some(&"gallery"));
    assert_eq!(r.find(|w| *w == "other"), None);
}

#[test]
fn destroyed_widget_frees_its_container() {
    let mut r = Registry::default();
    let id = r.next_id();
    r.insert(id, "gallery");
    assert_eq!(r.remove(id), Some("gallery"));
    assert!(r.find(|w| *w == "gallery").is_none());

    let again = r.next_id();
    r.insert(again, "gallery");
    assert_ne!(again, id);
    assert!(r.find(|w| *w == "gallery").is_some());
}
