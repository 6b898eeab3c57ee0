// Host-side tests for the DOM contract constants.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn anchors_are_distinct_selectors() {
    assert_eq!(SCROLL_VIEWPORT_SELECTOR, "[data-scroll]");
    assert_eq!(SCROLL_CONTENT_SELECTOR, "[data-scroll-content]");
    assert_eq!(PARALLAX_SELECTOR, ".parallax");
    assert_ne!(SCROLL_VIEWPORT_SELECTOR, SCROLL_CONTENT_SELECTOR);
}

#[test]
fn ease_attribute_lives_on_data_namespace() {
    assert!(SCROLL_EASE_ATTR.starts_with("data-"));
}

#[test]
fn viewport_is_pinned_full_bleed() {
    let get = |key: &str| {
        VIEWPORT_STYLES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    };
    assert_eq!(get("position"), Some("fixed"));
    assert_eq!(get("top"), Some("0"));
    assert_eq!(get("left"), Some("0"));
    assert_eq!(get("width"), Some("100%"));
    assert_eq!(get("height"), Some("100%"));
    assert_eq!(get("overflow"), Some("hidden"));
    assert_eq!(VIEWPORT_STYLES.len(), 6);
}

#[test]
fn style_properties_are_css_names() {
    // set_property takes hyphenated CSS names, not camelCase
    for prop in [TRANSFORM_PROPERTY, BACKGROUND_Y_PROPERTY, HEIGHT_PROPERTY] {
        assert!(!prop.chars().any(|c| c.is_ascii_uppercase()));
    }
    assert_eq!(BACKGROUND_Y_PROPERTY, "background-position-y");
}

#[test]
fn listened_events() {
    assert_eq!(SCROLL_EVENT, "scroll");
    assert_eq!(RESIZE_EVENT, "resize");
    assert_eq!(LOAD_EVENT, "load");
}
