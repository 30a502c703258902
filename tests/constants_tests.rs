// Host-side tests for the page markup contract.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [
        CANVAS_ID,
        LOADER_ID,
        HERO_ID,
        PROJECTS_GRID_ID,
        PROJECT_COUNT_ID,
        THEME_TOGGLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "id {a:?} must not contain spaces");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn attributes_are_data_attributes() {
    for attr in [
        NAV_TARGET_ATTR,
        THEME_ATTR,
        RENDERER_ATTR,
        VARIANT_ATTR,
        CARD_LIMIT_ATTR,
    ] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_and_pixel_ratio_are_sane() {
    assert!(LOADER_DELAY_MS > 0);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(PROJECTS_URL.ends_with(".json"));
}
