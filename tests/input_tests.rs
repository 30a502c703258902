// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn normalized_uv_maps_corners_and_centre() {
    assert_eq!(normalized_uv(0.0, 0.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(normalized_uv(800.0, 600.0, 800.0, 600.0), Vec2::ONE);
    assert_eq!(normalized_uv(400.0, 300.0, 800.0, 600.0), Vec2::splat(0.5));
}

#[test]
fn normalized_uv_clamps_outside_points() {
    let uv = normalized_uv(-50.0, 900.0, 800.0, 600.0);
    assert_eq!(uv, Vec2::new(0.0, 1.0));
}

#[test]
fn normalized_uv_falls_back_to_centre_for_empty_area() {
    assert_eq!(normalized_uv(10.0, 10.0, 0.0, 600.0), Vec2::splat(0.5));
    assert_eq!(normalized_uv(10.0, 10.0, 800.0, 0.0), Vec2::splat(0.5));
}

#[test]
fn backing_size_caps_device_pixel_ratio() {
    assert_eq!(backing_size(400.0, 300.0, 1.0, 2.0), (400, 300));
    assert_eq!(backing_size(400.0, 300.0, 2.0, 2.0), (800, 600));
    assert_eq!(backing_size(400.0, 300.0, 3.0, 2.0), (800, 600));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0, 2.0), (1, 1));
    // Nonsense ratios fall back to one.
    assert_eq!(backing_size(100.0, 50.0, 0.0, 2.0), (100, 50));
}

#[test]
fn frame_input_normalizes_pointer_against_viewport() {
    let page = PageInput {
        mouse: MouseState {
            x: 200.0,
            y: 150.0,
            present: true,
        },
        viewport: [800.0, 600.0],
        scroll: 0.25,
    };
    let f = page.frame_input();
    assert_eq!(f.mouse_uv, Vec2::new(0.25, 0.25));
    assert!(f.mouse_present);
    assert_eq!(f.scroll, 0.25);
}

#[test]
fn default_page_input_points_at_centre() {
    let f = PageInput::default().frame_input();
    assert_eq!(f.mouse_uv, Vec2::splat(0.5));
    assert!(!f.mouse_present);
    assert_eq!(f.scroll, 0.0);
}
