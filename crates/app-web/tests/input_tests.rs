// Host-side tests for pure pointer-mapping math.
// The crate itself is wasm-only, so the module source is included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::canvas_px;

#[test]
fn identity_when_rect_matches_backing() {
    let pos = canvas_px(150.0, 80.0, 0.0, 0.0, 800.0, 600.0, 800.0, 600.0);
    assert_eq!(pos, Vec2::new(150.0, 80.0));
}

#[test]
fn scales_by_device_pixel_ratio() {
    // CSS rect 400x300, backing store 800x600 (dpr 2)
    let pos = canvas_px(100.0, 75.0, 0.0, 0.0, 400.0, 300.0, 800.0, 600.0);
    assert_eq!(pos, Vec2::new(200.0, 150.0));
}

#[test]
fn subtracts_rect_offset() {
    let pos = canvas_px(120.0, 90.0, 20.0, 40.0, 100.0, 100.0, 100.0, 100.0);
    assert_eq!(pos, Vec2::new(100.0, 50.0));
}

#[test]
fn degenerate_rect_maps_to_origin() {
    let pos = canvas_px(50.0, 50.0, 0.0, 0.0, 0.0, 0.0, 800.0, 600.0);
    assert_eq!(pos, Vec2::ZERO);
}
