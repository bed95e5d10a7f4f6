// Host-side tests for pure pointer/ray helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn client_to_ndc_maps_rect_corners() {
    // 800x600 rect at the origin
    let center = client_to_ndc(400.0, 300.0, 0.0, 0.0, 800.0, 600.0);
    assert!(center.x.abs() < 1e-6 && center.y.abs() < 1e-6);

    let top_left = client_to_ndc(0.0, 0.0, 0.0, 0.0, 800.0, 600.0);
    assert!((top_left.x + 1.0).abs() < 1e-6);
    assert!((top_left.y - 1.0).abs() < 1e-6);

    let bottom_right = client_to_ndc(800.0, 600.0, 0.0, 0.0, 800.0, 600.0);
    assert!((bottom_right.x - 1.0).abs() < 1e-6);
    assert!((bottom_right.y + 1.0).abs() < 1e-6);
}

#[test]
fn client_to_ndc_respects_rect_offset() {
    // Same pixel means a different NDC once the rect moves.
    let p = client_to_ndc(500.0, 350.0, 100.0, 50.0, 800.0, 600.0);
    assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6);
}

#[test]
fn client_to_ndc_degenerate_rect_is_zero() {
    let p = client_to_ndc(10.0, 10.0, 0.0, 0.0, 0.0, 600.0);
    assert_eq!(p, glam::Vec2::ZERO);
}

#[test]
fn ray_rect_hits_a_facing_panel() {
    let origin = Vec3::new(0.0, 0.0, 8.0);
    let dir = Vec3::new(0.0, 0.0, -1.0);
    let t = ray_rect(origin, dir, Vec3::ZERO, 1.5, 1.0);
    assert!(t.is_some());
    assert!((t.unwrap() - 8.0).abs() < 1e-5);
}

#[test]
fn ray_rect_misses_outside_the_extents() {
    let origin = Vec3::new(0.0, 0.0, 8.0);
    let dir = Vec3::new(0.0, 0.0, -1.0);
    // Panel sits well off to the side of the ray.
    assert!(ray_rect(origin, dir, Vec3::new(6.0, 0.0, 0.0), 1.5, 1.0).is_none());
}

#[test]
fn ray_rect_edge_is_inclusive() {
    let origin = Vec3::new(1.5, 0.0, 8.0);
    let dir = Vec3::new(0.0, 0.0, -1.0);
    assert!(ray_rect(origin, dir, Vec3::ZERO, 1.5, 1.0).is_some());
}

#[test]
fn ray_rect_rejects_parallel_rays() {
    let origin = Vec3::new(0.0, 0.0, 8.0);
    let dir = Vec3::new(1.0, 0.0, 0.0);
    assert!(ray_rect(origin, dir, Vec3::ZERO, 1.5, 1.0).is_none());
}

#[test]
fn ray_rect_rejects_hits_behind_the_origin() {
    let origin = Vec3::new(0.0, 0.0, 8.0);
    let dir = Vec3::new(0.0, 0.0, -1.0);
    // Plane behind the camera along the ray direction
    assert!(ray_rect(origin, dir, Vec3::new(0.0, 0.0, 9.0), 1.5, 1.0).is_none());
}
