// Host-side tests for scene tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(FIELD_BOUNDS > 0.0);
    assert!(PARTICLE_VELOCITY_SCALE > 0.0);
    // A particle must not be able to cross the whole cube in one tick
    assert!(PARTICLE_VELOCITY_SCALE < 2.0 * FIELD_BOUNDS);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(FIELD_DRIFT_YAW_PER_TICK > 0.0);
    assert!(FIELD_DRIFT_PITCH_PER_TICK > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_consistent() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_DISTANCE > CAMERA_NEAR && CAMERA_DISTANCE < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_scales_are_ordered() {
    // Idle breathing < hover emphasis < click pulse
    assert!(PULSE_SCALE > 1.0);
    assert!(HOVER_SCALE > PULSE_SCALE);
    assert!(CLICK_SCALE > HOVER_SCALE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_durations_are_positive_and_sane() {
    assert!(PULSE_DURATION_SEC > 0.0);
    assert!(HOVER_DURATION_SEC > 0.0);
    assert!(CLICK_DURATION_SEC > 0.0);
    assert!(CAMERA_FLY_DURATION_SEC > 0.0);
    // Interaction feedback should be snappier than the camera fly
    assert!(HOVER_DURATION_SEC < CAMERA_FLY_DURATION_SEC);
    assert!(CLICK_DURATION_SEC < CAMERA_FLY_DURATION_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn panels_fit_between_their_layout_positions() {
    assert!(PANEL_WIDTH > 0.0);
    assert!(PANEL_HEIGHT > 0.0);
    // The cross layout spaces panel centers 4+ units apart; even at the
    // click scale the quads must not overlap the scene center.
    assert!(PANEL_WIDTH * 0.5 * CLICK_SCALE < 4.0);
    assert!(PANEL_HEIGHT * 0.5 * CLICK_SCALE < 4.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_yaw_stays_decorative() {
    assert!(IDLE_YAW_AMPLITUDE > 0.0 && IDLE_YAW_AMPLITUDE < 0.5);
    assert!(IDLE_YAW_RATE > 0.0);
}
