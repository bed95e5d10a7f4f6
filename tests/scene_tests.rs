// Host-side tests for scene orchestration: hit-testing, hover, navigation,
// resize. The main crate is wasm-only, so we include the pure-Rust modules
// directly; `input` must sit at the test root because the scene module
// reaches it with a crate-relative path.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::scene::{Scene, SceneConfig, Section};
use glam::{Vec2, Vec3, Vec4Swizzles};

fn test_scene() -> Scene {
    // No particles needed for interaction tests
    let mut scene = Scene::new(SceneConfig {
        particle_count: 0,
        ..Default::default()
    });
    scene.set_viewport(800, 600);
    scene
}

/// NDC of a world-space point under the scene's current camera.
fn ndc_of(scene: &Scene, world: Vec3) -> Vec2 {
    let clip =
        scene.camera.projection_matrix() * scene.camera.view_matrix() * world.extend(1.0);
    clip.xy() / clip.w
}

#[test]
fn hit_test_selects_exactly_the_aimed_panel() {
    let scene = test_scene();
    for section in Section::ALL {
        let ndc = ndc_of(&scene, section.layout_position());
        assert_eq!(
            scene.pick_at_ndc(ndc.x, ndc.y),
            Some(section),
            "aiming at {:?}",
            section
        );
    }
}

#[test]
fn hit_test_between_panels_is_none() {
    let scene = test_scene();
    // Screen center projects to the scene origin, between all four panels.
    assert_eq!(scene.pick_at_ndc(0.0, 0.0), None);
}

#[test]
fn hover_is_exclusive_and_follows_the_pointer() {
    let mut scene = test_scene();

    let home = ndc_of(&scene, Section::Home.layout_position());
    scene.set_pointer_ndc(home.x, home.y);
    let hit = scene.tick(0.016);
    assert_eq!(hit, Some(Section::Home));
    assert_eq!(scene.hovered_section(), Some(Section::Home));
    assert_eq!(
        scene.panels().iter().filter(|p| p.hovered).count(),
        1,
        "at most one panel hovered"
    );

    let work = ndc_of(&scene, Section::Work.layout_position());
    scene.set_pointer_ndc(work.x, work.y);
    scene.tick(0.016);
    assert_eq!(scene.hovered_section(), Some(Section::Work));
    assert_eq!(scene.panels().iter().filter(|p| p.hovered).count(), 1);
}

#[test]
fn no_pointer_means_no_hover() {
    let mut scene = test_scene();
    scene.tick(0.016);
    assert_eq!(scene.hovered_section(), None);
}

#[test]
fn hover_scale_grows_toward_target() {
    let mut scene = test_scene();
    let home = ndc_of(&scene, Section::Home.layout_position());
    scene.set_pointer_ndc(home.x, home.y);
    scene.tick(0.016);
    // Let the 0.3s hover tween run to completion.
    scene.tick(0.5);
    let panel = &scene.panels()[0];
    assert_eq!(panel.section, Section::Home);
    assert!((panel.hover - 1.15).abs() < 1e-4, "hover = {}", panel.hover);
}

#[test]
fn navigation_is_idempotent() {
    let mut scene = test_scene();
    scene.navigate_to(Section::Work);
    scene.navigate_to(Section::Work);
    assert_eq!(scene.current_section(), Section::Work);
}

#[test]
fn navigation_flies_the_camera_to_the_panel() {
    let mut scene = test_scene();
    scene.navigate_to(Section::Work);
    // Past the 1.2s fly duration the eye rests over the panel at the fixed
    // depth distance.
    scene.tick(2.0);
    let eye = scene.camera.eye;
    assert!((eye - Vec3::new(6.0, 0.0, 8.0)).length() < 1e-3, "eye = {eye}");
}

#[test]
fn deep_link_sections_round_trip() {
    let mut scene = test_scene();
    let section = Section::from_str("about").unwrap();
    scene.navigate_to(section);
    assert_eq!(scene.current_section(), Section::About);
    assert_eq!(Section::from_str("garbage"), None);
    for s in Section::ALL {
        assert_eq!(Section::from_str(s.as_str()), Some(s));
    }
}

#[test]
fn resize_updates_aspect_and_nothing_else() {
    let mut scene = Scene::new(SceneConfig {
        particle_count: 8,
        ..Default::default()
    });
    scene.set_viewport(800, 600);
    let positions_before = scene.particles.positions().to_vec();
    let scales_before: Vec<_> = scene.panels().iter().map(|p| p.effective_scale()).collect();

    scene.set_viewport(1200, 800);

    assert!((scene.camera.aspect - 1.5).abs() < 1e-6);
    assert_eq!(scene.particles.positions(), &positions_before[..]);
    let scales_after: Vec<_> = scene.panels().iter().map(|p| p.effective_scale()).collect();
    assert_eq!(scales_before, scales_after);
}

#[test]
fn idle_pulse_breathes_around_base_scale() {
    let mut scene = test_scene();
    scene.tick(0.5);
    for p in scene.panels() {
        assert!(p.pulse > 1.0 && p.pulse <= 1.05 + 1e-5, "pulse = {}", p.pulse);
    }
}

#[test]
fn zero_viewport_leaves_aspect_untouched() {
    let mut scene = test_scene();
    let aspect = scene.camera.aspect;
    scene.set_viewport(0, 600);
    assert_eq!(scene.camera.aspect, aspect);
}
