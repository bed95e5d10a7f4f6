use glam::{Mat4, Vec2, Vec3, Vec4};

use super::constants::*;
use super::particles::ParticleField;
use super::super::input::ray_rect;
use super::tween::{Channel, Easing, Tween, Tweens};

/// The fixed navigation set. One panel exists per section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Work,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Work, Section::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Work => "work",
            Section::Contact => "contact",
        }
    }

    pub fn from_str(s: &str) -> Option<Section> {
        match s {
            "home" => Some(Section::Home),
            "about" => Some(Section::About),
            "work" => Some(Section::Work),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }

    /// Cross layout: home on top, about/work to the sides, contact below.
    pub fn layout_position(self) -> Vec3 {
        match self {
            Section::Home => Vec3::new(0.0, 4.0, 0.0),
            Section::About => Vec3::new(-6.0, 0.0, 0.0),
            Section::Work => Vec3::new(6.0, 0.0, 0.0),
            Section::Contact => Vec3::new(0.0, -4.0, 0.0),
        }
    }
}

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// One clickable textured quad. Effective scale combines the idle pulse and
/// the hover/click factor so the two animations never fight over one value.
#[derive(Clone, Debug)]
pub struct Panel {
    pub section: Section,
    pub position: Vec3,
    pub base_scale: Vec3,
    pub pulse: f32,
    pub hover: f32,
    pub yaw: f32,
    pub hovered: bool,
}

impl Panel {
    pub fn effective_scale(&self) -> Vec3 {
        self.base_scale * self.pulse * self.hover
    }
}

/// Recognized options, all defaulted per the original scene.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub field_bounds: f32,
    pub velocity_scale: f32,
    pub fov_deg: f32,
    pub znear: f32,
    pub zfar: f32,
    pub camera_distance: f32,
    pub panel_width: f32,
    pub panel_height: f32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            field_bounds: FIELD_BOUNDS,
            velocity_scale: PARTICLE_VELOCITY_SCALE,
            fov_deg: CAMERA_FOV_DEG,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            camera_distance: CAMERA_DISTANCE,
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            seed: 42,
        }
    }
}

/// Scene state and per-tick orchestration: camera, panel registry, particle
/// field, navigation and pointer state, and the tween scheduler. Owns every
/// piece of mutable scene data; the platform layer only feeds it events and
/// reads transforms back out for rendering.
pub struct Scene {
    pub config: SceneConfig,
    pub camera: Camera,
    panels: Vec<Panel>,
    tweens: Tweens,
    pub particles: ParticleField,
    current_section: Section,
    pointer_ndc: Vec2,
    pointer_seen: bool,
    elapsed: f32,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, config.camera_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: config.fov_deg.to_radians(),
            znear: config.znear,
            zfar: config.zfar,
        };
        let panels: Vec<Panel> = Section::ALL
            .iter()
            .map(|&section| Panel {
                section,
                position: section.layout_position(),
                base_scale: Vec3::ONE,
                pulse: 1.0,
                hover: 1.0,
                yaw: 0.0,
                hovered: false,
            })
            .collect();
        let particles = ParticleField::new(
            config.particle_count,
            config.field_bounds,
            config.velocity_scale,
            FIELD_DRIFT_YAW_PER_TICK,
            FIELD_DRIFT_PITCH_PER_TICK,
            config.seed,
        );
        let mut tweens = Tweens::default();
        // Indefinite breathing pulse on every panel, independent of hover.
        for (i, _) in panels.iter().enumerate() {
            tweens.start(
                Tween::new(
                    Channel::PanelPulse(i),
                    Vec3::ONE,
                    Vec3::splat(PULSE_SCALE),
                    PULSE_DURATION_SEC,
                    Easing::QuadInOut,
                )
                .yoyo(None),
            );
        }
        Self {
            config,
            camera,
            panels,
            tweens,
            particles,
            current_section: Section::Home,
            pointer_ndc: Vec2::ZERO,
            pointer_seen: false,
            elapsed: 0.0,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn hovered_section(&self) -> Option<Section> {
        self.panels.iter().find(|p| p.hovered).map(|p| p.section)
    }

    /// Resize: only the camera aspect changes; panels and particles are
    /// untouched.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Record the pointer in normalized device coordinates ([-1,1] each
    /// axis, y up). Overwritten on every move; no history kept.
    pub fn set_pointer_ndc(&mut self, x: f32, y: f32) {
        self.pointer_ndc = Vec2::new(x, y);
        self.pointer_seen = true;
    }

    /// World-space ray from the camera eye through an NDC point.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = (self.camera.projection_matrix() * self.camera.view_matrix()).inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = far.truncate() / far.w;
        let origin = self.camera.eye;
        (origin, (far - origin).normalize())
    }

    /// Nearest panel hit by the ray, if any. Hit-testing is restricted to
    /// the panel registry; panels are picked as camera-facing rectangles at
    /// their current effective scale (the decorative idle yaw is ignored).
    pub fn pick(&self, origin: Vec3, dir: Vec3) -> Option<Section> {
        let half_w = self.config.panel_width * 0.5;
        let half_h = self.config.panel_height * 0.5;
        let mut best: Option<(Section, f32)> = None;
        for panel in &self.panels {
            let scale = panel.effective_scale();
            if let Some(t) = ray_rect(
                origin,
                dir,
                panel.position,
                half_w * scale.x,
                half_h * scale.y,
            ) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((panel.section, t)),
                }
            }
        }
        best.map(|(s, _)| s)
    }

    /// Pick against an explicit NDC point (used by click handling, which
    /// recomputes the ray from the click coordinates).
    pub fn pick_at_ndc(&self, x: f32, y: f32) -> Option<Section> {
        let (origin, dir) = self.ray_from_ndc(Vec2::new(x, y));
        self.pick(origin, dir)
    }

    fn panel_index(&self, section: Section) -> Option<usize> {
        self.panels.iter().position(|p| p.section == section)
    }

    /// One frame: advance tweens, advance particles, hit-test, hover
    /// transitions, decorative idle yaw. Returns the hovered section so the
    /// platform layer can drive the cursor cue.
    pub fn tick(&mut self, dt: f32) -> Option<Section> {
        self.elapsed += dt.max(0.0);

        // 1. Advance all active tweens by the elapsed delta.
        let panels = &mut self.panels;
        let camera = &mut self.camera;
        self.tweens.advance(dt, |channel, value| match channel {
            Channel::CameraEye => {
                camera.eye = value;
                camera.target = Vec3::new(value.x, value.y, 0.0);
            }
            Channel::PanelPulse(i) => {
                if let Some(p) = panels.get_mut(i) {
                    p.pulse = value.x;
                }
            }
            Channel::PanelHover(i) => {
                if let Some(p) = panels.get_mut(i) {
                    p.hover = value.x;
                }
            }
        });

        // 2. Advance the particle field.
        self.particles.advance();

        // 3. Hit-test the current pointer against the panels.
        let hit = if self.pointer_seen {
            let (origin, dir) = self.ray_from_ndc(self.pointer_ndc);
            self.pick(origin, dir)
        } else {
            None
        };

        // 4/5. Hover transitions on state change only, so an in-flight click
        // pulse is not superseded while the pointer rests on a panel.
        for i in 0..self.panels.len() {
            let is_hit = hit == Some(self.panels[i].section);
            let was = self.panels[i].hovered;
            if is_hit && !was {
                self.panels[i].hovered = true;
                let from = self.panels[i].hover;
                self.tweens.start(Tween::new(
                    Channel::PanelHover(i),
                    Vec3::splat(from),
                    Vec3::splat(HOVER_SCALE),
                    HOVER_DURATION_SEC,
                    Easing::QuadOut,
                ));
            } else if !is_hit && was {
                self.panels[i].hovered = false;
                let from = self.panels[i].hover;
                self.tweens.start(Tween::new(
                    Channel::PanelHover(i),
                    Vec3::splat(from),
                    Vec3::ONE,
                    HOVER_DURATION_SEC,
                    Easing::QuadOut,
                ));
            }
        }

        // 6. Decorative idle yaw, a function of wall-clock time.
        let yaw = (self.elapsed * IDLE_YAW_RATE).sin() * IDLE_YAW_AMPLITUDE;
        for p in &mut self.panels {
            p.yaw = yaw;
        }

        hit
    }

    /// Navigate to a section: click-pulse the panel, fly the camera to it
    /// while holding the fixed depth distance, update the current section.
    /// Idempotent by value; an unknown panel is a no-op.
    pub fn navigate_to(&mut self, section: Section) {
        let Some(i) = self.panel_index(section) else {
            return;
        };
        let panel_pos = self.panels[i].position;
        let hover = self.panels[i].hover;
        self.tweens.start(
            Tween::new(
                Channel::PanelHover(i),
                Vec3::splat(hover),
                Vec3::splat(CLICK_SCALE),
                CLICK_DURATION_SEC,
                Easing::BackOut,
            )
            .yoyo(Some(1)),
        );
        self.tweens.start(Tween::new(
            Channel::CameraEye,
            self.camera.eye,
            Vec3::new(panel_pos.x, panel_pos.y, self.config.camera_distance),
            CAMERA_FLY_DURATION_SEC,
            Easing::CubicInOut,
        ));
        self.current_section = section;
    }
}
