// Scene layout and animation tuning constants shared by the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const FIELD_BOUNDS: f32 = 10.0; // half-extent of the wrap cube, per axis
pub const PARTICLE_VELOCITY_SCALE: f32 = 0.01; // half-range of initial velocity
pub const PARTICLE_SIZE: f32 = 0.05; // world-space sprite size
pub const FIELD_DRIFT_YAW_PER_TICK: f32 = 0.0005;
pub const FIELD_DRIFT_PITCH_PER_TICK: f32 = 0.0002;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 8.0; // eye z, held fixed while flying to a panel

// Panels (cross layout: home top, about left, work right, contact bottom)
pub const PANEL_WIDTH: f32 = 3.0;
pub const PANEL_HEIGHT: f32 = 2.0;

// Panel animation
pub const PULSE_SCALE: f32 = 1.05; // idle breathing amplitude
pub const PULSE_DURATION_SEC: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.15;
pub const HOVER_DURATION_SEC: f32 = 0.3;
pub const CLICK_SCALE: f32 = 1.3;
pub const CLICK_DURATION_SEC: f32 = 0.3; // each half of the yoyo
pub const CAMERA_FLY_DURATION_SEC: f32 = 1.2;

// Decorative idle yaw applied to every panel as a function of wall-clock time
pub const IDLE_YAW_AMPLITUDE: f32 = 0.1;
pub const IDLE_YAW_RATE: f32 = 0.5; // radians of phase per second
