pub mod constants;
pub mod particles;
pub mod scene;
pub mod tween;

pub use constants::*;
pub use particles::*;
pub use scene::*;
pub use tween::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
