use glam::{Vec2, Vec3};
use web_sys as web;

/// Ray vs camera-facing rectangle centered at `center` in the z = center.z
/// plane, with the given half extents. Returns the ray parameter of the hit.
#[inline]
pub fn ray_rect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    half_width: f32,
    half_height: f32,
) -> Option<f32> {
    if ray_dir.z.abs() < 1e-6 {
        return None;
    }
    let t = (center.z - ray_origin.z) / ray_dir.z;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t;
    let inside = (hit.x - center.x).abs() <= half_width && (hit.y - center.y).abs() <= half_height;
    inside.then_some(t)
}

/// Normalize device-pixel coordinates against a bounding rectangle into
/// NDC: x and y each in [-1, 1], y pointing up.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = ((client_x - left) / width) * 2.0 - 1.0;
    let y = -(((client_y - top) / height) * 2.0 - 1.0);
    Vec2::new(x, y)
}

/// NDC for a pointer event, measured against the canvas' CSS rectangle.
#[inline]
pub fn pointer_canvas_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
