use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create the rendering canvas and, when the mount point exists, host it in
/// `#canvas-container`. A missing container is tolerated: the canvas still
/// renders, it is just not attached to the page.
pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    match document.get_element_by_id("canvas-container") {
        Some(container) => {
            container.set_inner_html("");
            _ = container.append_child(&canvas);
        }
        None => log::warn!("[dom] missing #canvas-container; rendering unattached"),
    }
    Ok(canvas)
}

/// Hide the loading element once initialization completes. Absent element
/// is a no-op.
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loading") {
        _ = el.class_list().add_1("hidden");
    }
}

/// Size the canvas backing store to the viewport. Falls back to the CSS
/// rectangle when the canvas is unattached.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let mut width = 0u32;
    let mut height = 0u32;
    if let Some(w) = web::window() {
        width = w
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u32;
        height = w
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u32;
    }
    if width == 0 || height == 0 {
        let rect = canvas.get_bounding_client_rect();
        width = rect.width() as u32;
        height = rect.height() as u32;
    }
    let width = width.max(1);
    let height = height.max(1);
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

/// Pointer-is-interactive visual cue.
pub fn set_cursor(pointer: bool) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        let cursor = if pointer { "pointer" } else { "default" };
        _ = body.style().set_property("cursor", cursor);
    }
}

/// Reflect the active section in the location fragment so back/forward and
/// deep-linking work.
pub fn set_location_hash(section: &str) {
    if let Some(w) = web::window() {
        _ = w.location().set_hash(section);
    }
}

/// Current location fragment without the leading `#`, if any.
pub fn location_hash() -> Option<String> {
    let hash = web::window()?.location().hash().ok()?;
    let trimmed = hash.trim_start_matches('#');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
