use crate::core::{Scene, Section};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_click(&w);
    wire_resize(&w);
    wire_hashchange(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = input::pointer_canvas_ndc(&ev, &w.canvas);
        w.scene.borrow_mut().set_pointer_ndc(ndc.x, ndc.y);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        // Recompute the ray from the click coordinates rather than trusting
        // the last pointermove.
        let ndc = input::pointer_canvas_ndc(&ev, &w.canvas);
        let picked = w.scene.borrow().pick_at_ndc(ndc.x, ndc.y);
        if let Some(section) = picked {
            log::info!("[nav] click -> {}", section.as_str());
            w.scene.borrow_mut().navigate_to(section);
            dom::set_location_hash(section.as_str());
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (width, height) = dom::sync_canvas_backing_size(&w.canvas);
        w.scene.borrow_mut().set_viewport(width, height);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Deep-linking and back/forward: a hash edit navigates to the named
/// section. The hash a click just wrote lands here too; navigation is
/// idempotent by value so that round trip is a no-op.
fn wire_hashchange(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::HashChangeEvent| {
        let Some(section) = dom::location_hash().as_deref().and_then(Section::from_str) else {
            return;
        };
        let mut scene = w.scene.borrow_mut();
        if scene.current_section() != section {
            log::info!("[nav] hashchange -> {}", section.as_str());
            scene.navigate_to(section);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
