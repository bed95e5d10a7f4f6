#![cfg(target_arch = "wasm32")]
use crate::core::{Scene, SceneConfig, Section};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::create_canvas(&document)?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let config = SceneConfig::default();
    let particle_count = config.particle_count;
    let scene = Rc::new(RefCell::new(Scene::new(config)));
    scene.borrow_mut().set_viewport(width, height);

    // Honor a deep-link fragment before the first frame.
    if let Some(section) = dom::location_hash().as_deref().and_then(Section::from_str) {
        log::info!("[nav] deep link -> {}", section.as_str());
        scene.borrow_mut().navigate_to(section);
    }

    let gpu = frame::init_gpu(&canvas, particle_count).await;

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });

    dom::hide_loading(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        canvas,
        last_instant: Instant::now(),
        was_hovering: false,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
