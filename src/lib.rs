#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod page;
mod render;

/// Mount the cube widget and everything that drives it. The controller is
/// created once here and handed to each caller that needs it.
fn init_cube(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let target = render::CssCube::find(document)?;
    let container = target.container().clone();
    let device = input::BrowserDevice::new(window);
    let cube = frame::mount_cube(window, target, &device);

    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        container: container.clone(),
        cube: cube.clone(),
    });
    events::wire_cube_controls(document, &cube);
    events::wire_resize(window, &cube);
    let view = events::shared_view();
    events::wire_page_visibility(document, &cube, &view);
    events::wire_viewport_intersection(document, &container, &cube, &view)?;
    Ok(())
}

/// Log a failed page behavior and carry on with the rest.
fn report(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::warn!("[page] {} disabled: {:#}", name, e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::window_document()?;

    report("particles", page::spawn_particles(&document));
    report("cube", init_cube(&window, &document));
    report("timeline", page::observe_timeline(&document));
    report("contact form", page::wire_contact_form(&window, &document));
    page::wire_smooth_scroll(&window, &document);
    report("navbar", page::wire_navbar_scroll(&window, &document));
    page::wire_project_cards(&document);
    Ok(())
}
