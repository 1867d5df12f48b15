use crate::core::{PageError, ViewGate};
use crate::dom;
use crate::frame::SharedCube;
use crate::input::BrowserDevice;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Visibility state shared by the page and viewport listeners.
pub type SharedView = Rc<Cell<ViewGate>>;

pub fn shared_view() -> SharedView {
    Rc::new(Cell::new(ViewGate::default()))
}

/// Pause auto-rotation while the tab is hidden. The enabled flag is never
/// touched, so a user's "stop" survives the round trip.
pub fn wire_page_visibility(document: &web::Document, cube: &SharedCube, view: &SharedView) {
    let doc = document.clone();
    let cube = cube.clone();
    let view = view.clone();
    dom::add_listener(document, "visibilitychange", move |_: web::Event| {
        let gate = ViewGate {
            page_visible: !doc.hidden(),
            ..view.get()
        };
        view.set(gate);
        cube.borrow_mut().follow_view(gate);
        log::debug!("[cube] page hidden={} in view={}", doc.hidden(), gate.in_view);
    });
}

/// Pause auto-rotation while the cube is scrolled out of view.
pub fn wire_viewport_intersection(
    document: &web::Document,
    container: &web::HtmlElement,
    cube: &SharedCube,
    view: &SharedView,
) -> Result<(), PageError> {
    let doc = document.clone();
    let cube = cube.clone();
    let view = view.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            let gate = ViewGate {
                page_visible: !doc.hidden(),
                in_view: entry.is_intersecting(),
            };
            view.set(gate);
            cube.borrow_mut().follow_view(gate);
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| PageError::js(format!("{:?}", e)))?;
    observer.observe(container);
    callback.forget();
    Ok(())
}

pub fn wire_resize(window: &web::Window, cube: &SharedCube) {
    let device = BrowserDevice::new(window);
    let cube = cube.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        cube.borrow_mut().handle_resize(&device);
    });
}
