use crate::core::InputEvent;
use crate::dom;
use crate::frame::SharedCube;
use crate::input;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub cube: SharedCube,
}

/// Drag starts on the cube container; moves and releases are tracked on the
/// whole document so a drag survives leaving the cube.
pub fn wire_input_handlers(w: InputWiring) {
    wire_mouse(&w);
    wire_touch(&w);
    wire_context_menu(&w);
}

fn dispatch(cube: &SharedCube, event: &InputEvent, raw: &web::Event) {
    if cube.borrow_mut().handle_input(event) {
        raw.prevent_default();
    }
}

fn wire_mouse(w: &InputWiring) {
    let cube = w.cube.clone();
    dom::add_listener(&w.container, "mousedown", move |ev: web::MouseEvent| {
        dispatch(&cube, &input::mouse_down(&ev), &ev);
    });

    let cube = w.cube.clone();
    dom::add_listener(&w.document, "mousemove", move |ev: web::MouseEvent| {
        dispatch(&cube, &input::mouse_move(&ev), &ev);
    });

    let cube = w.cube.clone();
    dom::add_listener(&w.document, "mouseup", move |ev: web::MouseEvent| {
        dispatch(&cube, &InputEvent::MouseUp, &ev);
    });
}

fn wire_touch(w: &InputWiring) {
    let cube = w.cube.clone();
    dom::add_active_listener(&w.container, "touchstart", move |ev: web::TouchEvent| {
        dispatch(&cube, &input::touch_start(&ev), &ev);
    });

    let cube = w.cube.clone();
    dom::add_active_listener(&w.document, "touchmove", move |ev: web::TouchEvent| {
        dispatch(&cube, &input::touch_move(&ev), &ev);
    });

    let cube = w.cube.clone();
    dom::add_listener(&w.document, "touchend", move |ev: web::TouchEvent| {
        dispatch(&cube, &input::touch_end(&ev), &ev);
    });
}

fn wire_context_menu(w: &InputWiring) {
    let cube = w.cube.clone();
    dom::add_listener(&w.container, "contextmenu", move |ev: web::Event| {
        dispatch(&cube, &InputEvent::ContextMenu, &ev);
    });
}
