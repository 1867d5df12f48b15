use crate::constants::{
    CUBE_FACE_ATTR, CUBE_FACE_SELECTOR, CUBE_RESET_SELECTOR, CUBE_TOGGLE_SELECTOR,
    TOGGLE_LABEL_OFF, TOGGLE_LABEL_ON,
};
use crate::dom;
use crate::frame::SharedCube;
use web_sys as web;

#[inline]
pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        TOGGLE_LABEL_ON
    } else {
        TOGGLE_LABEL_OFF
    }
}

/// Reset, auto-rotate toggle and face buttons. Each button gets the cube
/// handed in; missing buttons are simply not wired.
pub fn wire_cube_controls(document: &web::Document, cube: &SharedCube) {
    for el in dom::query_all(document, CUBE_RESET_SELECTOR) {
        let cube = cube.clone();
        dom::add_click_listener(&el, move || cube.borrow_mut().reset());
    }

    for el in dom::query_all(document, CUBE_TOGGLE_SELECTOR) {
        let cube = cube.clone();
        let button = el.clone();
        dom::add_click_listener(&el, move || {
            let enabled = cube.borrow_mut().toggle_auto_rotate();
            button.set_text_content(Some(toggle_label(enabled)));
        });
    }

    for el in dom::query_all(document, CUBE_FACE_SELECTOR) {
        let Some(face) = el.get_attribute(CUBE_FACE_ATTR) else {
            continue;
        };
        let cube = cube.clone();
        dom::add_click_listener(&el, move || cube.borrow_mut().rotate_to_face_named(&face));
    }
}
