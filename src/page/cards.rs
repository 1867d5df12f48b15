use crate::constants::PROJECT_CARD_SELECTOR;
use crate::core::constants::{CARD_HOVER_Z_INDEX, CARD_REST_Z_INDEX};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lift a hovered project card above its neighbours.
pub fn wire_project_cards(document: &web::Document) {
    for card in dom::query_all(document, PROJECT_CARD_SELECTOR) {
        let Ok(card) = card.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let hovered = card.clone();
        dom::add_listener(&card, "mouseenter", move |_: web::Event| {
            dom::set_style(&hovered, "z-index", CARD_HOVER_Z_INDEX);
        });
        let left = card.clone();
        dom::add_listener(&card, "mouseleave", move |_: web::Event| {
            dom::set_style(&left, "z-index", CARD_REST_Z_INDEX);
        });
    }
}
