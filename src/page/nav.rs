use crate::constants::{ANCHOR_SELECTOR, NAVBAR_SELECTOR};
use crate::core::navbar::navbar_style_for_scroll;
use crate::core::scroll::{anchor_target, scroll_top_for};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// In-page anchors scroll smoothly to their section, leaving room for the
/// fixed navbar.
pub fn wire_smooth_scroll(window: &web::Window, document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let target = document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
            if let Some(target) = target {
                let options = web::ScrollToOptions::new();
                options.set_top(scroll_top_for(target.offset_top() as f64));
                options.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            } else {
                log::debug!("[nav] no target for {}", href);
            }
        });
    }
}

pub fn wire_navbar_scroll(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let navbar = dom::query_html(document, NAVBAR_SELECTOR)?;
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let style = navbar_style_for_scroll(scroll_y);
        dom::set_style(&navbar, "padding", style.padding);
        dom::set_style(&navbar, "box-shadow", style.box_shadow);
        dom::set_style(&navbar, "background", style.background);
    });
    Ok(())
}
