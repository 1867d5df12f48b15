use crate::core::PageError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window, PageError> {
    web::window().ok_or(PageError::NoWindow)
}

#[inline]
pub fn window_document() -> Result<web::Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn html_element_by_id(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlElement, PageError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| PageError::missing(&format!("#{}", id)))
}

pub fn query_html(
    document: &web::Document,
    selector: &str,
) -> Result<web::HtmlElement, PageError> {
    document
        .query_selector(selector)
        .map_err(|e| PageError::js(format!("{:?}", e)))?
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| PageError::missing(selector))
}

/// Every element matching `selector`; an invalid selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a listener that lives for the page's lifetime.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`add_listener`] but registered non-passive so the handler may call
/// `preventDefault` on touch events.
pub fn add_active_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    add_listener(element, "click", move |_: web::Event| handler());
}

#[inline]
pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("set {} failed: {:?}", property, e);
    }
}
