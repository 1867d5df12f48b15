use crate::constants::{TIMELINE_ITEM_SELECTOR, VISIBLE_CLASS};
use crate::core::constants::TIMELINE_REVEAL_THRESHOLD;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Reveal each timeline item the first time enough of it scrolls into view.
pub fn observe_timeline(document: &web::Document) -> anyhow::Result<()> {
    let items = dom::query_all(document, TIMELINE_ITEM_SELECTOR);
    if items.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                if entry.is_intersecting() {
                    _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                }
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(TIMELINE_REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for item in &items {
        observer.observe(item);
    }
    callback.forget();
    log::debug!("[page] observing {} timeline items", items.len());
    Ok(())
}
