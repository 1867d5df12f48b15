use crate::constants::{CONTACT_BUTTON_SELECTOR, CONTACT_FORM_ID};
use crate::core::constants::CONTACT_THANK_YOU;
use crate::core::contact::ContactFlow;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct ContactWiring {
    window: web::Window,
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
    flow: Rc<RefCell<ContactFlow>>,
}

pub fn wire_contact_form(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let form = dom::html_element_by_id(document, CONTACT_FORM_ID)?
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a form", CONTACT_FORM_ID))?;
    let button = form
        .query_selector(CONTACT_BUTTON_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
        .ok_or_else(|| anyhow::anyhow!("missing {} in contact form", CONTACT_BUTTON_SELECTOR))?;

    let w = ContactWiring {
        window: window.clone(),
        form: form.clone(),
        button,
        flow: Rc::new(RefCell::new(ContactFlow::default())),
    };
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let started = w.flow.borrow_mut().submit(&w.button.inner_html());
        if started {
            log::info!("[contact] simulated submit");
            apply_phase(&w);
        }
    });
    Ok(())
}

fn apply_phase(w: &ContactWiring) {
    let (phase, html, delivered) = {
        let flow = w.flow.borrow();
        (flow.phase(), flow.button_html().to_string(), flow.delivered())
    };
    w.button.set_inner_html(&html);
    w.button.set_disabled(phase.disabled());
    dom::set_style(&w.button, "background", phase.background());

    match phase.hold_ms() {
        Some(ms) => schedule_advance(w, ms),
        None if delivered => {
            w.form.reset();
            _ = w.window.alert_with_message(CONTACT_THANK_YOU);
        }
        None => {}
    }
}

fn schedule_advance(w: &ContactWiring, ms: u32) {
    let next = w.clone();
    let callback = Closure::once_into_js(move || {
        let entered = next.flow.borrow_mut().advance();
        log::debug!("[contact] phase {:?}", entered);
        apply_phase(&next);
    });
    if let Err(e) = w
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms as i32)
    {
        log::warn!("[contact] setTimeout failed: {:?}", e);
        w.flow.borrow_mut().abort();
        apply_phase(w);
    }
}
