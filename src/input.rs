use crate::core::{DeviceProbe, InputEvent, TouchPoint};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Device class and viewport read straight from the browser.
pub struct BrowserDevice {
    window: web::Window,
}

impl BrowserDevice {
    pub fn new(window: &web::Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl DeviceProbe for BrowserDevice {
    fn supports_touch(&self) -> bool {
        self.window.navigator().max_touch_points() > 0
            || js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart"))
                .unwrap_or(false)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }
}

// ---------------- DOM -> InputEvent ----------------
#[inline]
pub fn mouse_down(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::MouseDown {
        button: ev.button(),
        x: ev.client_x() as f64,
        y: ev.client_y() as f64,
    }
}

#[inline]
pub fn mouse_move(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::MouseMove {
        x: ev.client_x() as f64,
        y: ev.client_y() as f64,
    }
}

pub fn touch_points(list: &web::TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint {
            id: t.identifier(),
            x: t.client_x() as f64,
            y: t.client_y() as f64,
        })
        .collect()
}

#[inline]
pub fn touch_start(ev: &web::TouchEvent) -> InputEvent {
    InputEvent::TouchStart {
        touches: touch_points(&ev.touches()),
    }
}

#[inline]
pub fn touch_move(ev: &web::TouchEvent) -> InputEvent {
    InputEvent::TouchMove {
        touches: touch_points(&ev.touches()),
    }
}

#[inline]
pub fn touch_end(ev: &web::TouchEvent) -> InputEvent {
    InputEvent::TouchEnd {
        remaining: ev.touches().length() as usize,
    }
}
