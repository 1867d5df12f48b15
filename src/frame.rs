use crate::core::{CubeConfig, CubeController, DeviceProbe, FrameHandle, FrameScheduler};
use crate::render::CssCube;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebCube = CubeController<CssCube, RafScheduler>;
pub type SharedCube = Rc<RefCell<WebCube>>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` scheduler. Every request reuses the single tick
/// closure stored in `tick`.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.tick.borrow();
        let tick = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Build the shared controller, arm its frame callback and start it.
pub fn mount_cube(window: &web::Window, target: CssCube, device: &impl DeviceProbe) -> SharedCube {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        window: window.clone(),
        tick: tick.clone(),
    };
    let cube = Rc::new(RefCell::new(CubeController::new(
        target,
        scheduler,
        CubeConfig::default(),
    )));

    // Weak so the frame callback never keeps a torn-down cube alive.
    let cube_for_tick = Rc::downgrade(&cube);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(cube) = cube_for_tick.upgrade() {
            cube.borrow_mut().tick();
        }
    }) as Box<dyn FnMut()>));

    cube.borrow_mut().initialize(device);
    cube
}
