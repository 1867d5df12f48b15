// Pure page logic with no browser bindings. Host-side tests `include!` these
// files directly, so they must not carry inner attributes.

pub mod constants;
/// Simulated contact-form submission. Nothing is sent anywhere: the submit
/// button walks through a short "sending" and "sent" animation and the form
/// resets itself.
pub mod contact;
/// Cube interaction controller.
///
/// Owns the cube orientation and reconciles mouse drag, single-touch drag and
/// per-frame auto-rotation into one orientation. Rendering, frame scheduling
/// and device queries go through the [`RenderTarget`], [`FrameScheduler`] and
/// [`DeviceProbe`] capabilities, so the state machine never touches the DOM.
pub mod cube;
pub mod error;
pub mod navbar;
pub mod particles;
pub mod scroll;

pub use cube::*;
pub use error::PageError;
