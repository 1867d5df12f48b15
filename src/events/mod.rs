pub mod controls;
pub mod pointer;
pub mod visibility;

pub use controls::wire_cube_controls;
pub use pointer::{wire_input_handlers, InputWiring};
pub use visibility::{shared_view, wire_page_visibility, wire_resize, wire_viewport_intersection};
