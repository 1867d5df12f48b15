//! Page behaviors that do not depend on the cube. Each is wired on its own
//! so one failing never stops the others.

pub mod cards;
pub mod contact;
pub mod nav;
pub mod particles;
pub mod timeline;

pub use cards::wire_project_cards;
pub use contact::wire_contact_form;
pub use nav::{wire_navbar_scroll, wire_smooth_scroll};
pub use particles::spawn_particles;
pub use timeline::observe_timeline;
