// DOM hooks the page markup provides. Kept here so markup changes touch one
// file.

// Cube widget
pub const CUBE_ID: &str = "cube";
pub const CUBE_CONTAINER_ID: &str = "cubeContainer";
pub const DRAGGING_CLASS: &str = "dragging";
pub const CUBE_ACTION_ATTR: &str = "data-cube-action";
pub const CUBE_FACE_ATTR: &str = "data-cube-face";
pub const CUBE_RESET_SELECTOR: &str = "[data-cube-action=\"reset\"]";
pub const CUBE_TOGGLE_SELECTOR: &str = "[data-cube-action=\"toggle\"]";
pub const CUBE_FACE_SELECTOR: &str = "[data-cube-face]";
pub const TOGGLE_LABEL_ON: &str = "Stop Rotation";
pub const TOGGLE_LABEL_OFF: &str = "Auto Rotate";

// Background
pub const PARTICLES_ID: &str = "particles";
pub const PARTICLE_CLASS: &str = "particle";

// Timeline
pub const TIMELINE_ITEM_SELECTOR: &str = ".timeline-item";
pub const VISIBLE_CLASS: &str = "visible";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_BUTTON_SELECTOR: &str = ".btn-primary";

// Navigation
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
