// Tuning constants for the cube widget and the page effects.
//
// These keep magic numbers out of the behavior code. The web shell and the
// host-side tests both read them from here.

// Cube orientation (degrees)
pub const DEFAULT_ROTATION_X: f64 = -15.0;
pub const DEFAULT_ROTATION_Y: f64 = -15.0;
pub const ROTATION_X_MIN: f64 = -90.0; // keeps the cube from flipping upside-down
pub const ROTATION_X_MAX: f64 = 90.0;

// Sensitivity (degrees per pixel of drag, degrees per frame of auto-rotation)
pub const POINTER_DRAG_SPEED: f64 = 0.5;
pub const TOUCH_DRAG_SPEED: f64 = 0.3;
pub const WIDE_AUTO_ROTATION_SPEED: f64 = 0.5;
pub const NARROW_AUTO_ROTATION_SPEED: f64 = 0.3;
pub const NARROW_VIEWPORT_MAX_PX: f64 = 768.0; // widths below this count as narrow

// Literal face table: (name, rotation_x, rotation_y)
pub const FACE_ROTATIONS: [(&str, f64, f64); 6] = [
    ("front", -15.0, 0.0),
    ("back", -15.0, 180.0),
    ("right", -15.0, 90.0),
    ("left", -15.0, -90.0),
    ("top", -90.0, 0.0),
    ("bottom", 90.0, 0.0),
];

// Mouse button that starts a drag
pub const PRIMARY_MOUSE_BUTTON: i16 = 0;
// Pointer id recorded for mouse sessions (touch sessions use the touch identifier)
pub const MOUSE_POINTER_ID: i32 = 1;

// Background particles
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_SIZE_MIN_PX: f64 = 2.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 5.0;
pub const PARTICLE_DURATION_MIN_S: f64 = 10.0;
pub const PARTICLE_DURATION_SPAN_S: f64 = 20.0;
pub const PARTICLE_DELAY_MAX_S: f64 = 5.0;
pub const PARTICLE_COLORS: [&str; 3] = ["#00e5ff", "#0077ff", "#7700ff"];

// Contact form simulation
pub const CONTACT_SENDING_MS: u32 = 2000;
pub const CONTACT_SENT_MS: u32 = 2000;
pub const CONTACT_SENT_BACKGROUND: &str = "linear-gradient(90deg, #00ff9d, #00a86b)";
pub const CONTACT_THANK_YOU: &str = "Thank you for your message! I will get back to you soon.";

// Navigation
pub const NAVBAR_COMPACT_SCROLL_Y: f64 = 50.0; // strictly above this the navbar compacts
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0; // height of the fixed navbar

// Timeline reveal
pub const TIMELINE_REVEAL_THRESHOLD: f64 = 0.3;

// Project card stacking
pub const CARD_HOVER_Z_INDEX: &str = "10";
pub const CARD_REST_Z_INDEX: &str = "1";
