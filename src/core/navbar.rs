use crate::core::constants::NAVBAR_COMPACT_SCROLL_Y;

/// Inline navbar styling for a scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub padding: &'static str,
    pub box_shadow: &'static str,
    pub background: &'static str,
}

pub const NAVBAR_RESTING: NavbarStyle = NavbarStyle {
    padding: "15px 0",
    box_shadow: "none",
    background: "rgba(10, 10, 22, 0.95)",
};

pub const NAVBAR_COMPACT: NavbarStyle = NavbarStyle {
    padding: "10px 0",
    box_shadow: "0 5px 30px rgba(0, 119, 255, 0.2)",
    background: "rgba(10, 10, 22, 0.98)",
};

#[inline]
pub fn navbar_style_for_scroll(scroll_y: f64) -> NavbarStyle {
    if scroll_y > NAVBAR_COMPACT_SCROLL_Y {
        NAVBAR_COMPACT
    } else {
        NAVBAR_RESTING
    }
}
