use crate::core::constants::ANCHOR_SCROLL_OFFSET_PX;

/// Selector of the in-page target for an anchor `href`, if it has one.
///
/// A bare `#` links to nothing; anything not starting with `#` is not an
/// in-page link.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Scroll position that puts a section's top just below the fixed navbar.
#[inline]
pub fn scroll_top_for(offset_top: f64) -> f64 {
    (offset_top - ANCHOR_SCROLL_OFFSET_PX).max(0.0)
}
