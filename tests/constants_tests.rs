// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn speeds_are_positive_and_touch_is_gentler() {
    assert!(POINTER_DRAG_SPEED > 0.0);
    assert!(TOUCH_DRAG_SPEED > 0.0);
    assert!(TOUCH_DRAG_SPEED < POINTER_DRAG_SPEED);
    assert!(NARROW_AUTO_ROTATION_SPEED > 0.0);
    assert!(NARROW_AUTO_ROTATION_SPEED < WIDE_AUTO_ROTATION_SPEED);
    assert!(NARROW_VIEWPORT_MAX_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_orientation_is_inside_clamp() {
    assert!(ROTATION_X_MIN < ROTATION_X_MAX);
    assert!(DEFAULT_ROTATION_X >= ROTATION_X_MIN && DEFAULT_ROTATION_X <= ROTATION_X_MAX);
}

#[test]
fn face_table_is_complete_and_within_clamp() {
    let mut names: Vec<&str> = FACE_ROTATIONS.iter().map(|(n, _, _)| *n).collect();
    names.sort_unstable();
    assert_eq!(names, ["back", "bottom", "front", "left", "right", "top"]);
    for (name, x, _) in FACE_ROTATIONS {
        assert!((ROTATION_X_MIN..=ROTATION_X_MAX).contains(&x), "{name}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_sane() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SIZE_MIN_PX > 0.0 && PARTICLE_SIZE_SPAN_PX > 0.0);
    assert!(PARTICLE_DURATION_MIN_S > PARTICLE_DELAY_MAX_S);
    assert_eq!(PARTICLE_COLORS.len(), 3);
    assert!(PARTICLE_COLORS.iter().all(|c| c.starts_with('#') && c.len() == 7));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_thresholds_are_sane() {
    assert!(TIMELINE_REVEAL_THRESHOLD > 0.0 && TIMELINE_REVEAL_THRESHOLD <= 1.0);
    assert!(NAVBAR_COMPACT_SCROLL_Y >= 0.0);
    assert!(ANCHOR_SCROLL_OFFSET_PX > 0.0);
    assert!(CONTACT_SENDING_MS > 0 && CONTACT_SENT_MS > 0);
}

#[test]
fn selectors_and_labels_are_distinct() {
    assert_ne!(TOGGLE_LABEL_ON, TOGGLE_LABEL_OFF);
    assert_ne!(CUBE_RESET_SELECTOR, CUBE_TOGGLE_SELECTOR);
    assert!(CUBE_FACE_SELECTOR.contains(CUBE_FACE_ATTR));
    assert!(CUBE_RESET_SELECTOR.contains(CUBE_ACTION_ATTR));
    assert!(ANCHOR_SELECTOR.starts_with("a["));
}
