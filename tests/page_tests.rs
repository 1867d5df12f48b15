// Host-side tests for the peripheral page models (particles, contact form,
// navbar, anchor scrolling) and the page error type.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod contact {
        include!("../src/core/contact.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod navbar {
        include!("../src/core/navbar.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::constants::*;
use crate::core::contact::*;
use crate::core::error::PageError;
use crate::core::navbar::*;
use crate::core::particles::*;
use crate::core::scroll::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn particles_stay_within_declared_ranges() {
    let mut rng = StdRng::seed_from_u64(1);
    let particles = generate_particles(&mut rng, 500);
    assert_eq!(particles.len(), 500);
    for p in &particles {
        assert!(p.size_px >= 2.0 && p.size_px < 7.0, "size {}", p.size_px);
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!(p.duration_s >= 10.0 && p.duration_s < 30.0);
        assert!(p.delay_s >= 0.0 && p.delay_s < 5.0);
        assert!(PARTICLE_COLORS.contains(&p.color));
    }
}

#[test]
fn particles_use_every_palette_color() {
    let mut rng = StdRng::seed_from_u64(99);
    let particles = generate_particles(&mut rng, PARTICLE_COUNT);
    for color in PARTICLE_COLORS {
        assert!(
            particles.iter().any(|p| p.color == color),
            "{color} never picked"
        );
    }
}

#[test]
fn particle_generation_is_deterministic_per_seed() {
    let a = generate_particles(&mut StdRng::seed_from_u64(5), 10);
    let b = generate_particles(&mut StdRng::seed_from_u64(5), 10);
    assert_eq!(a, b);
}

#[test]
fn particle_style_properties_are_css_ready() {
    let p = ParticleSpec {
        size_px: 4.0,
        left_pct: 12.5,
        top_pct: 80.0,
        duration_s: 15.0,
        delay_s: 2.5,
        color: "#0077ff",
    };
    let props = p.style_properties();
    let get = |name: &str| -> String {
        props
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    assert_eq!(get("width"), "4px");
    assert_eq!(get("height"), "4px");
    assert_eq!(get("left"), "12.5%");
    assert_eq!(get("top"), "80%");
    assert_eq!(get("animation-duration"), "15s");
    assert_eq!(get("animation-delay"), "2.5s");
    assert_eq!(get("background"), "#0077ff");
    assert_eq!(get("box-shadow"), "0 0 10px #0077ff");
}

#[test]
fn contact_flow_cycles_through_phases() {
    let mut flow = ContactFlow::default();
    assert_eq!(flow.phase(), SubmitPhase::Idle);
    assert!(flow.submit("Send Message"));

    assert_eq!(flow.phase(), SubmitPhase::Sending);
    assert_eq!(flow.button_html(), SENDING_HTML);
    assert!(flow.phase().disabled());
    assert_eq!(flow.phase().hold_ms(), Some(CONTACT_SENDING_MS));
    assert_eq!(flow.phase().background(), "");

    assert_eq!(flow.advance(), SubmitPhase::Sent);
    assert_eq!(flow.button_html(), SENT_HTML);
    assert!(flow.phase().disabled());
    assert_eq!(flow.phase().hold_ms(), Some(CONTACT_SENT_MS));
    assert_eq!(flow.phase().background(), CONTACT_SENT_BACKGROUND);

    assert!(!flow.delivered());
    assert_eq!(flow.advance(), SubmitPhase::Idle);
    assert!(flow.delivered());
    assert_eq!(flow.button_html(), "Send Message");
    assert!(!flow.phase().disabled());
    assert_eq!(flow.phase().hold_ms(), None);
}

#[test]
fn contact_resubmit_is_ignored_while_in_flight() {
    let mut flow = ContactFlow::default();
    assert!(flow.submit("Send"));
    assert!(!flow.submit(SENDING_HTML));
    flow.advance();
    assert!(!flow.submit(SENT_HTML));
    flow.advance();
    // The original label survives the round trip.
    assert_eq!(flow.button_html(), "Send");
    assert!(flow.submit("Send"));
}

#[test]
fn contact_abort_restores_label() {
    let mut flow = ContactFlow::default();
    flow.submit("<i class=\"fas fa-paper-plane\"></i> Send");
    flow.abort();
    assert_eq!(flow.phase(), SubmitPhase::Idle);
    assert_eq!(flow.button_html(), "<i class=\"fas fa-paper-plane\"></i> Send");
    assert!(!flow.delivered());
}

#[test]
fn aborted_submission_is_not_confirmed() {
    let mut flow = ContactFlow::default();
    assert!(!flow.delivered());

    // A full round first, so an earlier success cannot leak into the abort.
    flow.submit("Send");
    flow.advance();
    flow.advance();
    assert!(flow.delivered());

    flow.submit("Send");
    assert!(!flow.delivered());
    flow.advance();
    flow.abort();
    assert_eq!(flow.phase(), SubmitPhase::Idle);
    assert!(!flow.phase().disabled());
    assert_eq!(flow.phase().background(), "");
    assert!(!flow.delivered());
}

#[test]
fn navbar_compacts_strictly_above_threshold() {
    assert_eq!(navbar_style_for_scroll(0.0), NAVBAR_RESTING);
    assert_eq!(navbar_style_for_scroll(50.0), NAVBAR_RESTING);
    assert_eq!(navbar_style_for_scroll(50.5), NAVBAR_COMPACT);
    assert_eq!(navbar_style_for_scroll(4000.0), NAVBAR_COMPACT);
    assert_eq!(NAVBAR_COMPACT.padding, "10px 0");
    assert_eq!(NAVBAR_RESTING.box_shadow, "none");
}

#[test]
fn anchor_target_filters_hrefs() {
    assert_eq!(anchor_target("#about"), Some("#about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://example.com/#about"), None);
}

#[test]
fn scroll_top_leaves_room_for_navbar() {
    assert_eq!(scroll_top_for(500.0), 420.0);
    assert_eq!(scroll_top_for(80.0), 0.0);
    assert_eq!(scroll_top_for(10.0), 0.0);
}

#[test]
fn page_errors_name_what_is_missing() {
    let err = PageError::missing("#cube");
    assert_eq!(err, PageError::MissingElement("#cube".to_string()));
    assert_eq!(err.to_string(), "missing element #cube");
    assert_eq!(PageError::js("TypeError").to_string(), "js error: TypeError");
    assert_eq!(PageError::NoDocument.to_string(), "no document");
}
