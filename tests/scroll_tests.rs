// Host-side tests for scroll-driven behavior: nav state and anchor targets.

mod common;

use bistro_core::anchor::{fragment_id, scroll_destination};
use bistro_core::constants::CLASS_SCROLLED;
use bistro_core::{nav, NavState, Surface};
use common::FakeElement;

#[test]
fn nav_state_switches_strictly_above_threshold() {
    assert_eq!(NavState::for_scroll(0.0, 100.0), NavState::Plain);
    assert_eq!(NavState::for_scroll(100.0, 100.0), NavState::Plain);
    assert_eq!(NavState::for_scroll(100.5, 100.0), NavState::Scrolled);
    assert_eq!(NavState::for_scroll(2400.0, 100.0), NavState::Scrolled);
}

#[test]
fn nav_class_follows_scroll_both_ways() {
    let el = FakeElement::new();
    assert_eq!(nav::apply(&el, 250.0, 100.0), NavState::Scrolled);
    assert!(el.has_class(CLASS_SCROLLED));
    // Re-applying the same state is harmless.
    nav::apply(&el, 300.0, 100.0);
    assert_eq!(el.classes(), vec![CLASS_SCROLLED.to_string()]);

    assert_eq!(nav::apply(&el, 20.0, 100.0), NavState::Plain);
    assert!(!el.has_class(CLASS_SCROLLED));
}

#[test]
fn initial_state_is_settled_without_scrolling() {
    // Page restored mid-scroll: the eager pass must mark the nav right away.
    let el = FakeElement::new();
    nav::apply(&el, 640.0, 100.0);
    assert!(el.has_class(CLASS_SCROLLED));
}

#[test]
fn fragment_id_requires_leading_hash_and_a_name() {
    assert_eq!(fragment_id("#menu"), Some("menu"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
    assert_eq!(fragment_id("/about#menu"), None);
}

#[test]
fn destination_clears_the_nav_bar() {
    assert_eq!(scroll_destination(420.0, 1000.0, 80.0), 1340.0);
    // Target above the current viewport.
    assert_eq!(scroll_destination(-300.0, 1000.0, 80.0), 620.0);
}
