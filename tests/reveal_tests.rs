// Host-side tests for reveal-on-scroll: stagger, one-shot latching, and the
// viewport predicate used by the scroll fallback.

mod common;

use bistro_core::constants::{CLASS_VISIBLE, REVEAL_STAGGER_MS};
use bistro_core::reveal::{in_stagger_set, sibling_index, stagger_delay_ms};
use bistro_core::viewport::{is_in_viewport, VerticalSpan};
use bistro_core::{RevealTracker, Surface, VirtualScheduler};
use common::FakeElement;
use std::rc::Rc;

#[test]
fn stagger_is_index_times_step() {
    for n in 0..8 {
        assert_eq!(stagger_delay_ms(Some(n), REVEAL_STAGGER_MS), n as u32 * 100);
    }
    assert_eq!(stagger_delay_ms(None, REVEAL_STAGGER_MS), 0);
}

#[test]
fn sibling_index_skips_non_animated_siblings() {
    let siblings = ["h2", "card", "p", "card", "card"];
    // Last child is the third animated sibling.
    let idx = sibling_index(
        siblings.iter().copied().enumerate(),
        &(4, "card"),
        |&(_, name)| name == "card",
    );
    assert_eq!(idx, Some(2));
}

// Mirrors the web side: elements outside the stagger set get no position.
fn stagger_delay_for(siblings: &[&'static str], target: usize) -> u32 {
    let in_set = |i: usize| in_stagger_set(siblings[i].split_whitespace());
    let index = if in_set(target) {
        sibling_index(0..siblings.len(), &target, |&i| in_set(i))
    } else {
        None
    };
    stagger_delay_ms(index, REVEAL_STAGGER_MS)
}

#[test]
fn about_blocks_start_without_delay() {
    let about = ["about-content", "about-image"];
    assert_eq!(stagger_delay_for(&about, 0), 0);
    assert_eq!(stagger_delay_for(&about, 1), 0);
}

#[test]
fn cards_and_gallery_items_stagger_by_position() {
    let grid = ["section-title", "menu-card", "menu-card featured", "menu-card"];
    assert_eq!(stagger_delay_for(&grid, 1), 0);
    assert_eq!(stagger_delay_for(&grid, 2), 100);
    assert_eq!(stagger_delay_for(&grid, 3), 200);

    let gallery = ["gallery-item", "gallery-item", "gallery-item", "gallery-item"];
    assert_eq!(stagger_delay_for(&gallery, 3), 300);
}

#[test]
fn stagger_set_is_cards_and_gallery_items_only() {
    assert!(in_stagger_set("menu-card".split_whitespace()));
    assert!(in_stagger_set("gallery-item wide".split_whitespace()));
    assert!(!in_stagger_set("about-image".split_whitespace()));
    assert!(!in_stagger_set("about-content visible".split_whitespace()));
}

#[test]
fn tracker_reports_completion_once_all_latched() {
    let sched = VirtualScheduler::new();
    let mut tracker = RevealTracker::new();
    assert!(!tracker.is_complete(2));
    tracker.trigger(0usize, Rc::new(FakeElement::new()), 0, &sched);
    assert!(!tracker.is_complete(2));
    tracker.trigger(1usize, Rc::new(FakeElement::new()), 0, &sched);
    assert!(tracker.is_complete(2));
    assert!(RevealTracker::<usize>::new().is_complete(0));
}

#[test]
fn sibling_index_is_none_for_unmatched_target() {
    let siblings = vec![1, 2, 3];
    assert_eq!(sibling_index(siblings, &9, |_| true), None);
    assert_eq!(sibling_index(vec![1, 2, 3], &2, |v| *v != 2), None);
}

#[test]
fn element_is_marked_visible_after_its_delay() {
    let sched = VirtualScheduler::new();
    let mut tracker = RevealTracker::new();
    let el = Rc::new(FakeElement::new());

    assert!(tracker.trigger(0usize, el.clone(), 300, &sched));
    sched.advance(299);
    assert!(!el.has_class(CLASS_VISIBLE));
    sched.advance(1);
    assert!(el.has_class(CLASS_VISIBLE));
}

#[test]
fn each_element_triggers_exactly_once() {
    let sched = VirtualScheduler::new();
    let mut tracker = RevealTracker::new();
    let el = Rc::new(FakeElement::new());

    assert!(tracker.trigger(3usize, el.clone(), 0, &sched));
    sched.advance(0);
    assert!(el.has_class(CLASS_VISIBLE));

    // Leaving and re-entering the viewport must not schedule again.
    for _ in 0..5 {
        assert!(!tracker.trigger(3usize, el.clone(), 0, &sched));
    }
    assert_eq!(sched.pending(), 0);
    assert_eq!(tracker.triggered_count(), 1);

    // Something else removing the class is not undone by the tracker.
    el.remove_class(CLASS_VISIBLE);
    tracker.trigger(3usize, el.clone(), 0, &sched);
    sched.advance(10);
    assert!(!el.has_class(CLASS_VISIBLE));
}

#[test]
fn staggered_siblings_reveal_in_order() {
    let sched = VirtualScheduler::new();
    let mut tracker = RevealTracker::new();
    let cards: Vec<Rc<FakeElement>> = (0..3).map(|_| Rc::new(FakeElement::new())).collect();
    for (i, card) in cards.iter().enumerate() {
        let delay = stagger_delay_ms(Some(i), REVEAL_STAGGER_MS);
        tracker.trigger(i, card.clone(), delay, &sched);
    }
    let visible = |cards: &[Rc<FakeElement>]| {
        cards.iter().filter(|c| c.has_class(CLASS_VISIBLE)).count()
    };

    sched.advance(0);
    assert_eq!(visible(&cards), 1);
    sched.advance(100);
    assert_eq!(visible(&cards), 2);
    sched.advance(100);
    assert_eq!(visible(&cards), 3);
}

#[test]
fn viewport_predicate_matches_formula() {
    let h = 800.0;
    let offsets = [0.0, 0.15, 0.5, 1.0];
    let spans = [
        (0.0, 100.0),
        (679.0, 900.0),
        (680.0, 900.0),
        (681.0, 900.0),
        (-200.0, -1.0),
        (-200.0, 0.0),
        (400.0, 500.0),
        (801.0, 1000.0),
    ];
    for &offset in &offsets {
        for &(top, bottom) in &spans {
            let expected = top <= h * (1.0 - offset) && bottom >= 0.0;
            assert_eq!(
                is_in_viewport(VerticalSpan { top, bottom }, h, offset),
                expected,
                "top={top} bottom={bottom} offset={offset}"
            );
        }
    }
}

#[test]
fn viewport_default_offset_boundary() {
    let span = |top| VerticalSpan { top, bottom: top + 50.0 };
    assert!(is_in_viewport(span(680.0), 800.0, 0.15));
    assert!(!is_in_viewport(span(680.5), 800.0, 0.15));
}
