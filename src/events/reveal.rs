//! Reveal-on-scroll. Each element is tagged with its index in
//! `data-reveal-id`; the shared tracker latches indices so an element is
//! scheduled at most once, whichever path sees it first.

use crate::constants::{
    INTERSECTION_OBSERVER_PROBE, REVEAL_ID_ATTR, REVEAL_SELECTOR, STAGGER_SELECTOR,
};
use crate::dom::{self, DomElement, WebScheduler};
use bistro_core::reveal::{sibling_index, stagger_delay_ms};
use bistro_core::viewport::{is_in_viewport, VerticalSpan};
use bistro_core::{throttle, RevealConfig, RevealTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type Targets = Rc<Vec<Rc<DomElement>>>;
type Tracker = Rc<RefCell<RevealTracker<usize>>>;

pub fn wire_reveal(window: &web::Window, document: &web::Document, cfg: &RevealConfig) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    for (id, el) in elements.iter().enumerate() {
        _ = el.set_attribute(REVEAL_ID_ATTR, &id.to_string());
    }
    let targets: Targets = Rc::new(
        elements
            .into_iter()
            .map(|el| Rc::new(DomElement(el)))
            .collect(),
    );
    let tracker: Tracker = Rc::new(RefCell::new(RevealTracker::new()));

    if dom::has_global(window, INTERSECTION_OBSERVER_PROBE) {
        match observe(cfg, targets.clone(), tracker.clone()) {
            Ok(()) => return,
            Err(e) => log::warn!("[reveal] observer unavailable ({:?}); using scroll fallback", e),
        }
    } else {
        log::debug!("[reveal] no IntersectionObserver; using scroll fallback");
    }
    wire_scroll_fallback(window, cfg, targets, tracker);
}

/// Index among the parent's children that carry a stagger class. `None` for
/// elements outside the stagger set, such as the about blocks.
fn sibling_position(el: &web::HtmlElement) -> Option<usize> {
    if !el.matches(STAGGER_SELECTOR).unwrap_or(false) {
        return None;
    }
    let parent = el.parent_element()?;
    let children = parent.children();
    let target: &web::Element = el;
    sibling_index(
        (0..children.length()).filter_map(|i| children.item(i)),
        target,
        |s| s.matches(STAGGER_SELECTOR).unwrap_or(false),
    )
}

fn reveal_element(
    tracker: &RefCell<RevealTracker<usize>>,
    id: usize,
    el: &Rc<DomElement>,
    stagger_ms: u32,
) {
    if tracker.borrow().is_triggered(&id) {
        return;
    }
    let delay = stagger_delay_ms(sibling_position(&el.0), stagger_ms);
    tracker.borrow_mut().trigger(id, el.clone(), delay, &WebScheduler);
}

fn reveal_id(el: &web::Element) -> Option<usize> {
    el.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}

fn observe(cfg: &RevealConfig, targets: Targets, tracker: Tracker) -> Result<(), JsValue> {
    let stagger_ms = cfg.stagger_ms;
    let lookup = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(id) = reveal_id(&target) else {
                    continue;
                };
                if let Some(el) = lookup.get(id) {
                    reveal_element(&tracker, id, el, stagger_ms);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(cfg.threshold));
    options.set_root_margin(&cfg.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in targets.iter() {
        observer.observe(&el.0);
    }
    callback.forget();
    Ok(())
}

fn wire_scroll_fallback(
    window: &web::Window,
    cfg: &RevealConfig,
    targets: Targets,
    tracker: Tracker,
) {
    let offset = cfg.fallback_offset;
    let stagger_ms = cfg.stagger_ms;
    let wnd = window.clone();
    let check = move || {
        if tracker.borrow().is_complete(targets.len()) {
            return;
        }
        let height = dom::inner_height(&wnd);
        for (id, el) in targets.iter().enumerate() {
            if tracker.borrow().is_triggered(&id) {
                continue;
            }
            let rect = el.rect();
            let span = VerticalSpan {
                top: rect.top,
                bottom: rect.bottom(),
            };
            if is_in_viewport(span, height, offset) {
                reveal_element(&tracker, id, el, stagger_ms);
            }
        }
    };
    check();

    let mut on_scroll = throttle(
        move |_ev: web::Event| check(),
        cfg.fallback_interval_ms,
        WebScheduler,
    );
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        on_scroll(ev);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
