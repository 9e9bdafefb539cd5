use crate::constants::{ANCHOR_SELECTOR, NAV_SELECTOR};
use crate::dom::{self, DomElement, WebScheduler};
use bistro_core::{anchor, nav, throttle, NavConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_nav_toggle(window: &web::Window, document: &web::Document, cfg: &NavConfig) {
    let Some(nav_el) = dom::query_one(document, NAV_SELECTOR) else {
        log::debug!("[nav] no nav element");
        return;
    };
    let nav_el = DomElement(nav_el);
    let threshold = cfg.scroll_threshold;

    // Settle the initial state before the first scroll event.
    nav::apply(&nav_el, dom::scroll_y(window), threshold);

    let wnd = window.clone();
    let mut on_scroll = throttle(
        move |_ev: web::Event| {
            nav::apply(&nav_el, dom::scroll_y(&wnd), threshold);
        },
        cfg.interval_ms,
        WebScheduler,
    );
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        on_scroll(ev);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same-page links scroll smoothly and stop short of the fixed nav bar.
pub fn wire_anchor_links(document: &web::Document) {
    for link in dom::query_all(document, ANCHOR_SELECTOR) {
        let href_source = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = href_source.get_attribute("href").unwrap_or_default();
            scroll_to_fragment(&href);
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn scroll_to_fragment(href: &str) {
    let Some(id) = anchor::fragment_id(href) else {
        return;
    };
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    let nav_height = dom::query_one(&document, NAV_SELECTOR)
        .map(|n| n.offset_height() as f64)
        .unwrap_or(0.0);
    let top = anchor::scroll_destination(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(&window),
        nav_height,
    );
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
