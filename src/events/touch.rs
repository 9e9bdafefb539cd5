use crate::constants::CARD_SELECTOR;
use crate::dom::{self, DomElement, WebScheduler};
use bistro_core::{touch, TouchConfig};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Touch-only branch: tag the body and give cards tap feedback in place of
/// hover.
pub fn wire_touch_feedback(document: &web::Document, cfg: &TouchConfig) {
    if let Some(body) = document.body() {
        touch::mark_device(&DomElement(body));
    }
    let opts = dom::passive_listener();
    for card in dom::query_all(document, CARD_SELECTOR) {
        let target = card.clone();
        let card = Rc::new(DomElement(card));

        let pressed = card.clone();
        let start = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            touch::press(&pressed);
        }) as Box<dyn FnMut(_)>);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            start.as_ref().unchecked_ref(),
            &opts,
        );
        start.forget();

        let delay_ms = cfg.release_delay_ms;
        let end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            touch::release(card.clone(), delay_ms, &WebScheduler);
        }) as Box<dyn FnMut(_)>);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "touchend",
            end.as_ref().unchecked_ref(),
            &opts,
        );
        end.forget();
    }
}
