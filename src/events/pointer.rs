use crate::constants::{CARD_SELECTOR, HERO_IMAGE_SELECTOR, HERO_SELECTOR};
use crate::dom::{self, DomElement, WebScheduler};
use bistro_core::{glow, parallax, throttle, ParallaxConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hero image follows the pointer while it is over the hero section.
/// Needs both `.hero` and `.hero-image`; otherwise does nothing.
pub fn wire_parallax(document: &web::Document, cfg: &ParallaxConfig) {
    let (Some(image), Some(section)) = (
        dom::query_one(document, HERO_IMAGE_SELECTOR),
        dom::query_one(document, HERO_SELECTOR),
    ) else {
        log::debug!("[parallax] hero markup absent; parallax disabled");
        return;
    };
    let image = DomElement(image);

    let move_image = image.clone();
    let move_section = section.clone();
    let move_cfg = cfg.clone();
    let mut on_move = throttle(
        move |ev: web::MouseEvent| {
            parallax::apply_pointer(
                &move_image,
                dom::client_point(&ev),
                dom::rect_of(&move_section),
                &move_cfg,
            );
        },
        cfg.interval_ms,
        WebScheduler,
    );
    let move_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        on_move(ev);
    }) as Box<dyn FnMut(_)>);
    _ = section.add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref());
    move_closure.forget();

    let leave_cfg = cfg.clone();
    let leave_closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        parallax::reset(&image, &leave_cfg);
    }) as Box<dyn FnMut(_)>);
    _ = section
        .add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref());
    leave_closure.forget();
}

pub fn wire_card_glow(document: &web::Document) {
    for card in dom::query_all(document, CARD_SELECTOR) {
        let card = DomElement(card);
        let target = card.0.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            glow::apply(&card, dom::client_point(&ev), card.rect());
        }) as Box<dyn FnMut(_)>);
        _ = target.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
