use crate::dom::DomElement;
use bistro_core::{motion, MotionConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Zero the transition durations while the tab is hidden. Timers and the
// reveal observer keep running.
pub fn wire_motion_throttle(document: &web::Document, cfg: &MotionConfig) {
    let Some(body) = document.body() else {
        return;
    };
    let body = DomElement(body);
    let doc = document.clone();
    let cfg = cfg.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        motion::apply(&body, doc.hidden(), &cfg);
    }) as Box<dyn FnMut(_)>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
