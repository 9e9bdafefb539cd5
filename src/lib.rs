#![cfg(target_arch = "wasm32")]
use bistro_core::SiteConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    let config = SiteConfig::default();
    config.validate()?;

    // Device mode is fixed for the page session.
    let mode = dom::detect_device_mode(&window);
    log::debug!("[init] device mode {:?}", mode);
    if mode.supports_hover() {
        events::pointer::wire_parallax(&document, &config.parallax);
        events::pointer::wire_card_glow(&document);
    } else {
        events::touch::wire_touch_feedback(&document, &config.touch);
    }

    events::scroll::wire_nav_toggle(&window, &document, &config.nav);
    events::reveal::wire_reveal(&window, &document, &config.reveal);
    events::scroll::wire_anchor_links(&document);
    events::visibility::wire_motion_throttle(&document, &config.motion);

    log::info!("bistro-web: page enhancements ready");
    Ok(())
}
