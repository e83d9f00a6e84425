//! WASM entry points and browser adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! wasm-bindgen modules are fetched and instantiated asynchronously, so
//! `start` may run after the first paint. The pre-paint guarantee comes from
//! the blocking inline script produced by [`crate::theme::head_script`]
//! (emitted by the `theme-head-script` binary), which sets the root element
//! before the body renders. `start` then builds the controller, which
//! re-applies the identical state, and wires listeners once the DOM is ready.

pub mod clipboard;
pub mod document;
pub mod menu;
pub mod storage;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;

const CONFIG_ATTRIBUTE: &str = "data-site-config";

/// Module start: logging, controller hand-over, then post-ready wiring.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = load_config();
    let level = config.log_level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    let controller = theme::load(&config.theme);
    log::debug!("theme controller started with {:?}", controller.borrow().applied());

    on_ready(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        theme::attach(&controller, &document, &config.theme);
        menu::attach_menu(&document, &config.menu);
        menu::attach_language(&document, &config.language);
        clipboard::attach(&document, &config.clipboard);
    });
}

/// Apply the stored/OS theme without wiring any listener.
///
/// For pages that need the theme but no interaction, e.g. print views. Not a
/// substitute for the inline head script.
#[wasm_bindgen(js_name = loadTheme)]
pub fn load_theme() {
    let config = load_config();
    theme::load(&config.theme);
}

/// Read overrides from `<html data-site-config='{...}'>`, else defaults.
fn load_config() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let Some(raw) = raw else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not installed yet at this point.
            web_sys::console::warn_1(&JsValue::from_str(&format!("{e}; using defaults")));
            SiteConfig::default()
        }
    }
}

/// Run `f` once the DOM is parsed (immediately if it already is).
fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}

/// Add a page-lifetime event listener.
fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()).is_err() {
        log::warn!("failed to attach {event} listener");
    }
    cb.forget();
}
