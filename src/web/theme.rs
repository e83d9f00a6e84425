//! Browser wiring for the theme controller.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;

use super::document::DocumentSurface;
use super::listen;
use super::storage::LocalStorage;
use crate::config::ThemeConfig;
use crate::theme::{ThemeController, ThemePreference, ThemePreferenceStore};

pub type BrowserThemeController = ThemeController<LocalStorage, DocumentSurface>;
pub type SharedThemeController = Rc<RefCell<BrowserThemeController>>;

fn color_scheme_query(query: &str) -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

/// Build the controller and apply the initial theme. Needs nothing but
/// `<html>`; normally confirms what the inline head script already set.
pub fn load(config: &ThemeConfig) -> SharedThemeController {
    let os_prefers_dark = color_scheme_query(&config.color_scheme_query).map_or(false, |mq| mq.matches());
    let store = ThemePreferenceStore::new(LocalStorage::open(), config.storage_key.as_str());
    let controller = ThemeController::new(store, DocumentSurface::new(config), os_prefers_dark);
    Rc::new(RefCell::new(controller))
}

/// Attach every theme listener. Call once the document is interactive.
pub fn attach(controller: &SharedThemeController, document: &web_sys::Document, config: &ThemeConfig) {
    // Icons exist now; bring them in line with the pre-paint state.
    {
        let mut c = controller.borrow_mut();
        let applied = c.applied();
        c.apply(applied);
    }

    attach_toggle(controller, document, config);
    attach_choices(controller, document, config);
    attach_color_scheme(controller, config);
    attach_storage(controller, config);
}

fn attach_toggle(controller: &SharedThemeController, document: &web_sys::Document, config: &ThemeConfig) {
    let Some(button) = document.get_element_by_id(&config.toggle_id) else {
        log::debug!("no #{} element, theme toggle disabled", config.toggle_id);
        return;
    };
    let controller = Rc::clone(controller);
    listen(&button, "click", move |_| {
        controller.borrow_mut().toggle();
    });
}

fn attach_choices(controller: &SharedThemeController, document: &web_sys::Document, config: &ThemeConfig) {
    let attribute = config.choice_attribute.clone();
    let Ok(nodes) = document.query_selector_all(&format!("[{attribute}]")) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let raw = element.get_attribute(&attribute).unwrap_or_default();
        let Some(preference) = ThemePreference::from_choice(&raw) else {
            log::warn!("ignoring {attribute}={raw:?}");
            continue;
        };
        let controller = Rc::clone(controller);
        listen(&element, "click", move |_| {
            controller.borrow_mut().choose(preference);
        });
    }
}

fn attach_color_scheme(controller: &SharedThemeController, config: &ThemeConfig) {
    let Some(query) = color_scheme_query(&config.color_scheme_query) else {
        log::debug!("matchMedia unavailable, OS theme changes ignored");
        return;
    };
    let controller = Rc::clone(controller);
    let fallback = query.clone();
    listen(&query, "change", move |event| {
        let prefers_dark = event
            .dyn_ref::<web_sys::MediaQueryListEvent>()
            .map_or_else(|| fallback.matches(), web_sys::MediaQueryListEvent::matches);
        controller.borrow_mut().on_color_scheme_change(prefers_dark);
    });
}

fn attach_storage(controller: &SharedThemeController, config: &ThemeConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let key = config.storage_key.clone();
    let controller = Rc::clone(controller);
    listen(&window, "storage", move |event| {
        let relevant = event
            .dyn_ref::<web_sys::StorageEvent>()
            .map_or(true, |e| e.key().map_or(true, |k| k == key));
        if relevant {
            controller.borrow_mut().on_storage_change();
        }
    });
}
