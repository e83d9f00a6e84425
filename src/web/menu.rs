//! Browser wiring for the navigation menu and the language picker.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;

use super::listen;
use super::storage::LocalStorage;
use crate::config::{LanguageConfig, MenuConfig};
use crate::language::LanguagePreferenceStore;
use crate::menu::{Disclosure, MenuPanel};

pub fn attach_menu(document: &web_sys::Document, config: &MenuConfig) {
    let Some(panel) = document.get_element_by_id(&config.panel_id) else {
        log::debug!("no #{} element, navigation menu disabled", config.panel_id);
        return;
    };
    let classes = panel.class_list();
    let state = MenuPanel::new(config.open_class.as_str(), config.closed_class.as_str())
        .from_classes(|class| classes.contains(class));
    let state = Rc::new(RefCell::new(state));

    for id in [&config.open_button_id, &config.close_button_id] {
        let Some(button) = document.get_element_by_id(id) else {
            continue;
        };
        let state = Rc::clone(&state);
        let panel = panel.clone();
        listen(&button, "click", move |_| {
            let mut state = state.borrow_mut();
            let swap = state.toggle();
            let classes = panel.class_list();
            let _ = classes.add_1(swap.add);
            let _ = classes.remove_1(swap.remove);
        });
    }
}

pub fn attach_language(document: &web_sys::Document, config: &LanguageConfig) {
    let (Some(button), Some(list)) =
        (document.get_element_by_id(&config.button_id), document.get_element_by_id(&config.list_id))
    else {
        log::debug!("language picker markup missing, picker disabled");
        return;
    };
    let store = Rc::new(
        LanguagePreferenceStore::new(LocalStorage::open(), config.storage_key.as_str())
            .with_root_language(config.root_language.as_str()),
    );
    let list_state = Rc::new(Cell::new(Disclosure::from_hidden(list.class_list().contains(&config.hidden_class))));

    {
        let list = list.clone();
        let list_state = Rc::clone(&list_state);
        let hidden_class = config.hidden_class.clone();
        listen(&button, "click", move |_| {
            let mut state = list_state.get();
            let hidden = state.toggle();
            list_state.set(state);
            let _ = list.class_list().toggle_with_force(&hidden_class, hidden);
        });
    }

    let Ok(items) = document.query_selector_all(&config.item_selector) else {
        return;
    };
    for i in 0..items.length() {
        let Some(item) = items.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let store = Rc::clone(&store);
        let list_state = Rc::clone(&list_state);
        let list = list.clone();
        let button = button.clone();
        let lang_attribute = config.lang_attribute.clone();
        let hidden_class = config.hidden_class.clone();
        let target = item.clone();
        listen(&item, "click", move |event| {
            event.prevent_default();
            let code = target.get_attribute(&lang_attribute).unwrap_or_default();
            let mut state = list_state.get();
            state.hide();
            list_state.set(state);
            let _ = list.class_list().add_1(&hidden_class);
            set_button_label(&button, target.text_content().as_deref());
            match store.select(&code) {
                Ok(path) => navigate(&path),
                Err(e) => log::warn!("language selection ignored: {e}"),
            }
        });
    }

    let document_lang = document
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .unwrap_or_default();
    let current = store.resolve(&document_lang);
    let selector = format!("[{}=\"{current}\"]", config.lang_attribute);
    if let Ok(Some(item)) = document.query_selector(&selector) {
        set_button_label(&button, item.text_content().as_deref());
    }
}

fn set_button_label(button: &web_sys::Element, text: Option<&str>) {
    let label = button.query_selector("span").ok().flatten();
    if let Some(label) = label {
        label.set_text_content(text);
    }
}

fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::warn!("navigation to {path} failed: {}", super::storage::describe(&e));
        }
    }
}
