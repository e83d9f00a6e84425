//! Browser wiring for copy-to-clipboard buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::listen;
use super::storage::describe;
use crate::clipboard::{CopyFeedback, copy_text};
use crate::config::ClipboardConfig;

/// Wire `#copyButton` and every `[data-copy]` button.
pub fn attach(document: &web_sys::Document, config: &ClipboardConfig) {
    let mut buttons = Vec::new();
    if let Some(button) = document.get_element_by_id(&config.button_id) {
        buttons.push(button);
    }
    if let Ok(nodes) = document.query_selector_all(&format!("[{}]", config.copy_attribute)) {
        for i in 0..nodes.length() {
            let Some(button) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            if button.id() != config.button_id {
                buttons.push(button);
            }
        }
    }

    let config = Rc::new(config.clone());
    for button in buttons {
        attach_button(button, &config);
    }
}

fn attach_button(button: web_sys::Element, config: &Rc<ClipboardConfig>) {
    let feedback = Rc::new(RefCell::new(CopyFeedback::default()));
    // Markup, not text: buttons usually carry an icon next to the label.
    let original_content = button.inner_html();
    let config = Rc::clone(config);
    let target = button.clone();
    listen(&button, "click", move |_| {
        let Some(text) = button_text(&target, &config) else {
            log::debug!("copy button has nothing to copy");
            return;
        };
        let button = target.clone();
        let feedback = Rc::clone(&feedback);
        let config = Rc::clone(&config);
        let original_content = original_content.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let ok = match write_clipboard(&text).await {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("clipboard write failed: {e}");
                    false
                }
            };
            let generation = feedback.borrow_mut().finish(ok);
            let label = feedback.borrow().label(&config.copied_label, &config.failed_label).map(str::to_owned);
            button.set_text_content(label.as_deref());

            // Last click wins: older timers find a newer generation and do nothing.
            Timeout::new(config.reset_ms, move || {
                if feedback.borrow_mut().reset(generation) {
                    button.set_inner_html(&original_content);
                }
            })
            .forget();
        });
    });
}

fn button_text(button: &web_sys::Element, config: &ClipboardConfig) -> Option<String> {
    let document = web_sys::window().and_then(|w| w.document());
    copy_text(
        button.get_attribute(&config.copy_attribute),
        || {
            let id = button.get_attribute(&config.target_attribute)?;
            document.as_ref()?.get_element_by_id(&id)?.text_content()
        },
        || {
            let link = document.as_ref()?.query_selector(&config.canonical_selector).ok().flatten()?;
            // The resolved, absolute URL, as `link.href` reports it.
            match link.dyn_ref::<web_sys::HtmlLinkElement>() {
                Some(link) => Some(link.href()),
                None => link.get_attribute("href"),
            }
        },
    )
}

async fn write_clipboard(text: &str) -> Result<(), String> {
    let navigator = web_sys::window().ok_or("no window")?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| describe(&e))?
        .dyn_into::<web_sys::Clipboard>()
        .map_err(|_| "clipboard API unavailable".to_owned())?;
    JsFuture::from(clipboard.write_text(text)).await.map_err(|e| describe(&e))?;
    Ok(())
}
