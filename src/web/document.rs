//! `<html>` element adapter for the theme controller.

use wasm_bindgen::JsCast;

use crate::config::ThemeConfig;
use crate::theme::ThemeSurface;

/// Root element plus the optional sun/moon icons.
///
/// Icons are looked up lazily: the module may start before the body is
/// parsed, in which case the first applies only touch the root element.
pub struct DocumentSurface {
    root: Option<web_sys::Element>,
    dark_class: String,
    hidden_class: String,
    sun_selector: String,
    moon_selector: String,
    icons: Option<(web_sys::Element, web_sys::Element)>,
}

impl DocumentSurface {
    pub fn new(config: &ThemeConfig) -> Self {
        let root = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element());
        Self {
            root,
            dark_class: config.dark_class.clone(),
            hidden_class: config.hidden_class.clone(),
            sun_selector: config.sun_icon_selector.clone(),
            moon_selector: config.moon_icon_selector.clone(),
            icons: None,
        }
    }

    /// Icon handles. Cloning an `Element` only copies the JS reference.
    fn icons(&mut self) -> Option<(web_sys::Element, web_sys::Element)> {
        if self.icons.is_none() {
            let document = web_sys::window().and_then(|w| w.document())?;
            let sun = document.query_selector(&self.sun_selector).ok().flatten()?;
            let moon = document.query_selector(&self.moon_selector).ok().flatten()?;
            self.icons = Some((sun, moon));
        }
        self.icons.clone()
    }
}

impl ThemeSurface for DocumentSurface {
    fn set_dark_marker(&mut self, present: bool) {
        if let Some(root) = &self.root {
            let _ = root.class_list().toggle_with_force(&self.dark_class, present);
        }
    }

    fn set_color_scheme(&mut self, hint: &str) {
        let Some(root) = self.root.as_ref().and_then(|r| r.dyn_ref::<web_sys::HtmlElement>()) else {
            return;
        };
        let _ = root.style().set_property("color-scheme", hint);
    }

    fn set_icons(&mut self, sun_visible: bool, moon_visible: bool) {
        if let Some((sun, moon)) = self.icons() {
            let _ = sun.class_list().toggle_with_force(&self.hidden_class, !sun_visible);
            let _ = moon.class_list().toggle_with_force(&self.hidden_class, !moon_visible);
        }
    }
}
