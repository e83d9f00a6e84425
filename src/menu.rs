//! Navigation menu and language-list visibility.
//!
//! Both are plain boolean flips; the last click wins. They return the class
//! changes to apply instead of touching the DOM so the browser layer stays a
//! thin adapter.

/// Classes to add and remove on an element after a state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSwap<'a> {
    pub add: &'a str,
    pub remove: &'a str,
}

/// Slide-out navigation panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuPanel {
    open: bool,
    open_class: String,
    closed_class: String,
}

impl MenuPanel {
    pub fn new(open_class: impl Into<String>, closed_class: impl Into<String>) -> Self {
        Self { open: false, open_class: open_class.into(), closed_class: closed_class.into() }
    }

    /// Rebuild state from the panel's current class list.
    #[must_use]
    pub fn from_classes(mut self, has_class: impl Fn(&str) -> bool) -> Self {
        self.open = has_class(self.open_class.as_str());
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel and return the classes that express the new state.
    pub fn toggle(&mut self) -> ClassSwap<'_> {
        self.open = !self.open;
        self.classes()
    }

    pub fn classes(&self) -> ClassSwap<'_> {
        if self.open {
            ClassSwap { add: &self.open_class, remove: &self.closed_class }
        } else {
            ClassSwap { add: &self.closed_class, remove: &self.open_class }
        }
    }
}

/// A show/hide toggle driven by a single `hidden`-style class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    visible: bool,
}

impl Disclosure {
    pub fn from_hidden(hidden: bool) -> Self {
        Self { visible: !hidden }
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Flip visibility; returns whether the hidden class should now be present.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        !self.visible
    }

    /// Hide; returns whether the hidden class should now be present.
    pub fn hide(&mut self) -> bool {
        self.visible = false;
        true
    }
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
