//! src/page/element.rs
//!
//! A single container element: display flag, class set, and children.

use std::collections::BTreeSet;

use crate::share::{Network, PanelSurface, PresentationClass};

/// Content appended into a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Link {
        network: Network,
        icon: String,
        href: String,
    },
    LineBreak,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// `false` is the equivalent of `display: none`.
    pub display: bool,
    pub classes: BTreeSet<String>,
    pub children: Vec<Child>,
}

impl Element {
    /// A hidden, empty element.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn add_class(&mut self, name: &str) {
        self.classes.insert(name.to_string());
    }

    pub fn remove_class(&mut self, name: &str) {
        self.classes.remove(name);
    }

    pub fn append(&mut self, child: Child) {
        self.children.push(child);
    }
}

impl PanelSurface for Element {
    fn set_display(&mut self, visible: bool) {
        self.display = visible;
    }

    fn set_presentation_class(&mut self, class: PresentationClass, enabled: bool) {
        if enabled {
            self.add_class(class.as_str());
        } else {
            self.remove_class(class.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_absent_class_is_harmless() {
        let mut e = Element::hidden();
        e.remove_class("nope");
        assert!(e.classes.is_empty());
    }

    #[test]
    fn surface_calls_map_onto_element() {
        let mut e = Element::hidden();
        e.set_display(true);
        e.set_presentation_class(PresentationClass::FadeIn, true);
        assert!(e.display);
        assert!(e.has_class("share_links_fade_in"));

        e.set_presentation_class(PresentationClass::FadeIn, false);
        assert!(!e.has_class("share_links_fade_in"));
    }
}
