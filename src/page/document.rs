//! src/page/document.rs
//!
//! The page: body classes plus containers looked up by a stable id.
//! Lookups of an unknown id fail loudly with `UiError::MissingElement`.

use std::collections::{BTreeMap, BTreeSet};

use super::element::Element;
use crate::error::UiError;

/// Id of the container that receives the share links.
pub const SHARE_LINKS_ID: &str = "share_links_div";

#[derive(Debug, Default)]
pub struct Document {
    pub body_classes: BTreeSet<String>,
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the element registered under `id`.
    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    pub fn element(&self, id: &str) -> Result<&Element, UiError> {
        self.elements.get(id).ok_or_else(|| UiError::MissingElement {
            id: id.to_string(),
        })
    }

    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element, UiError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| UiError::MissingElement { id: id.to_string() })
    }

    pub fn body_has_class(&self, name: &str) -> bool {
        self.body_classes.contains(name)
    }

    /// Flip `name` on the body; returns whether it is now present.
    pub fn toggle_body_class(&mut self, name: &str) -> bool {
        if self.body_classes.remove(name) {
            false
        } else {
            self.body_classes.insert(name.to_string());
            true
        }
    }
}
