//! src/page.rs
//!
//! Top-level `page` module: the element tree the panels render from.

pub mod document;
pub mod element;

pub use document::{Document, SHARE_LINKS_ID};
pub use element::{Child, Element};
