//! src/ui.rs
//!
//! Layout tree and the panel trait every panel implements.

pub mod node;

pub use node::{Node, Panel, group, leaf};
