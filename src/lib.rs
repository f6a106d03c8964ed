//! src/lib.rs
//!
//! Terminal article page with a timed share-links panel and a dark-mode toggle.
//! The binary in `main.rs` wires configuration and logging around [`app::run`].

pub mod app;
pub mod config;
pub mod error;
pub mod page;
pub mod panels;
pub mod share;
pub mod theme;
pub mod timer;
pub mod ui;
