//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod paragraph;
pub mod share;
pub mod status;
pub mod title;

pub use paragraph::ParagraphPanel;
pub use share::SharePanel;
pub use status::StatusPanel;
pub use title::TitlePanel;
