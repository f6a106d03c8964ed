//! src/theme.rs
//!
//! Dark-mode toggle and the colour palette each mode selects.

use ratatui::style::Color;
use tracing::info;

use crate::page::Document;

/// Body class marking dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Flip dark mode on the document body. Returns whether dark mode is now on.
pub fn toggle_dark_mode(document: &mut Document) -> bool {
    let enabled = document.toggle_body_class(DARK_MODE_CLASS);
    info!(enabled, "dark mode toggled");
    enabled
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        fg: Color::Black,
        bg: Color::White,
        accent: Color::Blue,
        muted: Color::Gray,
    };

    pub const DARK: Palette = Palette {
        fg: Color::White,
        bg: Color::Black,
        accent: Color::Cyan,
        muted: Color::DarkGray,
    };

    pub fn for_document(document: &Document) -> Self {
        if document.body_has_class(DARK_MODE_CLASS) {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_body_class_and_palette() {
        let mut doc = Document::new();
        assert_eq!(Palette::for_document(&doc), Palette::LIGHT);

        assert!(toggle_dark_mode(&mut doc));
        assert!(doc.body_has_class(DARK_MODE_CLASS));
        assert_eq!(Palette::for_document(&doc), Palette::DARK);

        assert!(!toggle_dark_mode(&mut doc));
        assert!(doc.body_classes.is_empty());
        assert_eq!(Palette::for_document(&doc), Palette::LIGHT);
    }

    #[test]
    fn toggle_leaves_other_body_classes_alone() {
        let mut doc = Document::new();
        doc.body_classes.insert("article".to_string());
        toggle_dark_mode(&mut doc);
        toggle_dark_mode(&mut doc);
        assert!(doc.body_has_class("article"));
    }
}
