//! src/panels/paragraph.rs
//!
//! Simple paragraph panel used for static help/text blocks.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme::Palette;

pub struct ParagraphPanel<'a> {
    pub text: &'a str,
    pub title: &'a str,
}

impl<'a> ParagraphPanel<'a> {
    pub fn new(text: &'a str, title: &'a str) -> Self {
        Self { text, title }
    }
}

impl crate::ui::Panel for ParagraphPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let p = Paragraph::new(self.text)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(palette.fg).bg(palette.bg))
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
