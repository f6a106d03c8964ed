//! src/panels/title.rs
//!
//! Page header: the article title, with a dark-mode marker.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Palette;

pub struct TitlePanel<'a> {
    pub title: &'a str,
    pub dark_mode: bool,
}

impl<'a> TitlePanel<'a> {
    pub fn new(title: &'a str, dark_mode: bool) -> Self {
        Self { title, dark_mode }
    }
}

impl crate::ui::Panel for TitlePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let mode = if self.dark_mode { "dark" } else { "light" };
        let line = Line::from(vec![
            Span::styled(
                self.title,
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({mode})"), Style::default().fg(palette.muted)),
        ]);
        let p = Paragraph::new(line).block(
            Block::default()
                .title("Article")
                .borders(Borders::ALL)
                .style(Style::default().fg(palette.fg).bg(palette.bg)),
        );
        f.render_widget(p, area);
    }
}
