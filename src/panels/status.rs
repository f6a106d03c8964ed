//! src/panels/status.rs
//!
//! Read-only status panel: share-panel visibility and time until the next
//! transition.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::share::{PanelTimer, Visibility};
use crate::theme::Palette;

pub struct StatusPanel<'a> {
    pub timer: &'a PanelTimer,
    pub now: Duration,
}

impl<'a> StatusPanel<'a> {
    pub fn new(timer: &'a PanelTimer, now: Duration) -> Self {
        Self { timer, now }
    }

    fn summary(&self) -> String {
        let state = match self.timer.visibility() {
            Visibility::Hidden => "hidden",
            Visibility::FadingIn => "shown",
            Visibility::FadingOut => "fading",
        };
        let remaining = |at: Duration| at.saturating_sub(self.now).as_millis();
        if let Some(at) = self.timer.pending_fade_out() {
            format!("share={state}  fade-out in {}ms", remaining(at))
        } else if let Some(at) = self.timer.pending_hide() {
            format!("share={state}  hide in {}ms", remaining(at))
        } else {
            format!("share={state}")
        }
    }
}

impl crate::ui::Panel for StatusPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let line = Line::from(vec![
            Span::styled("Status ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(self.summary()),
        ]);
        let block = Block::default()
            .title("Status")
            .borders(Borders::ALL)
            .style(Style::default().fg(palette.fg).bg(palette.bg));
        f.render_widget(Paragraph::new(line).block(block), area);
    }
}
