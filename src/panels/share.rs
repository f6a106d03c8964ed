//! src/panels/share.rs
//!
//! Share-links panel: renders the container's links while it is displayed.
//!
//! The fade classes map onto terminal styling: fade-in draws bold in the
//! accent colour, fade-out draws dimmed. A hidden container draws nothing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::page::{Child, Element};
use crate::share::PresentationClass;
use crate::theme::Palette;

pub struct SharePanel<'a> {
    pub element: &'a Element,
}

impl<'a> SharePanel<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }

    fn style(&self, palette: &Palette) -> Style {
        let base = Style::default().bg(palette.bg);
        if self.element.has_class(PresentationClass::FadeOut.as_str()) {
            base.fg(palette.muted).add_modifier(Modifier::DIM)
        } else if self.element.has_class(PresentationClass::FadeIn.as_str()) {
            base.fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            base.fg(palette.fg)
        }
    }

    /// One line per run of children between line breaks.
    fn lines(&self, palette: &Palette) -> Vec<Line<'a>> {
        let element: &'a Element = self.element;
        let mut lines = Vec::new();
        let mut current: Vec<Span<'a>> = Vec::new();
        for child in &element.children {
            match child {
                Child::Link { network, href, .. } => {
                    current.push(Span::raw(format!("[{}] ", network.label())));
                    current.push(Span::styled(
                        href.as_str(),
                        Style::default().add_modifier(Modifier::UNDERLINED),
                    ));
                }
                Child::LineBreak => lines.push(Line::from(std::mem::take(&mut current))),
            }
        }
        if !current.is_empty() {
            lines.push(Line::from(current));
        }
        if lines.is_empty() {
            lines.push(Line::styled("(no links)", Style::default().fg(palette.muted)));
        }
        lines
    }
}

impl crate::ui::Panel for SharePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        if !self.element.display {
            return;
        }
        let style = self.style(palette);
        let p = Paragraph::new(self.lines(palette))
            .style(style)
            .block(Block::default().title("Share").borders(Borders::ALL).style(style));
        f.render_widget(p, area);
    }
}
