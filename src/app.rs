//! src/app.rs
//!
//! Terminal rendition of a blog article page with a timed share panel.
//!
//! # Keyboard Controls
//!
//! - **s** / **Enter** — Show the share links. They stay up for 3 s, fade for
//!   0.5 s, then hide. Pressing again at any point restarts the cycle.
//! - **d** — Toggle dark mode.
//! - **q** / **Esc** — Quit and restore terminal state.
//!
//! # Environment
//!
//! See [`crate::config`] for the variables read at startup. Logging is off
//! unless `SHARE_LOG_FILE` is set, since the terminal belongs to the UI.
//!
//! # Frame Loop
//!
//! Each frame drains pending key events, advances the share-panel timer to
//! the current clock reading, then draws. Timer callbacks therefore only ever
//! run on this thread, between draws.

use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Direction};
use tracing::info;

use crate::config::AppConfig;
use crate::error::UiError;
use crate::page::{Document, Element, SHARE_LINKS_ID};
use crate::panels::{ParagraphPanel, SharePanel, StatusPanel, TitlePanel};
use crate::share::{PanelTimer, make_share_links};
use crate::theme::{DARK_MODE_CLASS, Palette, toggle_dark_mode};
use crate::timer::{Clock, MonotonicClock};
use crate::ui::{Node, group, leaf};

const CONTROLS: &str = "S/Enter=Share  D=Dark mode  Q=Quit";

pub struct App<C: Clock> {
    config: AppConfig,
    clock: C,
    document: Document,
    share_timer: PanelTimer,
    running: bool,
}

impl<C: Clock> App<C> {
    /// Build the page: a hidden share container filled with the article's links.
    pub fn new(config: AppConfig, clock: C) -> Result<Self, UiError> {
        let mut document = Document::new();
        document.insert(SHARE_LINKS_ID, Element::hidden());
        make_share_links(
            &mut document,
            &config.page_title,
            &config.page_path,
            &config.base_url,
        )?;
        Ok(Self {
            config,
            clock,
            document,
            share_timer: PanelTimer::new(),
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn share_timer(&self) -> &PanelTimer {
        &self.share_timer
    }

    pub fn palette(&self) -> Palette {
        Palette::for_document(&self.document)
    }

    pub fn show_share_links(&mut self) -> Result<(), UiError> {
        let now = self.clock.now();
        let panel = self.document.element_mut(SHARE_LINKS_ID)?;
        self.share_timer.request_show(now, panel);
        info!(now_ms = now.as_millis() as u64, "share links requested");
        Ok(())
    }

    /// Fire whatever timer tasks are due. Returns how many fired.
    pub fn tick(&mut self) -> Result<usize, UiError> {
        let now = self.clock.now();
        let panel = self.document.element_mut(SHARE_LINKS_ID)?;
        Ok(self.share_timer.advance(now, panel))
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<(), UiError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('s') | KeyCode::Enter => self.show_share_links()?,
            KeyCode::Char('d') => {
                toggle_dark_mode(&mut self.document);
            }
            _ => {}
        }
        Ok(())
    }

    /// Layout tree for the current frame.
    pub fn view(&self) -> Result<Node<'_>, UiError> {
        let share = self.document.element(SHARE_LINKS_ID)?;
        let dark = self.document.body_has_class(DARK_MODE_CLASS);
        Ok(group(
            Direction::Vertical,
            vec![
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(3),
            ],
            vec![
                leaf(TitlePanel::new(&self.config.page_title, dark)),
                leaf(SharePanel::new(share)),
                leaf(StatusPanel::new(&self.share_timer, self.clock.now())),
                leaf(ParagraphPanel::new(CONTROLS, "Controls")),
            ],
        ))
    }
}

pub fn run(config: AppConfig) -> color_eyre::Result<()> {
    let mut app = App::new(config, MonotonicClock::new())?;
    info!(page = %app.config.page_path, "starting");

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();

    info!("exiting");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App<MonotonicClock>) -> color_eyre::Result<()> {
    let frame_time = app.config.frame_time;

    while app.is_running() {
        let frame_start = Instant::now();

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code)?;
                }
            }
        }
        if !app.is_running() {
            break;
        }

        app.tick()?;

        let root = app.view()?;
        let palette = app.palette();
        terminal.draw(|f| root.draw(f, f.area(), &palette))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
    Ok(())
}
