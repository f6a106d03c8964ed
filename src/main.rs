//! src/main.rs
//!
//! Entrypoint: install error reporting, read config, set up logging, delegate to `app::run()`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use share_panel_tui::app;
use share_panel_tui::config::AppConfig;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = AppConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;
    app::run(config)
}

/// Log to `path` when given; the terminal itself is owned by the UI.
fn init_tracing(path: Option<&Path>) -> color_eyre::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}
