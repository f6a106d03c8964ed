//! src/config.rs
//!
//! Application configuration parsed from environment variables.
//!
//! All variables are optional:
//! - `SHARE_PAGE_TITLE`: title used in the share intents (default `Simply Wordy`)
//! - `SHARE_PAGE_PATH`: article path under the base URL (default `index`)
//! - `SHARE_ARTICLE_BASE_URL`: article base URL
//! - `SHARE_FRAME_MS`: frame time of the UI loop, 1..=1000 (default 50)
//! - `SHARE_LOG_FILE`: write tracing output to this file

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::share::DEFAULT_ARTICLE_BASE_URL;

pub const DEFAULT_PAGE_TITLE: &str = "Simply Wordy";
pub const DEFAULT_PAGE_PATH: &str = "index";
pub const DEFAULT_FRAME_MS: u64 = 50;
const FRAME_MS_RANGE: (u64, u64) = (1, 1_000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub page_title: String,
    pub page_path: String,
    pub base_url: String,
    pub frame_time: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            page_path: DEFAULT_PAGE_PATH.to_string(),
            base_url: DEFAULT_ARTICLE_BASE_URL.to_string(),
            frame_time: Duration::from_millis(DEFAULT_FRAME_MS),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let frame_ms = match get("SHARE_FRAME_MS") {
            Some(raw) => parse_in_range("SHARE_FRAME_MS", &raw, FRAME_MS_RANGE)?,
            None => DEFAULT_FRAME_MS,
        };

        Ok(Self {
            page_title: get("SHARE_PAGE_TITLE").unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()),
            page_path: get("SHARE_PAGE_PATH").unwrap_or_else(|| DEFAULT_PAGE_PATH.to_string()),
            base_url: get("SHARE_ARTICLE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ARTICLE_BASE_URL.to_string()),
            frame_time: Duration::from_millis(frame_ms),
            log_file: get("SHARE_LOG_FILE").map(PathBuf::from),
        })
    }
}

fn parse_in_range(var: &'static str, raw: &str, (min, max): (u64, u64)) -> Result<u64, ConfigError> {
    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        })?;
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            var,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
