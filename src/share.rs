//! src/share.rs
//!
//! Top-level `share` module: the share-link builder and the panel show/fade timer.

pub mod links;
pub mod panel_timer;

pub use links::{DEFAULT_ARTICLE_BASE_URL, Network, ShareLink, build_share_links, make_share_links};
pub use panel_timer::{DWELL, FADE, PanelSurface, PanelTimer, PresentationClass, Visibility};
