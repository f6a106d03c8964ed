//! src/share/links.rs
//!
//! Builds the four share-intent links for an article and appends them to the
//! share container. Pure string construction; nothing here touches the network.

use tracing::info;

use crate::error::UiError;
use crate::page::{Child, Document, SHARE_LINKS_ID};

pub const DEFAULT_ARTICLE_BASE_URL: &str = "http://www.lelanthran.com/simply_wordy/articles/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Twitter,
    Facebook,
    Reddit,
    HackerNews,
}

impl Network {
    pub fn label(self) -> &'static str {
        match self {
            Network::Twitter => "Twitter",
            Network::Facebook => "Facebook",
            Network::Reddit => "Reddit",
            Network::HackerNews => "Hacker News",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Network::Twitter => "../../images/twitter-light.svg",
            Network::Facebook => "../../images/facebook-light.svg",
            Network::Reddit => "../../images/reddit-light.svg",
            Network::HackerNews => "../../images/hackernews-light.svg",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLink {
    pub network: Network,
    pub icon: String,
    pub href: String,
}

/// Absolute URL of the article at `page_path` under `base_url`.
pub fn article_url(base_url: &str, page_path: &str) -> String {
    format!("{base_url}{page_path}/main.html")
}

/// Share intents in display order: Twitter, Facebook, Reddit, Hacker News.
pub fn build_share_links(page_title: &str, page_path: &str, base_url: &str) -> [ShareLink; 4] {
    let url = article_url(base_url, page_path);
    let url = urlencoding::encode(&url);
    let title = urlencoding::encode(page_title);

    let link = |network: Network, href: String| ShareLink {
        network,
        icon: network.icon().to_string(),
        href,
    };

    [
        link(
            Network::Twitter,
            format!("https://twitter.com/intent/tweet?text={title}&url={url}"),
        ),
        link(
            Network::Facebook,
            format!("https://www.facebook.com/sharer/sharer.php?&u={url}"),
        ),
        link(
            Network::Reddit,
            format!("https://www.reddit.com/submit?title={title}&url={url}"),
        ),
        link(
            Network::HackerNews,
            format!("https://news.ycombinator.com/submitlink?t={title}&u={url}"),
        ),
    ]
}

/// Append the share links to the share container, one line break between each.
pub fn make_share_links(
    document: &mut Document,
    page_title: &str,
    page_path: &str,
    base_url: &str,
) -> Result<(), UiError> {
    let container = document.element_mut(SHARE_LINKS_ID)?;
    for (i, link) in build_share_links(page_title, page_path, base_url)
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            container.append(Child::LineBreak);
        }
        container.append(Child::Link {
            network: link.network,
            icon: link.icon,
            href: link.href,
        });
    }
    info!(page_path, "share links built");
    Ok(())
}
