//! `[links]` section configuration.
//!
//! Controls how broken links are reported when the loader checks them.
//!
//! # Example
//!
//! ```toml
//! [links]
//! on_broken_links = "throw"           # navbar/footer/site-root links
//! on_broken_markdown_links = "warn"   # relative links to .md/.mdx files
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Broken link handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "links")]
pub struct LinksConfig {
    /// What to do with broken site links: "ignore" | "log" | "warn" | "throw".
    #[config(default = "throw")]
    pub on_broken_links: BrokenLinkPolicy,

    /// What to do with broken markdown file links: "ignore" | "log" | "warn" | "throw".
    #[config(default = "warn")]
    pub on_broken_markdown_links: BrokenLinkPolicy,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            on_broken_links: BrokenLinkPolicy::Throw,
            on_broken_markdown_links: BrokenLinkPolicy::Warn,
        }
    }
}

impl LinksConfig {
    /// Every class fails the load.
    pub fn make_strict(&mut self) {
        self.on_broken_links = BrokenLinkPolicy::Throw;
        self.on_broken_markdown_links = BrokenLinkPolicy::Throw;
    }

    /// Every class is reported but never fails the load.
    pub fn make_lenient(&mut self) {
        self.on_broken_links = BrokenLinkPolicy::Warn;
        self.on_broken_markdown_links = BrokenLinkPolicy::Warn;
    }

    /// Whether any link class needs checking at all.
    pub fn any_enabled(&self) -> bool {
        self.on_broken_links.is_enabled() || self.on_broken_markdown_links.is_enabled()
    }
}

/// What to do when a broken link is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Skip the check entirely.
    Ignore,
    /// Report at info level.
    Log,
    /// Report as a warning; loading continues.
    Warn,
    /// Abort loading with a link error.
    #[default]
    Throw,
}

impl BrokenLinkPolicy {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != Self::Ignore
    }
}
