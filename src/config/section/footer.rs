//! `[footer]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! style = "dark"
//!
//! [[footer.links]]
//! title = "Community"
//! items = [
//!     { label = "Discord", href = "http://discord.com/invite/brc721" },
//!     { label = "Twitter", href = "https://twitter.com/brc_721" },
//! ]
//! ```

use super::target::{TargetRef, validate_item};
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "footer")]
pub struct FooterConfig {
    /// Color scheme: "light" | "dark".
    #[config(default = "light")]
    pub style: FooterStyle,

    /// Copyright line shown under the links.
    pub copyright: Option<String>,

    /// Titled link groups, in display order.
    #[config(hidden)]
    pub links: Vec<FooterLinkGroup>,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinkGroup {
    pub title: String,
    pub items: Vec<FooterItemConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterItemConfig {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
}

impl FooterItemConfig {
    #[inline]
    pub fn target(&self) -> Result<TargetRef<'_>, String> {
        TargetRef::select(self.to.as_deref(), self.href.as_deref(), None)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

impl FooterConfig {
    /// Validate groups and their items.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, group) in self.links.iter().enumerate() {
            let group_path = Self::FIELDS.links.at(i);
            if group.title.trim().is_empty() {
                diag.error(
                    group_path.join("title"),
                    "footer group title must not be empty",
                );
            }
            if group.items.is_empty() {
                diag.warn(group_path.clone(), "footer group has no items");
            }

            let items_path = group_path.join("items");
            for (j, item) in group.items.iter().enumerate() {
                validate_item(&items_path.at(j), &item.label, item.target(), None, diag);
            }
        }
    }
}
