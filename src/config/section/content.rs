//! `[docs]`, `[blog]` and `[pages]` section configuration.
//!
//! Where content lives and which URL prefix it is served under. The route
//! table is derived from these directories.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! path = "docs"
//! route_base_path = "docs"
//! sidebar_path = "sidebars.toml"
//! edit_url = "https://github.com/d3vx-com/brc721-docs/tree/main/"
//!
//! [blog]
//! enable = true
//! show_reading_time = true
//!
//! [pages]
//! path = "src/pages"
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::check_absolute_url;
use crate::route::Sidebars;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Documentation content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "docs")]
pub struct DocsConfig {
    /// Docs directory, relative to the site root.
    #[config(default = "docs")]
    pub path: PathBuf,

    /// URL prefix for doc pages ("" serves docs at the site root).
    #[config(default = "docs")]
    pub route_base_path: String,

    /// Sidebars file (TOML), relative to the site root.
    pub sidebar_path: Option<PathBuf>,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: "docs".into(),
            route_base_path: "docs".into(),
            sidebar_path: None,
            edit_url: None,
        }
    }
}

/// Blog content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "blog")]
pub struct BlogConfig {
    /// Serve a blog.
    pub enable: bool,

    /// Blog directory, relative to the site root.
    #[config(default = "blog")]
    pub path: PathBuf,

    /// URL prefix for blog pages.
    #[config(default = "blog")]
    pub route_base_path: String,

    /// Show estimated reading time on posts.
    pub show_reading_time: bool,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "blog".into(),
            route_base_path: "blog".into(),
            show_reading_time: false,
            edit_url: None,
        }
    }
}

/// Standalone pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "pages")]
pub struct PagesConfig {
    /// Pages directory, relative to the site root.
    #[config(default = "src/pages")]
    pub path: PathBuf,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            path: "src/pages".into(),
        }
    }
}

impl DocsConfig {
    /// Validate docs settings and load the sidebars file.
    ///
    /// Returns the sidebars when `sidebar_path` is set and readable, so
    /// navbar validation can check `sidebar_id` references.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) -> Option<Sidebars> {
        validate_route_base(Self::FIELDS.route_base_path, &self.route_base_path, diag);
        validate_edit_url(Self::FIELDS.edit_url, self.edit_url.as_deref(), diag);

        let sidebar_path = self.sidebar_path.as_ref()?;
        match Sidebars::load(&root.join(sidebar_path)) {
            Ok(sidebars) => Some(sidebars),
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.sidebar_path,
                    format!("{:#}", e),
                    "sidebars are TOML tables keyed by sidebar id, each with an `items` array",
                );
                None
            }
        }
    }

    /// URL prefix with leading slash and no trailing slash (`/docs`, or
    /// `` when served at the root).
    pub fn route_prefix(&self) -> String {
        route_prefix(&self.route_base_path)
    }
}

impl BlogConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        validate_route_base(Self::FIELDS.route_base_path, &self.route_base_path, diag);
        validate_edit_url(Self::FIELDS.edit_url, self.edit_url.as_deref(), diag);
    }

    pub fn route_prefix(&self) -> String {
        route_prefix(&self.route_base_path)
    }
}

fn route_prefix(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn validate_route_base(field: crate::config::FieldPath, base: &str, diag: &mut ConfigDiagnostics) {
    if base
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '?' | '#' | '\\'))
    {
        diag.error(
            field,
            format!("`{}` must be a plain URL path segment", base),
        );
    }
}

fn validate_edit_url(field: crate::config::FieldPath, url: Option<&str>, diag: &mut ConfigDiagnostics) {
    if let Some(url) = url
        && let Err(message) = check_absolute_url(url, &["http", "https"])
    {
        diag.error(field, message);
    }
}
