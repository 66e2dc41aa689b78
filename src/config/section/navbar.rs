//! `[navbar]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [navbar]
//! title = "BRC721 Docs"
//! logo = { alt = "BRC721 Logo", src = "img/logo.svg" }
//!
//! [[navbar.items]]
//! sidebar_id = "tutorialSidebar"
//! label = "Learn"
//!
//! [[navbar.items]]
//! to = "/docs/specification"
//! label = "Specification"
//!
//! [[navbar.items]]
//! href = "https://github.com/d3vx-com/brc721-docs"
//! label = "GitHub"
//! position = "right"
//! ```

use super::target::{TargetRef, validate_item};
use crate::config::util::{check_absolute_url, check_site_path};
use crate::config::ConfigDiagnostics;
use crate::route::Sidebars;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "navbar")]
pub struct NavbarConfig {
    /// Title shown next to the logo.
    pub title: Option<String>,

    /// Logo image.
    #[config(hidden)]
    pub logo: Option<NavbarLogoConfig>,

    /// Navigation links, in display order.
    #[config(hidden)]
    pub items: Vec<NavbarItemConfig>,
}

/// Navbar logo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "navbar.logo")]
pub struct NavbarLogoConfig {
    /// Alternative text.
    pub alt: String,
    /// Image path relative to the static directory.
    pub src: String,
    /// Image used in dark mode.
    pub src_dark: Option<String>,
    /// Where the logo links to (defaults to the site root).
    pub href: Option<String>,
}

/// One navbar entry. The target key decides the kind of link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarItemConfig {
    pub label: String,
    pub position: NavPosition,
    pub to: Option<String>,
    pub href: Option<String>,
    pub sidebar_id: Option<String>,
}

impl NavbarItemConfig {
    #[inline]
    pub fn target(&self) -> Result<TargetRef<'_>, String> {
        TargetRef::select(
            self.to.as_deref(),
            self.href.as_deref(),
            self.sidebar_id.as_deref(),
        )
    }
}

/// Which side of the navbar an item sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

impl NavbarConfig {
    /// Validate logo and items.
    pub fn validate(
        &self,
        static_dir: &Path,
        sidebars: Option<&Sidebars>,
        diag: &mut ConfigDiagnostics,
    ) {
        if let Some(logo) = &self.logo {
            logo.validate(static_dir, diag);
        }

        for (i, item) in self.items.iter().enumerate() {
            validate_item(
                &Self::FIELDS.items.at(i),
                &item.label,
                item.target(),
                sidebars,
                diag,
            );
        }
    }
}

impl NavbarLogoConfig {
    fn validate(&self, static_dir: &Path, diag: &mut ConfigDiagnostics) {
        if self.src.trim().is_empty() {
            diag.error(Self::FIELDS.src, "logo src must not be empty");
            return;
        }

        for (field, src) in [
            (Self::FIELDS.src, Some(&self.src)),
            (Self::FIELDS.src_dark, self.src_dark.as_ref()),
        ] {
            if let Some(src) = src
                && !is_external(src)
                && !static_dir.join(src.trim_start_matches('/')).is_file()
            {
                diag.warn(
                    field,
                    format!("`{}` not found in `{}`", src, static_dir.display()),
                );
            }
        }

        if let Some(href) = &self.href {
            let checked = if href.starts_with('/') {
                check_site_path(href)
            } else {
                check_absolute_url(href, &["http", "https"])
            };
            if let Err(message) = checked {
                diag.error(Self::FIELDS.href, message);
            }
        }
    }
}

fn is_external(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(extra: &str) -> ConfigDiagnostics {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config
            .navbar
            .validate(Path::new("/nonexistent"), None, &mut diag);
        diag
    }

    #[test]
    fn test_parse_items() {
        let config = test_parse_config(
            r#"[navbar]
title = "BRC721 Docs"
logo = { alt = "BRC721 Logo", src = "img/logo.svg" }

[[navbar.items]]
to = "/docs/specification"
label = "Specification"

[[navbar.items]]
href = "https://github.com/d3vx-com/brc721-docs"
label = "GitHub"
position = "right""#,
        );
        let navbar = &config.navbar;
        assert_eq!(navbar.title.as_deref(), Some("BRC721 Docs"));
        assert_eq!(navbar.logo.as_ref().unwrap().alt, "BRC721 Logo");
        assert_eq!(navbar.items.len(), 2);
        assert_eq!(navbar.items[0].position, NavPosition::Left);
        assert_eq!(navbar.items[1].position, NavPosition::Right);
        assert_eq!(
            navbar.items[1].target(),
            Ok(TargetRef::External("https://github.com/d3vx-com/brc721-docs"))
        );
    }

    #[test]
    fn test_missing_logo_file_warns() {
        let diag = validate("[navbar]\nlogo = { alt = \"Logo\", src = \"img/logo.svg\" }");
        assert!(diag.is_empty());
        assert_eq!(diag.warnings()[0].field.as_str(), "navbar.logo.src");
    }

    #[test]
    fn test_empty_logo_src() {
        let diag = validate("[navbar]\nlogo = { alt = \"Logo\" }");
        assert_eq!(diag.errors()[0].field.as_str(), "navbar.logo.src");
    }

    #[test]
    fn test_item_errors_are_indexed() {
        let diag = validate(
            r#"[[navbar.items]]
to = "/docs"
label = "Docs"

[[navbar.items]]
to = "docs/relative"
label = "Bad"

[[navbar.items]]
label = "Nothing""#,
        );
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["navbar.items[1].to", "navbar.items[2]"]);
    }

    #[test]
    fn test_unknown_item_field_detected() {
        let content = "[site]\ntitle = \"T\"\n[[navbar.items]]\nlabel = \"x\"\nto = \"/\"\ntype = \"docSidebar\"";
        let (_, ignored) = crate::config::SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("type")));
    }
}
