//! `[site]` section configuration.
//!
//! Site metadata: title, tagline, production URL and the base path the
//! site is served under.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "BRC721 Docs"
//! tagline = "Ordinals Collection Protocol documentation"
//! url = "https://docs.brc721.com"
//! base_url = "/"
//! organization_name = "d3vx-com"
//! project_name = "brc721-docs"
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::{check_absolute_url, extract_url_path};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site title.
    #[config(default = "My Docs")]
    pub title: String,

    /// Short description shown under the title.
    #[config(default = "Documentation")]
    pub tagline: String,

    /// Production URL without a path (e.g., "https://docs.example.com").
    #[config(default = "https://example.com")]
    pub url: String,

    /// Path the site is served under, starting and ending with `/`.
    #[config(default = "/")]
    pub base_url: String,

    /// Favicon path relative to the static directory.
    pub favicon: Option<String>,

    /// GitHub organization or user owning the site.
    pub organization_name: Option<String>,

    /// Repository name.
    pub project_name: Option<String>,

    /// Static files directory, relative to the site root.
    #[config(default = "static")]
    pub static_dir: PathBuf,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: String::new(),
            base_url: "/".into(),
            favicon: None,
            organization_name: None,
            project_name: None,
            static_dir: "static".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// `static_dir` is the resolved static directory, used to check the
    /// favicon exists (a missing favicon only warns).
    pub fn validate(&self, static_dir: &Path, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }
        if self.tagline.trim().is_empty() {
            diag.error(Self::FIELDS.tagline, "site tagline must not be empty");
        }

        self.validate_url(diag);
        self.validate_base_url(diag);

        for (field, value) in [
            (Self::FIELDS.organization_name, &self.organization_name),
            (Self::FIELDS.project_name, &self.project_name),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                diag.error_with_hint(field, "must not be empty when set", "remove the key instead");
            }
        }

        if let Some(favicon) = &self.favicon
            && !static_dir.join(favicon.trim_start_matches('/')).is_file()
        {
            diag.warn(
                Self::FIELDS.favicon,
                format!("`{}` not found in `{}`", favicon, static_dir.display()),
            );
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site url is required",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
            return;
        }

        if let Err(message) = check_absolute_url(&self.url, &["http", "https"]) {
            diag.error_with_hint(
                Self::FIELDS.url,
                message,
                "use format like https://example.com",
            );
            return;
        }

        // A sub-path belongs in base_url
        if let Some(path) = extract_url_path(&self.url)
            && !path.is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("url must not contain a path, found `/{}`", path),
                format!("move the path into {}: \"/{}/\"", Self::FIELDS.base_url, path),
            );
        }
    }

    fn validate_base_url(&self, diag: &mut ConfigDiagnostics) {
        let base = self.base_url.as_str();
        if !base.starts_with('/') || !base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("`{}` must start and end with `/`", base),
                "use \"/\" or a path like \"/my-project/\"",
            );
        } else if base.contains(|c: char| c.is_whitespace() || matches!(c, '?' | '#')) {
            diag.error(
                Self::FIELDS.base_url,
                format!("`{}` must be a plain path without whitespace, query or fragment", base),
            );
        }
    }

    /// Strip the base path from a site-root link.
    ///
    /// `/docs/intro` stays as is; with base `/proj/`, `/proj/docs/intro`
    /// becomes `/docs/intro`.
    pub fn strip_base<'a>(&self, link: &'a str) -> &'a str {
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            return link;
        }
        match link.strip_prefix(base) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(extra: &str) -> ConfigDiagnostics {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(Path::new("/nonexistent"), &mut diag);
        diag
    }

    fn has_error(diag: &ConfigDiagnostics, field: &str) -> bool {
        diag.errors().iter().any(|e| e.field.as_str() == field)
    }

    #[test]
    fn test_valid_site() {
        let diag = validate("");
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_empty_title_and_tagline() {
        let config = SiteInfoConfig {
            url: "https://example.com".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(Path::new("/nonexistent"), &mut diag);
        assert!(has_error(&diag, "site.title"));
        assert!(has_error(&diag, "site.tagline"));
        assert!(!has_error(&diag, "site.url"));
    }

    #[test]
    fn test_malformed_url() {
        for url in ["docs.example.com", "ftp://example.com", "https://"] {
            let config = SiteInfoConfig {
                title: "T".into(),
                tagline: "T".into(),
                url: url.into(),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            config.validate(Path::new("/nonexistent"), &mut diag);
            assert!(has_error(&diag, "site.url"), "accepted {url}");
        }
    }

    #[test]
    fn test_url_with_path_rejected() {
        let config = SiteInfoConfig {
            title: "T".into(),
            tagline: "T".into(),
            url: "https://example.github.io/my-project".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(Path::new("/nonexistent"), &mut diag);
        let err = &diag.errors()[0];
        assert_eq!(err.field.as_str(), "site.url");
        assert!(err.hint.as_deref().unwrap().contains("/my-project/"));
    }

    #[test]
    fn test_base_url_shape() {
        for (base, ok) in [
            ("/", true),
            ("/docs/", true),
            ("docs/", false),
            ("/docs", false),
            ("/my docs/", false),
            ("/docs?x/", false),
        ] {
            let config = SiteInfoConfig {
                title: "T".into(),
                tagline: "T".into(),
                url: "https://example.com".into(),
                base_url: base.into(),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            config.validate(Path::new("/nonexistent"), &mut diag);
            assert_eq!(!has_error(&diag, "site.base_url"), ok, "base_url {base}");
        }
    }

    #[test]
    fn test_missing_favicon_warns() {
        let diag = validate("");
        assert!(diag.warnings().is_empty());

        let config = SiteInfoConfig {
            title: "T".into(),
            tagline: "T".into(),
            url: "https://example.com".into(),
            favicon: Some("img/favicon.ico".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(Path::new("/nonexistent"), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings()[0].field.as_str(), "site.favicon");
    }

    #[test]
    fn test_strip_base() {
        let mut site = SiteInfoConfig::default();
        assert_eq!(site.strip_base("/docs/intro"), "/docs/intro");

        site.base_url = "/proj/".into();
        assert_eq!(site.strip_base("/proj/docs/intro"), "/docs/intro");
        assert_eq!(site.strip_base("/proj"), "/");
        assert_eq!(site.strip_base("/project/x"), "/project/x");
        assert_eq!(site.strip_base("/docs/intro"), "/docs/intro");
    }
}
