//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── i18n       # [i18n]
//! │   ├── links      # [links]
//! │   ├── navbar     # [navbar]
//! │   ├── footer     # [footer]
//! │   ├── theme      # [theme], [theme.prism]
//! │   └── content    # [docs], [blog], [pages]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | `[site]`        | Title, tagline, url, base_url, org/project     |
//! | `[i18n]`        | Default locale, locale set, locale configs     |
//! | `[links]`       | Broken link policies                           |
//! | `[navbar]`      | Navbar title, logo and items                   |
//! | `[footer]`      | Footer style, link groups, copyright           |
//! | `[theme]`       | Custom CSS, social card, prism themes          |
//! | `[docs]`        | Docs directory, route base, sidebars           |
//! | `[blog]`        | Blog directory and options                     |
//! | `[pages]`       | Standalone pages directory                     |

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    BlogConfig, BrokenLinkPolicy, Direction, DocsConfig, FooterConfig, FooterStyle, I18nConfig,
    LinksConfig, NavPosition, NavbarConfig, NavbarLogoConfig, PagesConfig, SiteInfoConfig,
    TargetRef, ThemeSectionConfig,
};

pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use crate::route::Sidebars;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "docsite.toml";

// ============================================================================
// load options
// ============================================================================

/// Knobs for a single load, usually filled from CLI flags.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Config file name or path.
    pub config: PathBuf,
    /// Scan content and check links.
    pub check_links: bool,
    /// Every broken link class fails the load.
    pub strict: bool,
    /// Broken links never fail the load.
    pub warn_only: bool,
    /// Replaces `site.url`.
    pub site_url: Option<String>,
    /// Read the config text from stdin instead of `config`.
    pub stdin: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from(CONFIG_FILE),
            check_links: true,
            strict: false,
            warn_only: false,
            site_url: None,
            stdin: false,
        }
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub navbar: NavbarConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub theme: ThemeSectionConfig,

    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub blog: BlogConfig,

    #[serde(default)]
    pub pages: PagesConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML text.
    ///
    /// Unknown fields are reported as warnings, not errors.
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, Path::new(CONFIG_FILE));
        }
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are reported as warnings, not errors.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let config_path = crate::utils::path::normalize_path(path);
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root_join(&self.site.static_dir)
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root_join(&self.docs.path)
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.root_join(&self.blog.path)
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root_join(&self.pages.path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply load options on top of the file contents.
    ///
    /// `strict` wins over `warn_only` when both are set.
    pub fn apply_overrides(&mut self, options: &LoadOptions) {
        if let Some(url) = &options.site_url {
            self.site.url = url.clone();
        }
        if options.strict {
            self.links.make_strict();
        } else if options.warn_only {
            self.links.make_lenient();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section.
    ///
    /// Collects all errors and returns them at once. Returns the loaded
    /// sidebars (if `docs.sidebar_path` is set) for link checking.
    pub fn validate(&self) -> Result<Option<Sidebars>> {
        let mut diag = ConfigDiagnostics::new();
        let static_dir = self.static_dir();

        self.site.validate(&static_dir, &mut diag);
        self.i18n.validate(&mut diag);
        let sidebars = self.docs.validate(&self.root, &mut diag);
        self.blog.validate(&mut diag);
        self.navbar
            .validate(&static_dir, sidebars.as_ref(), &mut diag);
        self.footer.validate(&mut diag);
        self.theme.validate(&self.root, &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(ConfigError::Diagnostics)?;
        Ok(sidebars)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\ntagline = \"Test\"\nurl = \"https://example.com\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let err = SiteConfig::from_str("[site\ntitle = \"BRC721 Docs\"").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.links.on_broken_links, BrokenLinkPolicy::Throw);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ntagline = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path_sets_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\ntitle = \"T\"\n[mystery]\nx = 1").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.title, "T");
        assert_eq!(config.config_path, crate::utils::path::normalize_path(&path));
        assert_eq!(config.root, config.config_path.parent().unwrap());
        assert_eq!(config.docs_dir(), config.root.join("docs"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/no/such/docsite.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = test_parse_config("");
        config.apply_overrides(&LoadOptions {
            site_url: Some("https://preview.example.com".into()),
            strict: true,
            warn_only: true,
            ..Default::default()
        });
        assert_eq!(config.site.url, "https://preview.example.com");
        assert_eq!(config.links.on_broken_markdown_links, BrokenLinkPolicy::Throw);

        let mut config = test_parse_config("");
        config.apply_overrides(&LoadOptions {
            warn_only: true,
            ..Default::default()
        });
        assert_eq!(config.links.on_broken_links, BrokenLinkPolicy::Warn);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = SiteConfig::from_str(
            "[site]\ntitle = \"\"\ntagline = \"T\"\nurl = \"nope\"\n\
             [i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\"]",
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        let err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(err.mentions("site.title"));
        assert!(err.mentions("site.url"));
        assert!(err.mentions("i18n.default_locale"));
    }

    #[test]
    fn test_validate_ok() {
        let config = test_parse_config("");
        assert!(config.validate().unwrap().is_none());
    }
}
