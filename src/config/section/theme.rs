//! `[theme]` section configuration.
//!
//! Theme assets plus the code highlighting palette. Prism theme names are
//! opaque tokens handed to the renderer as-is.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! custom_css = "src/css/custom.css"
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Theme settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Stylesheet loaded after the theme's own CSS.
    pub custom_css: Option<PathBuf>,

    /// Social card image, relative to the static directory.
    pub image: Option<String>,

    /// Code highlighting palette.
    #[config(sub)]
    pub prism: PrismConfig,
}

/// Light/dark code highlighting themes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.prism")]
pub struct PrismConfig {
    /// Theme used in light mode.
    #[config(default = "github")]
    pub theme: String,

    /// Theme used in dark mode.
    #[config(default = "dracula")]
    pub dark_theme: String,

    /// Extra languages to load besides the defaults.
    pub additional_languages: Vec<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".into(),
            dark_theme: "dracula".into(),
            additional_languages: Vec::new(),
        }
    }
}

impl ThemeSectionConfig {
    /// Validate theme settings.
    ///
    /// `root` is the site root, used to check `custom_css` exists.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if let Some(css) = &self.custom_css
            && !root.join(css).is_file()
        {
            diag.error_with_hint(
                Self::FIELDS.custom_css,
                format!("`{}` not found", css.display()),
                "paths are relative to the directory containing docsite.toml",
            );
        }

        for (field, token) in [
            (PrismConfig::FIELDS.theme, &self.prism.theme),
            (PrismConfig::FIELDS.dark_theme, &self.prism.dark_theme),
        ] {
            if token.trim().is_empty() {
                diag.error(field, "theme name must not be empty");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_prism_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.prism.theme, "github");
        assert_eq!(config.theme.prism.dark_theme, "dracula");
        assert!(config.theme.prism.additional_languages.is_empty());
    }

    #[test]
    fn test_tokens_pass_through() {
        let config = test_parse_config(
            "[theme.prism]\ntheme = \"vsLight\"\ndark_theme = \"nightOwl\"\nadditional_languages = [\"rust\"]",
        );
        assert_eq!(config.theme.prism.theme, "vsLight");
        assert_eq!(config.theme.prism.dark_theme, "nightOwl");
        assert_eq!(config.theme.prism.additional_languages, vec!["rust"]);
    }

    #[test]
    fn test_missing_custom_css() {
        let config = test_parse_config("[theme]\ncustom_css = \"src/css/custom.css\"");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(Path::new("/nonexistent"), &mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.custom_css");
    }

    #[test]
    fn test_empty_theme_token() {
        let config = test_parse_config("[theme.prism]\ndark_theme = \" \"");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(Path::new("/nonexistent"), &mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.prism.dark_theme");
    }

    #[test]
    fn test_template_has_prism_section() {
        let template = ThemeSectionConfig::template_with_header();
        assert!(template.contains("[theme]"));
        assert!(template.contains("[theme.prism]"));
        assert!(template.contains("dark_theme = \"dracula\""));
    }
}
