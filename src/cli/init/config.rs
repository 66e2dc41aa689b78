//! Configuration file generation.
//!
//! Creates docsite.toml, a starter doc and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{
    BlogConfig, CONFIG_FILE, DocsConfig, FooterConfig, I18nConfig, LinksConfig, NavbarConfig,
    PagesConfig, SiteInfoConfig, ThemeSectionConfig,
};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// First doc of a new site.
const INTRO_DOC: &str = "---\nsidebar_position: 1\n---\n\n# Introduction\n\nStart writing your docs here.\n";

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let sections = [
        SiteInfoConfig::template_with_header(),
        I18nConfig::template_with_header(),
        LinksConfig::template_with_header(),
        DocsConfig::template_with_header(),
        BlogConfig::template_with_header(),
        PagesConfig::template_with_header(),
        NavbarConfig::template_with_header(),
        FooterConfig::template_with_header(),
        ThemeSectionConfig::template_with_header(),
    ];

    let mut out = format!(
        "# docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&sections.join("\n"));
    out
}

/// Write default docsite.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write docs/intro.md unless it already exists
pub fn write_intro_doc(root: &Path, docs_dir: &Path) -> Result<()> {
    let path = root.join(docs_dir).join("intro.md");
    if !path.exists() {
        fs::write(&path, INTRO_DOC)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Renderer output (`/build/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = ["/build/", "/node_modules/", ".DS_Store"].join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_without_unknown_fields() {
        let template = generate_config_template();
        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {:?}", ignored);
        assert_eq!(config.site.title, "My Docs");
        assert_eq!(config.i18n.locales, vec!["en"]);
        assert_eq!(config.theme.prism.dark_theme, "dracula");
    }

    #[test]
    fn test_template_sections() {
        let template = generate_config_template();
        for header in ["[site]", "[i18n]", "[links]", "[docs]", "[blog]", "[theme.prism]"] {
            assert!(template.contains(header), "missing {header}");
        }
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).is_file());
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
        assert!(
            fs::read_to_string(temp.path().join(".ignore"))
                .unwrap()
                .contains("/build/")
        );
    }
}
