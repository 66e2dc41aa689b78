//! Site initialization module.
//!
//! Creates new site structure with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::{config::DocsConfig, log};
use anyhow::Result;
use std::path::Path;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write docsite.toml, a starter doc and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(root: &Path, mode: InitMode, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    validate::validate_target(root, mode)?;

    structure::create_structure(root)?;
    config::write_config(root)?;
    config::write_intro_doc(root, &DocsConfig::default().path)?;
    config::write_ignore_files(root)?;

    log!("init"; "site initialized in `{}`", root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_FILE, LoadOptions};
    use tempfile::TempDir;

    #[test]
    fn test_new_site_loads() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("brc721-docs");
        new_site(&root, InitMode::NewDir, false).unwrap();

        assert!(root.join("docs/intro.md").is_file());
        let options = LoadOptions {
            config: root.join(CONFIG_FILE),
            ..Default::default()
        };
        let manifest = crate::site::load(&options).unwrap();
        assert_eq!(manifest.title, "My Docs");
    }

    #[test]
    fn test_new_site_rejects_existing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(new_site(temp.path(), InitMode::NewDir, false).is_err());
    }
}
