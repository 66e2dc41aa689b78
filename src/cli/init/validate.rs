//! Pre-initialization checks on the target directory.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::CONFIG_FILE;

/// Where `docsite init` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `docsite init`: the current directory, which must hold nothing but dotfiles.
    CurrentDir,
    /// `docsite init <name>`: a new subdirectory, which must not exist.
    NewDir,
}

/// Refuse to initialize over existing content.
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    if root.join(CONFIG_FILE).exists() {
        bail!("`{}` already has a {}", root.display(), CONFIG_FILE);
    }

    match mode {
        InitMode::NewDir if root.exists() => bail!(
            "`{}` already exists, choose another name or remove it",
            root.display()
        ),
        InitMode::CurrentDir if !only_dotfiles(root)? => bail!(
            "`{}` is not empty.\nUse `docsite init <name>` to create in a new subdirectory.",
            root.display()
        ),
        _ => Ok(()),
    }
}

/// True when `dir` is missing or holds only hidden entries (`.git`, `.github`).
fn only_dotfiles(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(true);
    }
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory '{}'", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_name().to_string_lossy().starts_with('.') {
            return Ok(false);
        }
    }
    Ok(true)
}
