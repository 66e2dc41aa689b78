//! Doc categories and their generated index pages.
//!
//! A docs directory may carry `_category_.json` or `_category_.toml`:
//!
//! ```json
//! { "label": "Tutorials", "position": 2, "link": { "type": "generated-index" } }
//! ```

use crate::utils::slug::slugify;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata file names, checked in order.
pub const CATEGORY_FILES: &[&str] = &["_category_.json", "_category_.toml"];

/// Contents of a `_category_` file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CategoryMeta {
    pub label: Option<String>,
    pub position: Option<f64>,
    pub link: Option<CategoryLink>,
}

/// What a category label links to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// A generated page listing the category's docs.
    GeneratedIndex {
        #[serde(default)]
        slug: Option<String>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
    /// An existing doc.
    Doc { id: String },
}

impl CategoryMeta {
    /// Load the category file in `dir`, if any.
    pub fn load(dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let Some(path) = CATEGORY_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
        else {
            return Ok(None);
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let meta = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("invalid category file `{}`", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("invalid category file `{}`", path.display()))?
        };
        Ok(Some((path, meta)))
    }
}

/// Route of a generated category index.
///
/// `prefix` is the docs route prefix (`/docs`). Without an explicit slug
/// the route is `{prefix}/category/{slug(label)}`.
pub fn generated_index_route(prefix: &str, label: &str, slug: Option<&str>) -> String {
    match slug {
        Some(slug) => format!("{}/{}", prefix, slug.trim_start_matches('/')),
        None => format!("{}/category/{}", prefix, slugify(label)),
    }
}
