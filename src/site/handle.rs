//! Process-wide resolved manifest.
//!
//! Installed once after a successful load; readers share the same `Arc`.

use std::sync::{Arc, OnceLock};

use anyhow::{Result, bail};

use super::SiteManifest;

static SITE: OnceLock<Arc<SiteManifest>> = OnceLock::new();

/// Install the manifest. Errors if one is already installed.
pub fn init_site(manifest: SiteManifest) -> Result<Arc<SiteManifest>> {
    let arc = Arc::new(manifest);
    if SITE.set(Arc::clone(&arc)).is_err() {
        bail!("site manifest already initialized");
    }
    Ok(arc)
}

/// The installed manifest, if any.
#[inline]
pub fn site() -> Option<Arc<SiteManifest>> {
    SITE.get().cloned()
}
