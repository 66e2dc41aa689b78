//! `docsite resolve`: print the resolved manifest as JSON.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::LoadOptions;
use crate::log;
use crate::site::{SiteManifest, init_site, load};

/// Load, install and print the manifest.
pub fn run_resolve(options: &LoadOptions, pretty: bool, output: Option<&Path>) -> Result<()> {
    let site = init_site(load(options)?)?;
    let formatted = to_json(&site, pretty)?;

    if let Some(path) = output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create '{}'", path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("resolve"; "wrote manifest to {}", path.display());
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

fn to_json(site: &SiteManifest, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(site)?
    } else {
        serde_json::to_string(site)?
    };
    Ok(json)
}
