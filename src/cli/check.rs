//! `docsite check`: validate the config and check links.

use anyhow::{Context, Result};

use crate::config::LoadOptions;
use crate::log;
use crate::site::{init_site, load, site};
use crate::utils::plural::plural_count;

/// Run the full load and report a one-line summary.
pub fn run_check(options: &LoadOptions) -> Result<()> {
    init_site(load(options)?)?;
    log!("check"; "{}", summary(options)?);
    Ok(())
}

/// Summary of the installed manifest.
fn summary(options: &LoadOptions) -> Result<String> {
    let site = site().context("site manifest not installed")?;
    let source = if options.stdin {
        "stdin".to_string()
    } else {
        format!("`{}`", options.config.display())
    };
    let links = if options.check_links {
        "links checked"
    } else {
        "links not checked"
    };
    Ok(format!(
        "{} is valid: {}, {}, {}",
        source,
        plural_count(site.i18n.locales.len(), "locale"),
        plural_count(site.navbar.items.len(), "navbar item"),
        links
    ))
}
