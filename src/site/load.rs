//! Load pipeline: parse, override, validate, check links, resolve.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::SiteManifest;
use crate::config::{CONFIG_FILE, LoadOptions, SiteConfig, find_config_file};
use crate::log;
use crate::route::{RouteTable, Sidebars};
use crate::utils::path::normalize_path;
use crate::utils::plural::plural_count;
use crate::validate::check_links;

/// Locate and parse the config file named by `options`.
pub fn read_config(options: &LoadOptions) -> Result<SiteConfig> {
    let path = find_config_file(&options.config).ok_or_else(|| {
        anyhow!(
            "config file `{}` not found in current directory or any parent",
            options.config.display()
        )
    })?;
    SiteConfig::from_path(&path)
}

/// Load the config file named by `options` into a manifest.
///
/// With `options.stdin` the config text is read from stdin and content
/// paths resolve against the current directory. Loading the same
/// unchanged file twice gives equal manifests.
pub fn load(options: &LoadOptions) -> Result<SiteManifest> {
    if options.stdin {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read config from stdin")?;
        return load_str(&content, &std::env::current_dir()?, options);
    }
    let config = read_config(options)?;
    finish(config, options)
}

/// Like [`load`], for config text already in memory. Content paths are
/// resolved against `root`.
pub fn load_str(content: &str, root: &Path, options: &LoadOptions) -> Result<SiteManifest> {
    let mut config = SiteConfig::from_str(content)?;
    config.root = normalize_path(root);
    config.config_path = config.root.join(CONFIG_FILE);
    finish(config, options)
}

fn finish(mut config: SiteConfig, options: &LoadOptions) -> Result<SiteManifest> {
    config.apply_overrides(options);
    let sidebars = config.validate()?;

    if options.check_links && config.links.any_enabled() {
        enforce_links(&config, sidebars.as_ref())?;
    } else {
        crate::debug!("links"; "link checking skipped");
    }

    Ok(SiteManifest::resolve(&config)?)
}

fn enforce_links(config: &SiteConfig, sidebars: Option<&Sidebars>) -> Result<()> {
    let routes = RouteTable::scan(config, sidebars)?;
    for conflict in routes.conflicts() {
        log!(
            "warning";
            "duplicate route `{}` from `{}` and `{}`, keeping the first",
            conflict.route, conflict.first, conflict.second
        );
    }

    let report = check_links(config, &routes, sidebars);
    crate::debug!(
        "links";
        "checked {} against {}",
        plural_count(routes.markdown_files().len(), "markdown file"),
        plural_count(routes.len(), "route")
    );
    report.enforce(&config.links)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BrokenLinkPolicy, ConfigError};
    use crate::validate::{LinkClass, LinkError};
    use std::fs;
    use tempfile::TempDir;

    const SITE: &str = "[site]\ntitle = \"BRC721 Docs\"\ntagline = \"Docs\"\nurl = \"https://docs.brc721.com\"\n";

    fn site(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (path, content) in files {
            let path = temp.path().join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        temp
    }

    fn load_in(temp: &TempDir, extra: &str, options: &LoadOptions) -> Result<SiteManifest> {
        load_str(&format!("{SITE}{extra}"), temp.path(), options)
    }

    fn config_error(err: &anyhow::Error) -> &ConfigError {
        err.downcast_ref::<ConfigError>().expect("expected a ConfigError")
    }

    #[test]
    fn test_load_from_file_is_idempotent() {
        let temp = site(&[
            ("docs/overview.md", "# Overview"),
            (CONFIG_FILE, &format!("{SITE}[[navbar.items]]\nto = \"/docs/overview\"\nlabel = \"Overview\"\n")),
        ]);
        let options = LoadOptions {
            config: temp.path().join(CONFIG_FILE),
            ..Default::default()
        };
        let first = load(&options).unwrap();
        let second = load(&options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.title, "BRC721 Docs");
    }

    #[test]
    fn test_missing_config_file() {
        let temp = TempDir::new().unwrap();
        let options = LoadOptions {
            config: temp.path().join(CONFIG_FILE),
            ..Default::default()
        };
        assert!(load(&options).unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_empty_locales_rejected() {
        let temp = site(&[]);
        let err = load_in(&temp, "[i18n]\nlocales = []", &LoadOptions::default()).unwrap_err();
        assert!(config_error(&err).mentions("i18n.locales"));
    }

    #[test]
    fn test_default_locale_outside_set_rejected() {
        let temp = site(&[]);
        let err = load_in(
            &temp,
            "[i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\"]",
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(config_error(&err).mentions("i18n.default_locale"));
    }

    #[test]
    fn test_external_navbar_item_kept() {
        let temp = site(&[]);
        let manifest = load_in(
            &temp,
            "[[navbar.items]]\nhref = \"https://github.com/d3vx-com/brc721-docs\"\nlabel = \"GitHub\"\nposition = \"right\"",
            &LoadOptions::default(),
        )
        .unwrap();
        assert_eq!(
            manifest.navbar.items[0].target,
            super::super::nav::NavTarget::External {
                href: "https://github.com/d3vx-com/brc721-docs".into()
            }
        );
        assert_eq!(manifest.navbar.items[0].label, "GitHub");
        assert_eq!(manifest.navbar.items[0].position, crate::config::NavPosition::Right);
    }

    #[test]
    fn test_slug_with_inline_comment_resolves() {
        let temp = site(&[("docs/intro.md", "---\nslug: /start # landing\n---\n# Intro")]);
        let extra = "[[navbar.items]]\nto = \"/docs/start\"\nlabel = \"Start\"\n";
        assert!(load_in(&temp, extra, &LoadOptions::default()).is_ok());
    }

    const BROKEN_TO: &str = "[[navbar.items]]\nto = \"/docs/missing\"\nlabel = \"Missing\"\n";

    #[test]
    fn test_broken_link_throw() {
        let temp = site(&[("docs/intro.md", "")]);
        let err = load_in(&temp, BROKEN_TO, &LoadOptions::default()).unwrap_err();
        let links = err.downcast_ref::<LinkError>().unwrap();
        assert_eq!(links.report().count(LinkClass::Site), 1);
    }

    #[test]
    fn test_broken_link_warn_succeeds() {
        let temp = site(&[("docs/intro.md", "")]);
        let extra = format!("[links]\non_broken_links = \"warn\"\n{BROKEN_TO}");
        let manifest = load_in(&temp, &extra, &LoadOptions::default()).unwrap();
        assert_eq!(manifest.on_broken_links, BrokenLinkPolicy::Warn);
    }

    #[test]
    fn test_warn_only_and_no_links() {
        let temp = site(&[("docs/intro.md", "")]);
        let warn_only = LoadOptions {
            warn_only: true,
            ..Default::default()
        };
        assert!(load_in(&temp, BROKEN_TO, &warn_only).is_ok());

        let no_links = LoadOptions {
            check_links: false,
            ..Default::default()
        };
        assert!(load_in(&temp, BROKEN_TO, &no_links).is_ok());
    }

    #[test]
    fn test_markdown_link_policies() {
        let temp = site(&[("docs/intro.md", "[gone](./gone.md)")]);
        // default policy for markdown links is warn
        assert!(load_in(&temp, "", &LoadOptions::default()).is_ok());

        let strict = LoadOptions {
            strict: true,
            ..Default::default()
        };
        let err = load_in(&temp, "", &strict).unwrap_err();
        let links = err.downcast_ref::<LinkError>().unwrap();
        assert_eq!(links.report().count(LinkClass::Markdown), 1);
    }

    #[test]
    fn test_page_links_not_checked() {
        let temp = site(&[("docs/intro.md", ""), ("src/pages/terms.md", "[gone](./gone.md)")]);
        let strict = LoadOptions {
            strict: true,
            ..Default::default()
        };
        assert!(load_in(&temp, "", &strict).is_ok());
    }

    #[test]
    fn test_site_url_override_validated() {
        let temp = site(&[]);
        let options = LoadOptions {
            site_url: Some("https://preview.brc721.com".into()),
            ..Default::default()
        };
        assert_eq!(load_in(&temp, "", &options).unwrap().url, "https://preview.brc721.com");

        let options = LoadOptions {
            site_url: Some("not a url".into()),
            ..Default::default()
        };
        let err = load_in(&temp, "", &options).unwrap_err();
        assert!(config_error(&err).mentions("site.url"));
    }
}
