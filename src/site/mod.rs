//! Resolved site manifest.
//!
//! [`SiteManifest`] is the validated, renderer-facing view of a
//! [`SiteConfig`]: camelCase keys, one target per navbar/footer item and
//! only the options a renderer consumes. It is built by [`load`] and
//! published once through [`init_site`].

mod handle;
mod load;
mod nav;

pub use handle::{init_site, site};
pub use load::{load, read_config};
pub use nav::{Footer, Navbar};

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::{BrokenLinkPolicy, ConfigError, Direction, SiteConfig};
use crate::utils::path::slash_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub direction: Direction,
    /// Falls back to the locale code.
    pub html_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nManifest {
    pub default_locale: String,
    pub locales: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub locale_configs: BTreeMap<String, LocaleManifest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrismManifest {
    pub theme: String,
    pub dark_theme: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsManifest {
    pub path: String,
    pub route_base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogManifest {
    pub path: String,
    pub route_base_path: String,
    pub show_reading_time: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Everything a renderer needs, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    pub title: String,
    pub tagline: String,
    pub url: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub on_broken_links: BrokenLinkPolicy,
    pub on_broken_markdown_links: BrokenLinkPolicy,
    pub i18n: I18nManifest,
    pub navbar: Navbar,
    pub footer: Footer,
    pub prism: PrismManifest,
    pub docs: DocsManifest,
    /// `None` when the blog is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<BlogManifest>,
    pub theme: ThemeManifest,
}

impl SiteManifest {
    /// Build the manifest from a validated config.
    ///
    /// Fails with [`ConfigError::Validation`] only when handed a config
    /// that skipped validation.
    pub fn resolve(config: &SiteConfig) -> Result<Self, ConfigError> {
        let site = &config.site;
        let rel = |path: &Path| {
            slash_path(path, &config.root).unwrap_or_else(|| path.to_string_lossy().replace('\\', "/"))
        };

        let i18n = I18nManifest {
            default_locale: config.i18n.default_locale.clone(),
            locales: config.i18n.locales.clone(),
            locale_configs: config
                .i18n
                .locale_configs
                .iter()
                .map(|(code, locale)| {
                    let manifest = LocaleManifest {
                        label: locale.label.clone(),
                        direction: locale.direction,
                        html_lang: locale.html_lang.clone().unwrap_or_else(|| code.clone()),
                    };
                    (code.clone(), manifest)
                })
                .collect(),
        };

        let prism = &config.theme.prism;
        let docs = &config.docs;
        let blog = &config.blog;

        Ok(Self {
            title: site.title.clone(),
            tagline: site.tagline.clone(),
            url: site.url.clone(),
            base_url: site.base_url.clone(),
            favicon: site.favicon.clone(),
            organization_name: site.organization_name.clone(),
            project_name: site.project_name.clone(),
            on_broken_links: config.links.on_broken_links,
            on_broken_markdown_links: config.links.on_broken_markdown_links,
            i18n,
            navbar: Navbar::resolve(&config.navbar)?,
            footer: Footer::resolve(&config.footer)?,
            prism: PrismManifest {
                theme: prism.theme.clone(),
                dark_theme: prism.dark_theme.clone(),
                additional_languages: prism.additional_languages.clone(),
            },
            docs: DocsManifest {
                path: rel(&config.docs_dir()),
                route_base_path: docs.route_base_path.clone(),
                sidebar_path: docs.sidebar_path.as_ref().map(|p| rel(&config.root_join(p))),
                edit_url: docs.edit_url.clone(),
            },
            blog: blog.enable.then(|| BlogManifest {
                path: rel(&config.blog_dir()),
                route_base_path: blog.route_base_path.clone(),
                show_reading_time: blog.show_reading_time,
                edit_url: blog.edit_url.clone(),
            }),
            theme: ThemeManifest {
                custom_css: config.theme.custom_css.as_ref().map(|p| rel(&config.root_join(p))),
                image: config.theme.image.clone(),
            },
        })
    }
}
