//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "zh-Hans"]
//!
//! [i18n.locale_configs.zh-Hans]
//! label = "简体中文"
//! direction = "ltr"
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// BCP 47 style tag: primary language plus optional subtags.
static LOCALE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "i18n")]
pub struct I18nConfig {
    /// Locale used when none is selected; must be listed in `locales`.
    #[config(default = "en")]
    pub default_locale: String,

    /// Supported locale codes.
    #[config(default = "[\"en\"]")]
    pub locales: Vec<String>,

    /// Per-locale display settings, keyed by locale code.
    #[config(hidden)]
    pub locale_configs: BTreeMap<String, LocaleConfig>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
            locale_configs: BTreeMap::new(),
        }
    }
}

/// Display settings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Name shown in the locale dropdown.
    pub label: Option<String>,
    /// Text direction.
    pub direction: Direction,
    /// Value of the `<html lang>` attribute; defaults to the locale code.
    pub html_lang: Option<String>,
}

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl I18nConfig {
    /// Validate the locale set.
    ///
    /// # Checks
    /// - `locales` is non-empty, well-formed and free of duplicates
    /// - `default_locale` is a member of `locales`
    /// - `locale_configs` only names listed locales
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locales,
                "at least one locale is required",
                format!("e.g.: locales = [\"{}\"]", self.default_locale),
            );
        }

        let mut seen = FxHashSet::default();
        for (i, code) in self.locales.iter().enumerate() {
            if !LOCALE_TAG.is_match(code) {
                diag.error_with_hint(
                    Self::FIELDS.locales.at(i),
                    format!("`{}` is not a valid locale code", code),
                    "use codes like \"en\", \"fr\" or \"zh-Hans\"",
                );
            }
            if !seen.insert(code.as_str()) {
                diag.error(
                    Self::FIELDS.locales.at(i),
                    format!("locale `{}` is listed more than once", code),
                );
            }
        }

        if !self.locales.is_empty() && !self.has_locale(&self.default_locale) {
            diag.error_with_hint(
                Self::FIELDS.default_locale,
                format!(
                    "default locale `{}` is not in {}",
                    self.default_locale,
                    Self::FIELDS.locales
                ),
                format!("add \"{}\" to {}", self.default_locale, Self::FIELDS.locales),
            );
        }

        for code in self.locale_configs.keys() {
            if !self.has_locale(code) {
                diag.error(
                    Self::FIELDS.locale_configs.join(code),
                    format!("`{}` is configured but not listed in locales", code),
                );
            }
        }
    }

    #[inline]
    pub fn has_locale(&self, code: &str) -> bool {
        self.locales.iter().any(|l| l == code)
    }
}
