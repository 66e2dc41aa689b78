//! Link targets shared by navbar and footer items.
//!
//! An item names its target with exactly one of `to` (site route),
//! `href` (external URL) or `sidebar_id` (navbar only).

use crate::config::util::{check_absolute_url, check_site_path};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::route::Sidebars;

/// URL schemes accepted for `href`.
pub const HREF_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Borrowed view of an item's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRef<'a> {
    Sidebar(&'a str),
    Internal(&'a str),
    External(&'a str),
}

impl<'a> TargetRef<'a> {
    /// Pick the single configured target.
    ///
    /// Errors with a message when none or several are set.
    pub fn select(
        to: Option<&'a str>,
        href: Option<&'a str>,
        sidebar_id: Option<&'a str>,
    ) -> Result<Self, String> {
        let set: Vec<(&str, TargetRef<'a>)> = [
            to.map(|v| ("to", Self::Internal(v))),
            href.map(|v| ("href", Self::External(v))),
            sidebar_id.map(|v| ("sidebar_id", Self::Sidebar(v))),
        ]
        .into_iter()
        .flatten()
        .collect();

        match set.as_slice() {
            [(_, target)] => Ok(*target),
            [] => Err("no link target set".to_string()),
            many => Err(format!(
                "only one link target allowed, found: {}",
                many.iter().map(|(k, _)| *k).collect::<Vec<_>>().join(", ")
            )),
        }
    }

    /// TOML key holding this target.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Sidebar(_) => "sidebar_id",
            Self::Internal(_) => "to",
            Self::External(_) => "href",
        }
    }
}

/// Validate one navbar/footer item.
///
/// `base` is the item path (e.g. `navbar.items[3]`); errors are reported
/// on the offending key below it.
pub fn validate_item(
    base: &FieldPath,
    label: &str,
    target: Result<TargetRef<'_>, String>,
    sidebars: Option<&Sidebars>,
    diag: &mut ConfigDiagnostics,
) {
    if label.trim().is_empty() {
        diag.error(base.join("label"), "label must not be empty");
    }

    let target = match target {
        Ok(target) => target,
        Err(message) => {
            diag.error_with_hint(
                base.clone(),
                message,
                "set exactly one of `to` (site route) or `href` (external URL)",
            );
            return;
        }
    };

    let field = base.join(target.key());
    match target {
        TargetRef::Internal(to) => {
            if let Err(message) = check_site_path(to) {
                diag.error_with_hint(field, message, "external links go in `href`");
            }
        }
        TargetRef::External(href) => {
            if let Err(message) = check_absolute_url(href, HREF_SCHEMES) {
                diag.error_with_hint(field, message, "site routes go in `to`");
            }
        }
        TargetRef::Sidebar(id) => match sidebars {
            Some(sidebars) if sidebars.contains(id) => {}
            Some(sidebars) => diag.error_with_hint(
                field,
                format!("sidebar `{}` is not defined", id),
                format!("available sidebars: {}", sidebars.ids().join(", ")),
            ),
            None => diag.error_with_hint(
                field,
                format!("sidebar `{}` referenced but no sidebars are configured", id),
                "set `docs.sidebar_path` to a sidebars file",
            ),
        },
    }
}
