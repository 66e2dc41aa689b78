//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteInfoConfig {
//!     /// Site title.
//!     pub title: String,
//!
//!     /// Base path the site is served under.
//!     #[config(default = "/")]
//!     pub base_url: String,
//!
//!     /// Resolved at load time.
//!     #[config(skip)]
//!     pub root: PathBuf,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteInfoConfig::template() -> TOML body with comments
//! // - SiteInfoConfig::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (empty for array items)
//!
//! Field-level:
//! - `#[config(skip)]` - no field path, no template line
//! - `#[config(hidden)]` - field path only, no template line
//! - `#[config(sub)]` - nested config, rendered as its own section
//! - `#[config(name = "x")]` - custom TOML key
//! - `#[config(default = "x")]` - literal default shown in the template
//!
//! # Section inference
//!
//! Without `section`, the name is inferred from the struct name:
//! - `NavbarConfig` → `navbar`
//! - `I18nSectionConfig` → `i18n`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
