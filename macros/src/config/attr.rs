//! Attribute parsing helpers for Config derive macro.

use syn::{Attribute, Lit, LitStr, Meta};

/// Everything a `#[config(...)]` attribute list can carry.
#[derive(Debug, Default)]
pub struct ConfigAttrs {
    pub section: Option<String>,
    pub name: Option<String>,
    pub default: Option<String>,
    pub skip: bool,
    pub hidden: bool,
    pub sub: bool,
}

impl ConfigAttrs {
    /// Parse all `#[config(...)]` attributes on an item.
    ///
    /// Unknown keys are rejected so typos surface at compile time.
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("config") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("section") {
                    out.section = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("name") {
                    out.name = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("default") {
                    out.default = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                } else if meta.path.is_ident("hidden") {
                    out.hidden = true;
                } else if meta.path.is_ident("sub") {
                    out.sub = true;
                } else {
                    return Err(meta.error("unsupported config attribute"));
                }
                Ok(())
            })?;
        }

        Ok(out)
    }
}

/// Extract doc comment from #[doc = "..."] attributes.
pub fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(expr_lit) => match &expr_lit.lit {
                    Lit::Str(s) => Some(s.value()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}
