//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{ConfigAttrs, extract_doc_comment};

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub default: Option<String>,
    pub skip: bool,
    pub hidden: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field. Tuple fields yield `None`.
    pub fn from_field(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = field.ident.as_ref() else {
            return Ok(None);
        };
        let attrs = ConfigAttrs::parse(&field.attrs)?;

        Ok(Some(Self {
            name: ident.clone(),
            toml_name: attrs.name.unwrap_or_else(|| ident.to_string()),
            doc: extract_doc_comment(&field.attrs),
            default: attrs.default,
            skip: attrs.skip,
            hidden: attrs.hidden,
            sub: attrs.sub,
            ty: field.ty.clone(),
        }))
    }

    /// Full dotted TOML path of this field within `section`.
    pub fn full_path(&self, section: &str) -> String {
        if section.is_empty() {
            self.toml_name.clone()
        } else {
            format!("{}.{}", section, self.toml_name)
        }
    }

    /// Whether the field shows up in the generated template.
    pub fn in_template(&self) -> bool {
        !self.skip && !self.hidden
    }
}
