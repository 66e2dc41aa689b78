//! Config derive macro - generates FIELDS and template().

mod attr;
mod field;
mod template;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{ConfigAttrs, extract_doc_comment};
use field::FieldInfo;
use template::generate_template_code;
use types::infer_section;

/// Generate Config implementation (FIELDS + template).
pub fn derive(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let struct_attrs = ConfigAttrs::parse(&input.attrs)?;
    let section = struct_attrs
        .section
        .unwrap_or_else(|| infer_section(&name.to_string()));
    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Config only works on structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Config only works on structs",
            ));
        }
    };

    let mut field_infos = Vec::with_capacity(fields.len());
    for field in fields {
        if let Some(info) = FieldInfo::from_field(field)? {
            field_infos.push(info);
        }
    }

    let path_fields: Vec<_> = field_infos.iter().filter(|f| !f.skip).collect();

    let field_defs = path_fields.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = path_fields.iter().map(|f| {
        let name = &f.name;
        let full_path = f.full_path(&section);
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    let template_fields: Vec<_> = field_infos.iter().filter(|f| f.in_template()).collect();
    let template_code = generate_template_code(&template_fields);

    // `default` is only read by runtime-valued template lines
    let needs_default = template_fields
        .iter()
        .any(|f| !f.sub && f.default.is_none() && !types::type_to_string(&f.ty).starts_with("Option<"));
    let default_def = if needs_default {
        quote! { let default = Self::default(); }
    } else {
        quote! {}
    };

    Ok(quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types, dead_code)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        #[allow(dead_code)]
        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Generate TOML template for this config section.
            pub fn template() -> String {
                #default_def
                let mut out = String::new();
                #template_code
                out
            }

            /// Generate TOML template with section header.
            pub fn template_with_header() -> String {
                let mut out = String::new();
                for line in Self::TEMPLATE_DOC.lines() {
                    out.push_str("# ");
                    out.push_str(line.trim());
                    out.push('\n');
                }
                let section = Self::TEMPLATE_SECTION;
                if !section.is_empty() {
                    out.push('[');
                    out.push_str(section);
                    out.push_str("]\n");
                }
                out.push_str(&Self::template());
                out
            }
        }
    })
}
