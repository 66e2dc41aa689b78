//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code for fields.
///
/// Plain keys come first, nested sections last: a key written after a
/// `[sub.section]` header would land in the wrong table.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let own = fields.iter().filter(|f| !f.sub).map(|f| own_field_code(f));
    let subs = fields.iter().filter(|f| f.sub).map(|f| sub_field_code(f));

    quote! {
        #(#own)*
        #(#subs)*
    }
}

fn doc_code(info: &FieldInfo) -> TokenStream {
    match &info.doc {
        Some(doc) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        None => quote! {},
    }
}

fn sub_field_code(info: &FieldInfo) -> TokenStream {
    let field_ty = &info.ty;
    quote! {
        out.push('\n');
        out.push_str(&<#field_ty>::template_with_header());
    }
}

fn own_field_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;
    let doc = doc_code(info);
    let ty_str = type_to_string(&info.ty);

    // Compile-time default
    if let Some(default_val) = &info.default {
        let line = format!(
            "{} = {}\n",
            toml_name,
            format_default_for_type(default_val, &ty_str)
        );
        return quote! {
            #doc
            out.push_str(#line);
        };
    }

    // Optional without a default: commented out
    if ty_str.starts_with("Option<") {
        let line = format!("# {} = \"\"\n", toml_name);
        return quote! {
            #doc
            out.push_str(#line);
        };
    }

    // Runtime value from Default::default()
    quote! {
        #doc
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push('\n');
    }
}
