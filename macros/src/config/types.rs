//! Type helper functions for Config derive macro.

use quote::quote;
use syn::Type;

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Format a literal default for the template.
///
/// Strings, paths and enum-like values get quoted; numbers, booleans and
/// inline arrays are written verbatim.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    let inner = ty
        .strip_prefix("Option<")
        .and_then(|t| t.strip_suffix('>'))
        .unwrap_or(ty);

    let verbatim = inner.starts_with("Vec<")
        || matches!(
            inner,
            "bool" | "u8" | "u16" | "u32" | "u64" | "usize" | "i32" | "i64" | "f32" | "f64"
        );

    if verbatim {
        value.to_string()
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section("NavbarConfig"), "navbar");
        assert_eq!(infer_section("I18nSectionConfig"), "i18n");
        assert_eq!(infer_section("FooterLinkGroup"), "footer_link_group");
    }

    #[test]
    fn test_format_default() {
        assert_eq!(format_default_for_type("/", "String"), "\"/\"");
        assert_eq!(format_default_for_type("docs", "PathBuf"), "\"docs\"");
        assert_eq!(format_default_for_type("true", "bool"), "true");
        assert_eq!(format_default_for_type("[\"en\"]", "Vec<String>"), "[\"en\"]");
        assert_eq!(format_default_for_type("throw", "BrokenLinkPolicy"), "\"throw\"");
        assert_eq!(format_default_for_type("x", "Option<String>"), "\"x\"");
    }
}
