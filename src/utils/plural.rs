//! Pluralization for log lines.

/// `"s"` unless `n == 1`.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count followed by the noun, pluralized: `0 routes`, `1 route`,
/// `3 classes`.
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        return format!("1 {}", noun);
    }
    let suffix = if ["s", "x", "ch", "sh"].iter().any(|end| noun.ends_with(end)) {
        "es"
    } else {
        "s"
    };
    format!("{} {}{}", count, noun, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_s() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_s(2), "s");
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "route"), "0 routes");
        assert_eq!(plural_count(1, "markdown file"), "1 markdown file");
        assert_eq!(plural_count(2, "link class"), "2 link classes");
        assert_eq!(plural_count(3, "prefix"), "3 prefixes");
    }
}
