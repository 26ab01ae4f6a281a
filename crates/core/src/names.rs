//! Canonical identifiers for CSS custom property names.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid regex"));

/// Normalize a display name into a kebab-case token.
///
/// Every run of characters outside `[A-Za-z0-9]` collapses into a single
/// hyphen, leading/trailing hyphens are dropped and the result is lowercased.
/// `"Color/Brand Primary"` becomes `"color-brand-primary"`.
pub fn normalize(name: &str) -> String {
    SEPARATOR_RUN.replace_all(name, "-").trim_matches('-').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slashes_and_spaces() {
        assert_eq!(normalize("Color/Brand Primary"), "color-brand-primary");
        assert_eq!(normalize("spacing / md"), "spacing-md");
    }

    #[test]
    fn test_normalize_trims_separators() {
        assert_eq!(normalize("  --Radius--  "), "radius");
        assert_eq!(normalize("__a__b__"), "a-b");
    }

    #[test]
    fn test_normalize_empty_and_symbols_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_non_ascii_is_separator() {
        assert_eq!(normalize("Größe 2"), "gr-e-2");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in ["Color/Brand Primary", "font-size/XL", "a  b", "--x--", "Z-Index 10"] {
            let once = normalize(name);
            assert_eq!(normalize(&once), once);
            assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!once.starts_with('-') && !once.ends_with('-'));
            assert!(!once.contains("--"));
        }
    }
}
