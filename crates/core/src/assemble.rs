//! Stylesheet rendering and the `index.css` manifest.

use indexmap::IndexSet;
use serde::Serialize;

use crate::classify::{Breakpoint, Scheme};
use crate::compose::{ResponsiveBuckets, SchemeMapping};
use crate::export::ExportOptions;

pub const MANIFEST_NAME: &str = "index.css";

/// One generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub name: String,
    pub content: String,
}

/// Selector of the theme class, e.g. `.tedi-theme--acme`.
pub fn theme_selector(theme_slug: &str, options: &ExportOptions) -> String {
    format!(".{}--{}", options.class_prefix, theme_slug)
}

fn declaration(indent: &str, name: &str, value: &str) -> String {
    format!("{indent}--{name}: {value};\n")
}

fn rule<'a>(
    indent: &str,
    selector: &str,
    decls: impl IntoIterator<Item = (&'a String, &'a String)>,
) -> String {
    let inner = format!("{indent}  ");
    let mut out = format!("{indent}{selector} {{\n");
    for (name, value) in decls {
        out.push_str(&declaration(&inner, name, value));
    }
    out.push_str(indent);
    out.push_str("}\n");
    out
}

pub fn color_file_name(theme_slug: &str, scheme: Scheme) -> String {
    format!("_color-variables__{theme_slug}-{}.css", scheme.as_str())
}

pub fn responsive_file_name(theme_slug: &str) -> String {
    format!("_dimensional-variables__{theme_slug}.css")
}

/// The file for one color scheme, or `None` when the mapping is empty.
pub fn color_scheme_file(
    theme_slug: &str,
    scheme: Scheme,
    mapping: &SchemeMapping,
    options: &ExportOptions,
) -> Option<OutputFile> {
    if mapping.is_empty() {
        return None;
    }

    let mut selector = theme_selector(theme_slug, options);
    if scheme == Scheme::Dark {
        selector.push_str("-dark");
    }

    Some(OutputFile {
        name: color_file_name(theme_slug, scheme),
        content: rule("", &selector, mapping),
    })
}

fn pairs(decls: &[(String, String)]) -> impl Iterator<Item = (&String, &String)> {
    decls.iter().map(|(n, v)| (n, v))
}

/// The responsive dimensions file, or `None` when there are no desktop
/// values to form the unscoped rule.
pub fn responsive_file(
    theme_slug: &str,
    buckets: &ResponsiveBuckets,
    options: &ExportOptions,
) -> Option<OutputFile> {
    if !buckets.is_renderable() {
        return None;
    }

    let selector = theme_selector(theme_slug, options);
    let mut content = rule("", &selector, pairs(&buckets.desktop));

    for (breakpoint, query) in [
        (Breakpoint::Tablet, &options.tablet_query),
        (Breakpoint::Mobile, &options.mobile_query),
    ] {
        let decls = buckets.bucket(breakpoint);
        if decls.is_empty() {
            continue;
        }
        content.push_str(&format!("\n@media {query} {{\n"));
        content.push_str(&rule("  ", &selector, pairs(decls)));
        content.push_str("}\n");
    }

    Some(OutputFile { name: responsive_file_name(theme_slug), content })
}

/// `index.css` importing every file once, in first-seen order.
pub fn manifest(files: &[OutputFile]) -> OutputFile {
    let imports: IndexSet<String> =
        files.iter().map(|f| format!("@import \"{}\";\n", f.name)).collect();

    OutputFile { name: MANIFEST_NAME.to_string(), content: imports.into_iter().collect() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> SchemeMapping {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    fn decls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_light_file() {
        let file = color_scheme_file(
            "acme",
            Scheme::Light,
            &mapping(&[("bg", "#ffffff"), ("fg", "var(--ink)")]),
            &ExportOptions::default(),
        )
        .unwrap();

        assert_eq!(file.name, "_color-variables__acme-light.css");
        assert_eq!(file.content, ".tedi-theme--acme {\n  --bg: #ffffff;\n  --fg: var(--ink);\n}\n");
    }

    #[test]
    fn test_dark_file_selector_suffix() {
        let file = color_scheme_file(
            "acme",
            Scheme::Dark,
            &mapping(&[("bg", "#000000")]),
            &ExportOptions::default(),
        )
        .unwrap();

        assert_eq!(file.name, "_color-variables__acme-dark.css");
        assert!(file.content.starts_with(".tedi-theme--acme-dark {\n"));
    }

    #[test]
    fn test_empty_mapping_has_no_file() {
        let none = color_scheme_file("acme", Scheme::Light, &SchemeMapping::new(), &ExportOptions::default());
        assert!(none.is_none());
    }

    #[test]
    fn test_responsive_file_layout() {
        let buckets = ResponsiveBuckets {
            desktop: decls(&[("gap", "16px")]),
            tablet: Vec::new(),
            mobile: decls(&[("gap", "8px")]),
        };
        let file = responsive_file("acme", &buckets, &ExportOptions::default()).unwrap();

        assert_eq!(file.name, "_dimensional-variables__acme.css");
        assert_eq!(
            file.content,
            ".tedi-theme--acme {\n  --gap: 16px;\n}\n\
             \n@media (max-width: 48rem) {\n  .tedi-theme--acme {\n    --gap: 8px;\n  }\n}\n"
        );
    }

    #[test]
    fn test_responsive_requires_desktop() {
        let buckets = ResponsiveBuckets {
            desktop: Vec::new(),
            tablet: decls(&[("gap", "12px")]),
            mobile: decls(&[("gap", "8px")]),
        };
        assert!(responsive_file("acme", &buckets, &ExportOptions::default()).is_none());
    }

    #[test]
    fn test_manifest_dedupes_in_order() {
        let file = |name: &str| OutputFile { name: name.to_string(), content: String::new() };
        let out = manifest(&[file("b.css"), file("a.css"), file("b.css")]);

        assert_eq!(out.name, "index.css");
        assert_eq!(out.content, "@import \"b.css\";\n@import \"a.css\";\n");
    }
}
