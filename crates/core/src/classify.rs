//! Name-based classification tables.
//!
//! The host carries no structured type metadata beyond "number", so the
//! formatting rule for a number, and whether a collection holds responsive
//! dimensions, are derived from keywords in variable and collection names.
//! Each table is evaluated in declaration order and the first match wins.

/// How a numeric value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberCategory {
    /// Raw number, no unit (`700`, `0.5`).
    Unitless,
    /// Pixel value converted to `rem`.
    Typographic,
    /// Pixel value rounded to two decimals, `px` unit.
    Dimensional,
    /// Anything unclassified; rendered like [`NumberCategory::Typographic`].
    Generic,
}

struct NumberRule {
    category: NumberCategory,
    collection_keywords: &'static [&'static str],
    name_keywords: &'static [&'static str],
}

/// Collection keywords marking a collection as dimensional.
pub const DIMENSIONAL_COLLECTION_KEYWORDS: &[&str] =
    &["dimension", "container", "layout", "grid", "spacing"];

const NUMBER_RULES: &[NumberRule] = &[
    NumberRule {
        category: NumberCategory::Unitless,
        collection_keywords: &[],
        name_keywords: &["weight", "opacity", "z-index", "flex", "ratio", "scale"],
    },
    NumberRule {
        category: NumberCategory::Typographic,
        collection_keywords: &["font", "typography", "text"],
        name_keywords: &["font-size", "line-height", "letter-spacing"],
    },
    NumberRule {
        category: NumberCategory::Dimensional,
        collection_keywords: DIMENSIONAL_COLLECTION_KEYWORDS,
        name_keywords: &[
            "space", "padding", "margin", "gap", "radius", "border", "size", "height",
            "width", "offset", "inset",
        ],
    },
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Pick the formatting category for a number declared as `variable_name`
/// inside `collection_name`. Matching is a case-insensitive substring search.
pub fn classify_number(collection_name: &str, variable_name: &str) -> NumberCategory {
    let collection = collection_name.to_lowercase();
    let name = variable_name.to_lowercase();

    NUMBER_RULES
        .iter()
        .find(|rule| {
            contains_any(&name, rule.name_keywords)
                || contains_any(&collection, rule.collection_keywords)
        })
        .map_or(NumberCategory::Generic, |rule| rule.category)
}

/// Whether a collection's values belong in the responsive dimensions file
/// rather than the color scheme files.
pub fn is_dimensional_collection(collection_name: &str) -> bool {
    contains_any(&collection_name.to_lowercase(), DIMENSIONAL_COLLECTION_KEYWORDS)
}

/// Responsive breakpoint bucket derived from a mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

const BREAKPOINT_KEYWORDS: &[(Breakpoint, &str)] = &[
    (Breakpoint::Desktop, "desktop"),
    (Breakpoint::Tablet, "tablet"),
    (Breakpoint::Mobile, "mobile"),
];

impl Breakpoint {
    pub fn from_mode_name(mode_name: &str) -> Option<Self> {
        let name = mode_name.to_lowercase();
        BREAKPOINT_KEYWORDS.iter().find(|(_, k)| name.contains(k)).map(|(bp, _)| *bp)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }
}

/// Color scheme derived from a mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Light,
    Dark,
}

// dark is checked first so "Light (dark variant)" lands in dark
const SCHEME_KEYWORDS: &[(Scheme, &str)] = &[(Scheme::Dark, "dark"), (Scheme::Light, "light")];

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Light, Scheme::Dark];

    pub fn from_mode_name(mode_name: &str) -> Option<Self> {
        let name = mode_name.to_lowercase();
        SCHEME_KEYWORDS.iter().find(|(_, k)| name.contains(k)).map(|(s, _)| *s)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Light => "light",
            Scheme::Dark => "dark",
        }
    }
}

/// A base mode seeds every scheme file with its primitive values.
pub fn is_base_mode(mode_name: &str) -> bool {
    let name = mode_name.to_lowercase();
    name.contains("mode 1") || name.contains("default")
}
