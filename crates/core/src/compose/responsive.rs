//! Breakpoint bucketing of dimensional values.

use crate::classify::{Breakpoint, is_dimensional_collection};
use crate::collect::ResolvedIndex;
use crate::names::normalize;

/// Normalized name/value declarations per breakpoint, in encounter order.
/// Duplicates are kept; the later declaration wins in the stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsiveBuckets {
    pub desktop: Vec<(String, String)>,
    pub tablet: Vec<(String, String)>,
    pub mobile: Vec<(String, String)>,
}

impl ResponsiveBuckets {
    pub fn bucket(&self, breakpoint: Breakpoint) -> &[(String, String)] {
        match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }

    fn bucket_mut(&mut self, breakpoint: Breakpoint) -> &mut Vec<(String, String)> {
        match breakpoint {
            Breakpoint::Desktop => &mut self.desktop,
            Breakpoint::Tablet => &mut self.tablet,
            Breakpoint::Mobile => &mut self.mobile,
        }
    }

    /// Desktop values form the unscoped rule; without them there is no
    /// responsive output at all.
    pub fn is_renderable(&self) -> bool {
        !self.desktop.is_empty()
    }
}

/// Bucket the values of every dimensional collection by the breakpoint its
/// mode name carries. Within a mode, primitives of all dimensional
/// collections come first, then their overrides.
pub fn compose_responsive(index: &ResolvedIndex) -> ResponsiveBuckets {
    let mut buckets = ResponsiveBuckets::default();

    for (mode_name, collections) in index.modes() {
        let Some(breakpoint) = Breakpoint::from_mode_name(mode_name) else {
            continue;
        };

        let dimensional: Vec<_> = collections
            .iter()
            .filter(|(name, _)| is_dimensional_collection(name))
            .map(|(_, values)| values)
            .collect();

        let bucket = buckets.bucket_mut(breakpoint);
        let primitives = dimensional.iter().flat_map(|v| &v.primitives);
        let overrides = dimensional.iter().flat_map(|v| &v.overrides);
        for (name, value) in primitives.chain(overrides) {
            let key = normalize(name);
            if !key.is_empty() {
                bucket.push((key, value.clone()));
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::collect;
    use crate::graph::{HostDocument, fetch_snapshot};

    fn buckets_for(json: &str) -> ResponsiveBuckets {
        let doc = HostDocument::from_json(json).unwrap();
        compose_responsive(&collect(&fetch_snapshot(&doc).unwrap()).0)
    }

    fn names(decls: &[(String, String)]) -> Vec<&str> {
        decls.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn test_mobile_only_value_stays_in_mobile() {
        let buckets = buckets_for(
            r#"{
                "collections": [
                    {"id": "g", "name": "Grid", "modes": [
                        {"modeId": "d", "name": "Desktop"},
                        {"modeId": "t", "name": "Tablet"},
                        {"modeId": "m", "name": "Mobile"}
                    ], "variableIds": ["v1", "v2"]}
                ],
                "variables": [
                    {"id": "v1", "name": "columns", "valuesByMode": {"d": 12, "t": 8, "m": 4}},
                    {"id": "v2", "name": "gutter/mobile", "valuesByMode": {"m": 16}}
                ]
            }"#,
        );

        assert_eq!(names(&buckets.desktop), ["columns"]);
        assert_eq!(names(&buckets.tablet), ["columns"]);
        assert_eq!(names(&buckets.mobile), ["columns", "gutter-mobile"]);
        assert_eq!(buckets.mobile[1].1, "16px");
        assert!(buckets.is_renderable());
    }

    #[test]
    fn test_non_dimensional_collections_ignored() {
        let buckets = buckets_for(
            r##"{
                "collections": [
                    {"id": "c", "name": "Colors", "modes": [{"modeId": "d", "name": "Desktop"}],
                     "variableIds": ["v1"]}
                ],
                "variables": [{"id": "v1", "name": "bg", "valuesByMode": {"d": "#fff"}}]
            }"##,
        );
        assert_eq!(buckets, ResponsiveBuckets::default());
        assert!(!buckets.is_renderable());
    }

    #[test]
    fn test_primitives_before_overrides_across_collections() {
        let buckets = buckets_for(
            r#"{
                "collections": [
                    {"id": "a", "name": "Spacing", "modes": [{"modeId": "a1", "name": "Desktop"}],
                     "variableIds": ["s1", "s2"], "variableOverrides": {"s2": {"a1": 20}}},
                    {"id": "b", "name": "Layout", "modes": [{"modeId": "b1", "name": "Desktop"}],
                     "variableIds": ["l1"]}
                ],
                "variables": [
                    {"id": "s1", "name": "gap", "valuesByMode": {"a1": 8}},
                    {"id": "s2", "name": "inset", "valuesByMode": {"a1": 4}},
                    {"id": "l1", "name": "max-width", "valuesByMode": {"b1": 1200}}
                ]
            }"#,
        );

        assert_eq!(names(&buckets.desktop), ["gap", "max-width", "inset"]);
        assert_eq!(buckets.desktop[2].1, "20px");
    }
}
