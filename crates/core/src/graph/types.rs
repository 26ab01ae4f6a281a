//! Host-shaped variable data.
//!
//! These types mirror what the design tool's variable API hands out, with
//! the same camelCase keys, so a JSON/YAML dump of the host store
//! deserializes directly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type VariableId = String;
pub type ModeId = String;
pub type CollectionId = String;

/// Per-mode raw values of one variable. `null` entries stay `None`.
pub type ValuesByMode = IndexMap<ModeId, Option<RawValue>>;

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasKind {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// A value pointing at another variable. The target is read in whatever
/// mode the reference is being resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: AliasKind,
    pub id: VariableId,
}

impl VariableAlias {
    pub fn to(id: impl Into<VariableId>) -> Self {
        Self { kind: AliasKind::VariableAlias, id: id.into() }
    }
}

/// A single raw variable value as stored by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Alias(VariableAlias),
    Color(Rgba),
    Boolean(bool),
    Number(f64),
    String(String),
    /// Any shape the engine does not understand; formats to no value.
    Unsupported(serde_json::Value),
}

impl RawValue {
    pub fn as_alias(&self) -> Option<&VariableAlias> {
        match self {
            RawValue::Alias(alias) => Some(alias),
            _ => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Boolean(b)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<Rgba> for RawValue {
    fn from(c: Rgba) -> Self {
        RawValue::Color(c)
    }
}

impl From<VariableAlias> for RawValue {
    fn from(alias: VariableAlias) -> Self {
        RawValue::Alias(alias)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: ModeId,
    pub name: String,
    /// For extended collections: the mode of the parent collection whose
    /// values this mode inherits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_mode_id: Option<ModeId>,
}

/// A named group of variables sharing a list of modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub variable_ids: Vec<VariableId>,
    /// Present only on collections supporting per-mode overrides, keyed by
    /// variable id then mode id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_overrides: Option<IndexMap<VariableId, ValuesByMode>>,
}

impl Collection {
    pub fn supports_overrides(&self) -> bool {
        self.variable_overrides.is_some()
    }

    /// The explicit override for `(variable, mode)`, if one is set.
    pub fn override_for(&self, variable_id: &str, mode_id: &str) -> Option<&RawValue> {
        self.variable_overrides
            .as_ref()?
            .get(variable_id)?
            .get(mode_id)?
            .as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: VariableId,
    pub name: String,
    #[serde(default)]
    pub variable_collection_id: Option<CollectionId>,
    #[serde(default)]
    pub values_by_mode: ValuesByMode,
}

impl Variable {
    /// The variable's own value for a mode, ignoring collection overrides.
    pub fn value_for_mode(&self, mode_id: &str) -> Option<&RawValue> {
        self.values_by_mode.get(mode_id)?.as_ref()
    }

    /// Values as seen through `collection`: explicit overrides first, then
    /// the variable's own value for the mode (or its parent mode).
    pub fn values_for_collection(&self, collection: &Collection) -> IndexMap<ModeId, RawValue> {
        collection
            .modes
            .iter()
            .filter_map(|mode| {
                let value = collection.override_for(&self.id, &mode.mode_id).or_else(|| {
                    mode.parent_mode_id
                        .as_deref()
                        .and_then(|parent| self.value_for_mode(parent))
                        .or_else(|| self.value_for_mode(&mode.mode_id))
                })?;
                Some((mode.mode_id.clone(), value.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_raw_values() {
        let json = r#"[
            {"type": "VARIABLE_ALIAS", "id": "VariableID:1:2"},
            {"r": 1, "g": 0.5, "b": 0},
            {"r": 0, "g": 0, "b": 0, "a": 0.25},
            true,
            12.5,
            "Inter",
            {"unexpected": "shape"}
        ]"#;
        let values: Vec<RawValue> = serde_json::from_str(json).unwrap();

        assert_eq!(values[0], RawValue::Alias(VariableAlias::to("VariableID:1:2")));
        assert_eq!(values[1], RawValue::Color(Rgba { r: 1.0, g: 0.5, b: 0.0, a: 1.0 }));
        assert_eq!(values[2], RawValue::Color(Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.25 }));
        assert_eq!(values[3], RawValue::Boolean(true));
        assert_eq!(values[4], RawValue::Number(12.5));
        assert_eq!(values[5], RawValue::String("Inter".into()));
        assert!(matches!(values[6], RawValue::Unsupported(_)));
    }

    #[test]
    fn test_null_value_is_absent() {
        let json = r#"{"id": "v1", "name": "x", "valuesByMode": {"m1": null, "m2": 4}}"#;
        let var: Variable = serde_json::from_str(json).unwrap();
        assert!(var.value_for_mode("m1").is_none());
        assert_eq!(var.value_for_mode("m2"), Some(&RawValue::Number(4.0)));
        assert!(var.value_for_mode("m3").is_none());
    }

    #[test]
    fn test_values_for_collection_prefers_overrides() {
        let coll: Collection = serde_json::from_str(
            r#"{
                "id": "c2",
                "name": "Brand B",
                "modes": [
                    {"modeId": "x1", "name": "Light", "parentModeId": "m1"},
                    {"modeId": "x2", "name": "Dark", "parentModeId": "m2"}
                ],
                "variableIds": ["v1"],
                "variableOverrides": {"v1": {"x2": "override"}}
            }"#,
        )
        .unwrap();
        let var: Variable = serde_json::from_str(
            r#"{"id": "v1", "name": "label", "valuesByMode": {"m1": "one", "m2": "two"}}"#,
        )
        .unwrap();

        let values = var.values_for_collection(&coll);
        assert_eq!(values.get("x1"), Some(&RawValue::from("one")));
        assert_eq!(values.get("x2"), Some(&RawValue::from("override")));
        assert!(coll.supports_overrides());
        assert!(coll.override_for("v1", "x1").is_none());
    }
}
