//! In-memory snapshot of the variable graph.
//!
//! [`fetch_snapshot`] is the only code that talks to a [`VariableStore`].
//! It issues lookups one at a time, in host order, and materializes
//! everything the pure engine needs: override-aware values per collection
//! and every variable reachable through an alias.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::store::{StoreError, VariableStore};
use super::types::{Collection, Mode, ModeId, RawValue, Variable, VariableId};
use crate::resolve::VariableLookup;

/// A variable as seen by alias resolution: its own per-mode values and the
/// name of the collection declaring it.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRecord {
    pub id: VariableId,
    pub name: String,
    pub collection_name: String,
    pub values_by_mode: IndexMap<ModeId, RawValue>,
}

impl VariableRecord {
    pub fn value_for_mode(&self, mode_id: &str) -> Option<&RawValue> {
        self.values_by_mode.get(mode_id)
    }
}

/// One variable inside one collection, with the values that collection sees.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEntry {
    pub variable_id: VariableId,
    pub name: String,
    pub values: IndexMap<ModeId, RawValue>,
    /// Modes whose value comes from the collection's override table.
    pub overridden: HashSet<ModeId>,
}

impl CollectionEntry {
    pub fn is_override(&self, mode_id: &str) -> bool {
        self.overridden.contains(mode_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot {
    pub name: String,
    pub modes: Vec<Mode>,
    pub entries: Vec<CollectionEntry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSnapshot {
    collections: Vec<CollectionSnapshot>,
    variables: HashMap<VariableId, VariableRecord>,
}

impl GraphSnapshot {
    pub fn collections(&self) -> &[CollectionSnapshot] {
        &self.collections
    }

    pub fn variable(&self, id: &str) -> Option<&VariableRecord> {
        self.variables.get(id)
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

impl VariableLookup for GraphSnapshot {
    fn lookup(&self, id: &str) -> Option<&VariableRecord> {
        self.variable(id)
    }
}

fn present_values(variable: &Variable) -> IndexMap<ModeId, RawValue> {
    variable
        .values_by_mode
        .iter()
        .filter_map(|(mode, value)| Some((mode.clone(), value.clone()?)))
        .collect()
}

fn alias_targets<'a>(
    values: impl IntoIterator<Item = &'a RawValue>,
) -> impl Iterator<Item = VariableId> {
    values.into_iter().filter_map(|v| v.as_alias().map(|a| a.id.clone()))
}

fn record_for(variable: &Variable, collection_name: &str) -> VariableRecord {
    VariableRecord {
        id: variable.id.clone(),
        name: variable.name.clone(),
        collection_name: collection_name.to_string(),
        values_by_mode: present_values(variable),
    }
}

/// Walk the store once and build a [`GraphSnapshot`].
pub fn fetch_snapshot<S: VariableStore + ?Sized>(store: &S) -> Result<GraphSnapshot, StoreError> {
    let collections = store.local_collections()?;

    let collection_names: HashMap<&str, &str> =
        collections.iter().map(|c| (c.id.as_str(), c.name.trim())).collect();
    let declaring_collection = |variable: &Variable, fallback: &str| -> String {
        variable
            .variable_collection_id
            .as_deref()
            .and_then(|id| collection_names.get(id))
            .map_or_else(|| fallback.to_string(), |name| (*name).to_string())
    };

    let mut variables: HashMap<VariableId, VariableRecord> = HashMap::new();
    let mut pending: Vec<VariableId> = Vec::new();
    let mut snapshots = Vec::with_capacity(collections.len());

    for collection in &collections {
        let name = collection.name.trim().to_string();
        let mut entries = Vec::with_capacity(collection.variable_ids.len());

        for variable_id in &collection.variable_ids {
            let Some(variable) = store.variable_by_id(variable_id)? else {
                debug!("Variable {} listed in '{}' not found, skipping", variable_id, name);
                continue;
            };

            let entry = collection_entry(collection, &variable);
            pending.extend(alias_targets(entry.values.values()));

            if !variables.contains_key(&variable.id) {
                let record = record_for(&variable, &declaring_collection(&variable, &name));
                pending.extend(alias_targets(record.values_by_mode.values()));
                variables.insert(variable.id.clone(), record);
            }

            entries.push(entry);
        }

        let modes = collection
            .modes
            .iter()
            .map(|m| Mode { name: m.name.trim().to_string(), ..m.clone() })
            .collect();

        snapshots.push(CollectionSnapshot { name, modes, entries });
    }

    // Pull in alias targets that no walked collection listed.
    let mut missing: HashSet<VariableId> = HashSet::new();
    while let Some(id) = pending.pop() {
        if variables.contains_key(&id) || missing.contains(&id) {
            continue;
        }
        match store.variable_by_id(&id)? {
            Some(variable) => {
                let record = record_for(&variable, &declaring_collection(&variable, ""));
                pending.extend(alias_targets(record.values_by_mode.values()));
                variables.insert(id, record);
            }
            None => {
                warn!("Referenced variable {} not found in store", id);
                missing.insert(id);
            }
        }
    }

    debug!(
        "Snapshot holds {} collections and {} variables",
        snapshots.len(),
        variables.len()
    );

    Ok(GraphSnapshot { collections: snapshots, variables })
}

fn collection_entry(collection: &Collection, variable: &Variable) -> CollectionEntry {
    let values = if collection.supports_overrides() {
        variable.values_for_collection(collection)
    } else {
        present_values(variable)
    };

    let overridden = collection
        .modes
        .iter()
        .filter(|m| collection.override_for(&variable.id, &m.mode_id).is_some())
        .map(|m| m.mode_id.clone())
        .collect();

    CollectionEntry {
        variable_id: variable.id.clone(),
        name: variable.name.clone(),
        values,
        overridden,
    }
}
