//! Resolved index: every formatted value, grouped by mode and collection.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::format::FormatContext;
use crate::graph::GraphSnapshot;
use crate::resolve::Resolver;

/// Formatted values of one collection in one mode, keyed by variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModeValues {
    /// Values taken from a variable's own per-mode slot.
    pub primitives: IndexMap<String, String>,
    /// Values set through the collection's override table.
    pub overrides: IndexMap<String, String>,
}

impl ModeValues {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.overrides.is_empty()
    }
}

/// Counters gathered while building the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectStats {
    /// (variable, mode) pairs visited.
    pub entries_seen: usize,
    /// Pairs that produced a value.
    pub entries_resolved: usize,
    /// Pairs with no value or an unresolvable one.
    pub entries_skipped: usize,
}

/// `mode name -> collection name -> values`, in walk order.
///
/// Modes sharing a name across collections share one slot; same-named
/// variables within a slot overwrite each other, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedIndex {
    modes: IndexMap<String, IndexMap<String, ModeValues>>,
}

impl ResolvedIndex {
    pub fn modes(&self) -> impl Iterator<Item = (&str, &IndexMap<String, ModeValues>)> {
        self.modes.iter().map(|(name, colls)| (name.as_str(), colls))
    }

    pub fn get(&self, mode_name: &str, collection_name: &str) -> Option<&ModeValues> {
        self.modes.get(mode_name)?.get(collection_name)
    }

    pub fn is_empty(&self) -> bool {
        self.modes.values().all(|colls| colls.values().all(ModeValues::is_empty))
    }

    fn slot(&mut self, mode_name: &str, collection_name: &str) -> &mut ModeValues {
        self.modes
            .entry(mode_name.to_string())
            .or_default()
            .entry(collection_name.to_string())
            .or_default()
    }
}

/// Walk every collection, mode and variable of `snapshot` and format each
/// value, keeping aliases as `var(--name)` references.
pub fn collect(snapshot: &GraphSnapshot) -> (ResolvedIndex, CollectStats) {
    let resolver = Resolver::preserving_aliases(snapshot);
    let mut index = ResolvedIndex::default();
    let mut stats = CollectStats::default();

    for collection in snapshot.collections() {
        for mode in &collection.modes {
            // Create the slot even when nothing lands in it.
            index.slot(&mode.name, &collection.name);

            for entry in &collection.entries {
                stats.entries_seen += 1;

                let Some(raw) = entry.values.get(&mode.mode_id) else {
                    stats.entries_skipped += 1;
                    continue;
                };

                let ctx = FormatContext::new(&collection.name, &entry.name);
                let Some(text) = resolver.resolve(Some(raw), &mode.mode_id, ctx) else {
                    debug!(
                        "No value for '{}' in {}/{}, skipping",
                        entry.name, collection.name, mode.name
                    );
                    stats.entries_skipped += 1;
                    continue;
                };

                let slot = index.slot(&mode.name, &collection.name);
                let target = if entry.is_override(&mode.mode_id) {
                    &mut slot.overrides
                } else {
                    &mut slot.primitives
                };
                target.insert(entry.name.clone(), text);
                stats.entries_resolved += 1;
            }
        }
    }

    (index, stats)
}
