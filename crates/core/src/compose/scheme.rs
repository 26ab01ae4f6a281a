//! Light/dark scheme composition.

use indexmap::IndexMap;
use tracing::debug;

use crate::classify::{Scheme, is_base_mode, is_dimensional_collection};
use crate::collect::ResolvedIndex;
use crate::names::normalize;

/// Normalized variable name -> value, in first-seen order.
pub type SchemeMapping = IndexMap<String, String>;

fn merge<'a>(into: &mut SchemeMapping, entries: impl IntoIterator<Item = (&'a String, &'a String)>) {
    for (name, value) in entries {
        let key = normalize(name);
        if key.is_empty() {
            debug!("Variable name '{}' has no usable characters, skipping", name);
            continue;
        }
        into.insert(key, value.clone());
    }
}

/// Merge every value visible in `scheme`.
///
/// Base-mode primitives are laid down first; then primitives and overrides
/// of every mode tagged with `scheme` overwrite them. Dimensional
/// collections never take part.
pub fn compose_scheme(index: &ResolvedIndex, scheme: Scheme) -> SchemeMapping {
    let mut vars = SchemeMapping::new();

    for (mode_name, collections) in index.modes() {
        if !is_base_mode(mode_name) {
            continue;
        }
        for (collection_name, values) in collections {
            if is_dimensional_collection(collection_name) {
                continue;
            }
            merge(&mut vars, &values.primitives);
        }
    }

    for (mode_name, collections) in index.modes() {
        if Scheme::from_mode_name(mode_name) != Some(scheme) {
            continue;
        }
        for (collection_name, values) in collections {
            if is_dimensional_collection(collection_name) {
                continue;
            }
            merge(&mut vars, &values.primitives);
            merge(&mut vars, &values.overrides);
        }
    }

    vars
}
