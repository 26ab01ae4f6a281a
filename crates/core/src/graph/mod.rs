//! Variable graph: host data model, store access and the materialized
//! snapshot the engine runs on.

pub mod snapshot;
pub mod store;
pub mod types;

pub use snapshot::{CollectionEntry, CollectionSnapshot, GraphSnapshot, VariableRecord, fetch_snapshot};
pub use store::{HostDocument, StoreError, VariableStore};
pub use types::{
    AliasKind, Collection, CollectionId, Mode, ModeId, RawValue, Rgba, ValuesByMode, Variable,
    VariableAlias, VariableId,
};
