#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Core library for varsheet.
//!
//! Turns a snapshot of a design tool's variable graph (collections, modes,
//! moded values and aliases) into deterministic CSS custom-property files:
//! one per color scheme, one responsive file for dimensional values, and an
//! `index.css` manifest importing them.

pub mod assemble;
pub mod classify;
pub mod collect;
pub mod compose;
pub mod config;
pub mod export;
pub mod format;
pub mod graph;
pub mod names;
pub mod resolve;

pub use export::{ExportError, ExportOptions, ExportOutput, ExportRequest, ExportStats, Exporter};
pub use graph::{GraphSnapshot, HostDocument, VariableStore, fetch_snapshot};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
