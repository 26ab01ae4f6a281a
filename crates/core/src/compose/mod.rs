//! Composition of the resolved index into flat per-output mappings.
//!
//! Non-dimensional collections feed the color scheme files, dimensional
//! ones feed the responsive file.

pub mod responsive;
pub mod scheme;

pub use responsive::{ResponsiveBuckets, compose_responsive};
pub use scheme::{SchemeMapping, compose_scheme};
