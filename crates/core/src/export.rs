//! Export orchestration: theme name + snapshot in, stylesheet files out.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::assemble::{OutputFile, color_scheme_file, manifest, responsive_file};
use crate::classify::Scheme;
use crate::collect::collect;
use crate::compose::{compose_responsive, compose_scheme};
use crate::graph::GraphSnapshot;
use crate::names::normalize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("please enter a theme name")]
    EmptyThemeName,
}

/// Rendering knobs. Defaults produce the stock `tedi-theme` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Theme classes are `.<class_prefix>--<theme>`.
    pub class_prefix: String,
    /// Media condition for the tablet block.
    pub tablet_query: String,
    /// Media condition for the mobile block.
    pub mobile_query: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            class_prefix: "tedi-theme".to_string(),
            tablet_query: "(max-width: 62rem)".to_string(),
            mobile_query: "(max-width: 48rem)".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub theme_name: String,
}

impl ExportRequest {
    pub fn new(theme_name: impl Into<String>) -> Self {
        Self { theme_name: theme_name.into() }
    }

    /// The trimmed theme name, or an error when nothing is left.
    pub fn validate(&self) -> Result<&str, ExportError> {
        let theme_name = self.theme_name.trim();
        if theme_name.is_empty() {
            return Err(ExportError::EmptyThemeName);
        }
        Ok(theme_name)
    }
}

/// Statistics from an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    /// Variables held by the snapshot, alias targets included.
    pub variables: usize,
    /// (variable, mode) pairs that produced a value.
    pub entries_resolved: usize,
    /// Pairs with no value or an unresolvable one.
    pub entries_skipped: usize,
    /// Generated files, manifest included.
    pub files: usize,
}

/// The message handed to the download layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutput {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub theme_name: String,
    pub files: Vec<OutputFile>,
    #[serde(skip)]
    pub stats: ExportStats,
}

/// Runs the whole pipeline over one snapshot.
pub struct Exporter<'a> {
    snapshot: &'a GraphSnapshot,
    options: &'a ExportOptions,
}

impl<'a> Exporter<'a> {
    pub fn new(snapshot: &'a GraphSnapshot, options: &'a ExportOptions) -> Self {
        Self { snapshot, options }
    }

    /// Build every file for `request`.
    ///
    /// Files come out as: light scheme, dark scheme, responsive dimensions,
    /// then `index.css`. Empty outputs are left out.
    pub fn run(&self, request: &ExportRequest) -> Result<ExportOutput, ExportError> {
        let theme_name = request.validate()?;
        let slug = normalize(theme_name);

        let (index, collected) = collect(self.snapshot);
        let mut files = Vec::new();

        for scheme in Scheme::ALL {
            let mapping = compose_scheme(&index, scheme);
            debug!("Scheme {} has {} variables", scheme.as_str(), mapping.len());
            files.extend(color_scheme_file(&slug, scheme, &mapping, self.options));
        }

        let buckets = compose_responsive(&index);
        files.extend(responsive_file(&slug, &buckets, self.options));

        let index_file = manifest(&files);
        files.push(index_file);

        let stats = ExportStats {
            variables: self.snapshot.variable_count(),
            entries_resolved: collected.entries_resolved,
            entries_skipped: collected.entries_skipped,
            files: files.len(),
        };
        info!(
            "Exported theme '{}': {} files, {} values, {} skipped",
            theme_name, stats.files, stats.entries_resolved, stats.entries_skipped
        );

        Ok(ExportOutput {
            kind: "zip-download",
            theme_name: theme_name.to_string(),
            files,
            stats,
        })
    }
}
