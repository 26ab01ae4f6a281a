use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::export::ExportOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Directory generated stylesheets are written to.
    pub output_dir: String,
    /// Prefix of the theme class (defaults to `tedi-theme`).
    pub class_prefix: Option<String>,
    #[serde(default)]
    pub breakpoints: BreakpointQueries,
}

/// Media conditions wrapping the tablet and mobile blocks.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct BreakpointQueries {
    pub tablet: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub output_dir: PathBuf,
    pub export: ExportOptions,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    /// Settings used when no config file exists: write next to the caller,
    /// stock class names and breakpoints.
    fn default() -> Self {
        Self {
            active_profile: "default".to_string(),
            output_dir: PathBuf::from("."),
            export: ExportOptions::default(),
            logging: LoggingConfig::default(),
        }
    }
}
