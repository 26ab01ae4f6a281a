pub mod doctor;
pub mod export;
pub mod inspect;

use std::fmt::Display;
use std::path::Path;

use varsheet_core::config::loader::ConfigLoader;
use varsheet_core::config::types::ResolvedConfig;
use varsheet_core::{GraphSnapshot, HostDocument, fetch_snapshot};

/// Print the failure banner and the error, then exit with status 1.
pub fn fail(command: &str, err: impl Display) -> ! {
    println!("FAIL varsheet {command}");
    eprintln!("{err}");
    crate::logging::shutdown();
    std::process::exit(1);
}

/// Resolve configuration and install logging. Built-in defaults apply when
/// no config file exists at the default location.
pub fn setup(command: &str, config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    let rc = match ConfigLoader::load_or_default(config, profile) {
        Ok(rc) => rc,
        Err(e) => fail(command, e),
    };
    crate::logging::init(&rc);
    rc
}

pub fn load_snapshot(command: &str, input: &Path) -> GraphSnapshot {
    let doc = match HostDocument::load(input) {
        Ok(doc) => doc,
        Err(e) => fail(command, e),
    };
    match fetch_snapshot(&doc) {
        Ok(snapshot) => snapshot,
        Err(e) => fail(command, e),
    }
}
