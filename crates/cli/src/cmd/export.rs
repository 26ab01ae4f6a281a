use std::fs;
use std::path::Path;

use tracing::debug;
use varsheet_core::{ExportRequest, Exporter};

use super::{fail, load_snapshot, setup};
use crate::ExportArgs;

const COMMAND: &str = "export";

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ExportArgs) {
    let rc = setup(COMMAND, config, profile);

    let request = ExportRequest::new(&args.theme);
    if let Err(e) = request.validate() {
        fail(COMMAND, e);
    }
    let snapshot = load_snapshot(COMMAND, &args.input);

    let output = match Exporter::new(&snapshot, &rc.export).run(&request) {
        Ok(output) => output,
        Err(e) => fail(COMMAND, e),
    };

    if args.json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(COMMAND, e),
        }
        return;
    }

    let out_dir = args.output.as_deref().unwrap_or(rc.output_dir.as_path());
    if let Err(e) = fs::create_dir_all(out_dir) {
        fail(COMMAND, format!("failed to create {}: {e}", out_dir.display()));
    }

    println!("OK   varsheet export");
    println!("theme: {}", output.theme_name);
    for file in &output.files {
        let path = out_dir.join(&file.name);
        if let Err(e) = fs::write(&path, &file.content) {
            fail(COMMAND, format!("failed to write {}: {e}", path.display()));
        }
        debug!("Wrote {}", path.display());
        println!("wrote: {}", path.display());
    }

    crate::logging::shutdown();
}
