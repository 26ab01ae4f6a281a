use std::path::Path;

use varsheet_core::config::loader::default_config_path;

use super::setup;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = setup("doctor", config, profile);

    let path = config.map_or_else(default_config_path, Path::to_path_buf);
    let source = if path.exists() { "" } else { " (not found, using defaults)" };

    println!("OK   varsheet doctor");
    println!("path: {}{}", path.display(), source);
    println!("profile: {}", rc.active_profile);
    println!("output_dir: {}", rc.output_dir.display());
    println!("class_prefix: {}", rc.export.class_prefix);
    println!("tablet_query: {}", rc.export.tablet_query);
    println!("mobile_query: {}", rc.export.mobile_query);
    println!("logging.level: {}", rc.logging.level);
    if let Some(file) = &rc.logging.file {
        println!("logging.file: {}", file.display());
    }

    crate::logging::shutdown();
}
