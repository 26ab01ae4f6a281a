use std::path::Path;

use tabled::settings::Style;
use tabled::{Table, Tabled};
use varsheet_core::collect::{ResolvedIndex, collect};

use super::{fail, load_snapshot, setup};
use crate::InspectArgs;

const COMMAND: &str = "inspect";

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Collection")]
    collection: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn rows(index: &ResolvedIndex) -> Vec<ValueRow> {
    let mut rows = Vec::new();
    for (mode, collections) in index.modes() {
        for (collection, values) in collections {
            for (kind, map) in [("primitive", &values.primitives), ("override", &values.overrides)] {
                rows.extend(map.iter().map(|(name, value)| ValueRow {
                    mode: mode.to_string(),
                    collection: collection.clone(),
                    kind,
                    name: name.clone(),
                    value: value.clone(),
                }));
            }
        }
    }
    rows
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &InspectArgs) {
    setup(COMMAND, config, profile);
    let snapshot = load_snapshot(COMMAND, &args.input);
    let (index, stats) = collect(&snapshot);

    if args.json {
        match serde_json::to_string_pretty(&index) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(COMMAND, e),
        }
        crate::logging::shutdown();
        return;
    }

    let rows = rows(&index);
    if rows.is_empty() {
        println!("(no values resolved)");
    } else {
        println!("{}", Table::new(&rows).with(Style::rounded()));
    }
    println!();
    println!(
        "{} resolved, {} skipped, {} variables",
        stats.entries_resolved,
        stats.entries_skipped,
        snapshot.variable_count()
    );

    crate::logging::shutdown();
}
