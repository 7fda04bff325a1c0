use std::path::Path;

use anyhow::Result;
use comfy_table::Table as ComfyTable;

use recgen_core::config::read_config;
use recgen_core::generate::{synthesize, BatchOptions, Record};

use super::{load_schema, resolve_schema_path};
use crate::args::PreviewArgs;

/// Cells longer than this are cut and suffixed with "...".
const MAX_CELL_CHARS: usize = 40;

pub fn run(args: &PreviewArgs) -> Result<()> {
    let config = read_config(Path::new("."))?;
    let schema_path = resolve_schema_path(args.schema.as_deref(), config.as_ref())?;
    let schema = load_schema(&schema_path)?;

    let options = BatchOptions {
        count: args.rows,
        preview: true,
        id_prefix: config.as_ref().and_then(|c| c.generate.id_prefix.clone()),
        seed: args
            .seed
            .or_else(|| config.as_ref().and_then(|c| c.generate.seed)),
        ..Default::default()
    };
    let records = synthesize(&schema, &options, None)?;

    println!(
        "━━━ {} ({} records) ━━━",
        schema_path.display(),
        records.len()
    );
    println!("{}\n", render_table(&records));

    Ok(())
}

/// Top-level fields as columns, in the order they first appear.
fn render_table(records: &[Record]) -> ComfyTable {
    let mut columns: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut t = ComfyTable::new();
    t.set_header(columns.clone());

    for record in records {
        let values: Vec<String> = columns
            .iter()
            .map(|col| match record.get(*col) {
                Some(v) => truncate(&v.to_string()),
                None => String::new(),
            })
            .collect();
        t.add_row(values);
    }
    t
}

fn truncate(s: &str) -> String {
    if s.chars().count() > MAX_CELL_CHARS {
        let head: String = s.chars().take(MAX_CELL_CHARS - 3).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}
