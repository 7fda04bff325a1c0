use anyhow::Result;
use comfy_table::Table as ComfyTable;

use recgen_core::output::ExportFormat;
use recgen_core::schema::types::{DateFormat, FieldKind};

pub fn run() -> Result<()> {
    println!("━━━ Field kinds ━━━");
    println!("{}\n", field_kinds_table());

    println!("━━━ Date formats ━━━");
    println!("{}\n", date_formats_table());

    println!("━━━ Export formats ━━━");
    println!("{}\n", export_formats_table());

    Ok(())
}

fn field_kinds_table() -> ComfyTable {
    let mut t = ComfyTable::new();
    t.set_header(vec!["Kind", "Label", "Description"]);
    for kind in FieldKind::ALL {
        t.add_row(vec![kind.tag(), kind.label(), kind.description()]);
    }
    t
}

fn date_formats_table() -> ComfyTable {
    let mut t = ComfyTable::new();
    t.set_header(vec!["Format", "Label", "Example"]);
    for format in DateFormat::ALL {
        t.add_row(vec![format.tag(), format.label(), format.example()]);
    }
    t
}

fn export_formats_table() -> ComfyTable {
    let mut t = ComfyTable::new();
    t.set_header(vec!["Format", "Description", "Extension"]);
    for format in ExportFormat::ALL {
        t.add_row(vec![
            format.tag().to_string(),
            format.label().to_string(),
            format!(".{}", format.extension()),
        ]);
    }
    t
}
