use std::io::Write;

use crate::error::Result;
use crate::generate::value::{Record, Value};
use crate::output::write_str;

/// Element used for each entry of an array field.
const ARRAY_ITEM: &str = "item";

/// Write records as an XML document: `<root>` holding one `<item>` per record.
pub fn write_xml<W: Write>(
    writer: &mut W,
    records: &[Record],
    root: &str,
    item: &str,
) -> Result<()> {
    let root = element_name(root);
    let item = element_name(item);

    write_str(writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n", "XML")?;
    write_str(writer, &format!("<{}>\n", root), "XML")?;
    for record in records {
        let mut buf = String::new();
        write_record(&mut buf, &item, record, 1);
        write_str(writer, &buf, "XML")?;
    }
    write_str(writer, &format!("</{}>\n", root), "XML")
}

fn write_record(buf: &mut String, tag: &str, record: &Record, depth: usize) {
    let pad = "  ".repeat(depth);
    if record.is_empty() {
        buf.push_str(&format!("{}<{}/>\n", pad, tag));
        return;
    }
    buf.push_str(&format!("{}<{}>\n", pad, tag));
    for (key, value) in record {
        write_value(buf, &element_name(key), value, depth + 1);
    }
    buf.push_str(&format!("{}</{}>\n", pad, tag));
}

fn write_value(buf: &mut String, tag: &str, value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Null => buf.push_str(&format!("{}<{}/>\n", pad, tag)),
        Value::Object(record) => write_record(buf, tag, record, depth),
        Value::Array(items) if items.is_empty() => {
            buf.push_str(&format!("{}<{}/>\n", pad, tag));
        }
        Value::Array(items) => {
            buf.push_str(&format!("{}<{}>\n", pad, tag));
            for entry in items {
                write_value(buf, ARRAY_ITEM, entry, depth + 1);
            }
            buf.push_str(&format!("{}</{}>\n", pad, tag));
        }
        scalar => buf.push_str(&format!(
            "{}<{}>{}</{}>\n",
            pad,
            tag,
            escape_text(&scalar.to_text()),
            tag
        )),
    }
}

/// Coerce a field name into a valid XML element name.
///
/// Characters outside `[A-Za-z0-9_.-]` become `_`, and a name that does not
/// start with a letter or underscore gets a leading `_`.
pub fn element_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if !out
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    {
        out.insert(0, '_');
    }
    out
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
