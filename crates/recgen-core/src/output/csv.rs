use std::io::Write;

use indexmap::{IndexMap, IndexSet};

use crate::error::Result;
use crate::generate::value::{Record, Value};
use crate::output::write_str;

/// Write records as CSV.
///
/// Nested objects flatten into dotted columns (`address.city`); arrays are
/// written as compact JSON in a single cell. The header is the union of all
/// columns in first-seen order, and cells for absent fields stay empty.
pub fn write_csv<W: Write>(writer: &mut W, records: &[Record]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let rows: Vec<IndexMap<String, String>> = records.iter().map(flatten_record).collect();
    let mut columns: IndexSet<&str> = IndexSet::new();
    for row in &rows {
        columns.extend(row.keys().map(String::as_str));
    }

    let header = columns
        .iter()
        .map(|c| csv_escape(c))
        .collect::<Vec<_>>()
        .join(",");
    write_str(writer, &header, "CSV header")?;
    write_str(writer, "\n", "CSV header")?;

    for row in &rows {
        let line = columns
            .iter()
            .map(|col| row.get(*col).map(|v| csv_escape(v)).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",");
        write_str(writer, &line, "CSV row")?;
        write_str(writer, "\n", "CSV row")?;
    }

    Ok(())
}

fn flatten_record(record: &Record) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    flatten_into(&mut out, None, record);
    out
}

fn flatten_into(out: &mut IndexMap<String, String>, prefix: Option<&str>, record: &Record) {
    for (key, value) in record {
        let column = match prefix {
            Some(p) => format!("{}.{}", p, key),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => {
                flatten_into(out, Some(&column), inner);
            }
            other => {
                out.insert(column, other.to_text());
            }
        }
    }
}

/// Escape a string for CSV: quote if it contains comma, quote, or newline.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[Record]) -> String {
        let mut output = Vec::new();
        write_csv(&mut output, records).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("hello"), "hello");
        assert_eq!(csv_escape("hello,world"), "\"hello,world\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_flattens_objects_and_serializes_arrays() {
        let mut address = Record::new();
        address.insert("city".to_string(), Value::borrowed("Paris"));
        address.insert("zip".to_string(), Value::Null);

        let mut record = Record::new();
        record.insert("name".to_string(), Value::borrowed("Ann"));
        record.insert("address".to_string(), Value::Object(address));
        record.insert(
            "tags".to_string(),
            Value::Array(vec![Value::borrowed("a"), Value::borrowed("b")]),
        );

        assert_eq!(
            render(&[record]),
            "name,address.city,address.zip,tags\nAnn,Paris,,\"[\"\"a\"\",\"\"b\"\"]\"\n"
        );
    }

    #[test]
    fn test_header_is_union_of_columns() {
        let mut first = Record::new();
        first.insert("a".to_string(), Value::Int(1));
        let mut second = Record::new();
        second.insert("b".to_string(), Value::Int(2));
        second.insert("a".to_string(), Value::Int(3));

        assert_eq!(render(&[first, second]), "a,b\n1,\n3,2\n");
    }

    #[test]
    fn test_empty_object_keeps_its_column() {
        let mut record = Record::new();
        record.insert("meta".to_string(), Value::Object(Record::new()));
        assert_eq!(render(&[record]), "meta\n{}\n");
    }

    #[test]
    fn test_no_records_writes_nothing() {
        assert_eq!(render(&[]), "");
    }
}
