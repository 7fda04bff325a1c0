use std::io::Write;

use crate::error::{RecgenError, Result};
use crate::generate::value::Record;
use crate::output::write_str;

/// Write records as a pretty-printed JSON array.
///
/// Records are serialized one at a time rather than as a single tree, so a
/// 100k-record batch never needs a second in-memory copy.
pub fn write_json<W: Write>(writer: &mut W, records: &[Record]) -> Result<()> {
    if records.is_empty() {
        return write_str(writer, "[]\n", "JSON");
    }

    write_str(writer, "[\n", "JSON")?;
    for (idx, record) in records.iter().enumerate() {
        let body = serde_json::to_string_pretty(record)
            .map_err(|e| RecgenError::Other(format!("JSON serialization error: {}", e)))?;
        let indented = body
            .lines()
            .map(|line| format!("  {}", line))
            .collect::<Vec<_>>()
            .join("\n");
        write_str(writer, &indented, "JSON")?;
        if idx < records.len() - 1 {
            write_str(writer, ",", "JSON")?;
        }
        write_str(writer, "\n", "JSON")?;
    }
    write_str(writer, "]\n", "JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::value::Value;

    fn render(records: &[Record]) -> String {
        let mut output = Vec::new();
        write_json(&mut output, records).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_write_json_parses_back() {
        let mut address = Record::new();
        address.insert("city".to_string(), Value::borrowed("Lyon"));
        let mut record = Record::new();
        record.insert("name".to_string(), Value::owned("Alice".to_string()));
        record.insert("address".to_string(), Value::Object(address));
        record.insert("tags".to_string(), Value::Array(vec![Value::Int(1)]));

        let parsed: serde_json::Value = serde_json::from_str(&render(&[record])).unwrap();
        assert_eq!(parsed[0]["name"], "Alice");
        assert_eq!(parsed[0]["address"]["city"], "Lyon");
        assert_eq!(parsed[0]["tags"][0], 1);
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(render(&[]), "[]\n");
    }

    #[test]
    fn test_many_records_valid() {
        let records: Vec<Record> = (0..500)
            .map(|i| {
                let mut r = Record::new();
                r.insert("id".to_string(), Value::Int(i));
                r
            })
            .collect();
        let parsed: serde_json::Value = serde_json::from_str(&render(&records)).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 500);
    }

    #[test]
    fn test_key_order_preserved() {
        let mut record = Record::new();
        record.insert("gamma".to_string(), Value::Int(3));
        record.insert("alpha".to_string(), Value::Int(1));
        record.insert("beta".to_string(), Value::Int(2));
        let json = render(&[record]);
        let gamma = json.find("\"gamma\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        let beta = json.find("\"beta\"").unwrap();
        assert!(gamma < alpha && alpha < beta);
    }
}
