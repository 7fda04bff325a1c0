use std::io::Write;

use crate::error::Result;
use crate::generate::value::{Record, Value};
use crate::output::write_str;

/// Write one `INSERT` statement per record.
///
/// Each statement lists only the columns present in that record, so
/// omitted optional fields fall back to the column default on insert.
pub fn write_sql<W: Write>(writer: &mut W, records: &[Record], table: &str) -> Result<()> {
    let quoted_table = quote_identifier(table);
    for record in records {
        write_str(writer, &build_insert(&quoted_table, record), "SQL")?;
        write_str(writer, "\n", "SQL")?;
    }
    Ok(())
}

/// Produces: `INSERT INTO table (col1, col2) VALUES (v1, v2);`
fn build_insert(quoted_table: &str, record: &Record) -> String {
    if record.is_empty() {
        return format!("INSERT INTO {} DEFAULT VALUES;", quoted_table);
    }
    let columns = record
        .keys()
        .map(|c| quote_identifier(c))
        .collect::<Vec<_>>()
        .join(", ");
    let values = record
        .values()
        .map(to_sql_literal)
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO {} ({}) VALUES ({});", quoted_table, columns, values)
}

/// Bare when the name is a plain identifier, double-quoted otherwise.
pub fn quote_identifier(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}

/// Render a value as a SQL literal.
pub fn to_sql_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) if f.is_finite() => f.to_string(),
        Value::Float(_) => "NULL".to_string(),
        Value::String(s) => quote_string(s),
        Value::Array(_) | Value::Object(_) => quote_string(&value.to_json_string()),
    }
}

fn quote_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(to_sql_literal(&Value::Null), "NULL");
        assert_eq!(to_sql_literal(&Value::Bool(true)), "TRUE");
        assert_eq!(to_sql_literal(&Value::Float(2.5)), "2.5");
        assert_eq!(to_sql_literal(&Value::Float(f64::NAN)), "NULL");
        assert_eq!(to_sql_literal(&Value::borrowed("O'Brien")), "'O''Brien'");
        assert_eq!(
            to_sql_literal(&Value::Array(vec![Value::borrowed("it's")])),
            "'[\"it''s\"]'"
        );
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("test_data"), "test_data");
        assert_eq!(quote_identifier("order items"), "\"order items\"");
        assert_eq!(quote_identifier("1st"), "\"1st\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_write_sql_per_record_columns() {
        let mut first = Record::new();
        first.insert("id".to_string(), Value::borrowed("ID-ABC123-1"));
        first.insert("qty".to_string(), Value::Int(4));
        let mut second = Record::new();
        second.insert("id".to_string(), Value::borrowed("ID-XYZ789-2"));

        let mut output = Vec::new();
        write_sql(&mut output, &[first, second, Record::new()], "orders").unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "INSERT INTO orders (id, qty) VALUES ('ID-ABC123-1', 4);\n\
             INSERT INTO orders (id) VALUES ('ID-XYZ789-2');\n\
             INSERT INTO orders DEFAULT VALUES;\n"
        );
    }
}
