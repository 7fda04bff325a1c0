//! Exporting synthesized records as JSON, CSV, SQL or XML.

pub mod csv;
pub mod json;
pub mod sql;
pub mod xml;

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RecgenError, Result};
use crate::generate::value::Record;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Sql,
    Xml,
}

impl ExportFormat {
    pub const ALL: &'static [ExportFormat] = &[
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::Sql,
        ExportFormat::Xml,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Sql => "sql",
            ExportFormat::Xml => "xml",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON array",
            ExportFormat::Csv => "CSV (nested objects flattened)",
            ExportFormat::Sql => "SQL INSERT statements",
            ExportFormat::Xml => "XML document",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.tag()
    }

    /// Infer the format from a file path's extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        ExportFormat::ALL
            .iter()
            .copied()
            .find(|f| f.extension() == ext)
    }
}

impl FromStr for ExportFormat {
    type Err = RecgenError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .iter()
            .copied()
            .find(|f| f.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecgenError::UnknownFormat {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Format-specific naming used by the SQL and XML writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Target table of the `INSERT` statements.
    pub table: String,
    /// XML document element.
    pub root: String,
    /// XML element wrapping each record.
    pub item: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            table: "test_data".to_string(),
            root: "records".to_string(),
            item: "record".to_string(),
        }
    }
}

/// Write `records` to `writer` in the given format.
pub fn export<W: Write>(
    records: &[Record],
    format: ExportFormat,
    options: &ExportOptions,
    writer: &mut W,
) -> Result<()> {
    match format {
        ExportFormat::Json => json::write_json(writer, records),
        ExportFormat::Csv => csv::write_csv(writer, records),
        ExportFormat::Sql => sql::write_sql(writer, records, &options.table),
        ExportFormat::Xml => xml::write_xml(writer, records, &options.root, &options.item),
    }
}

/// [`export`] into an in-memory string.
pub fn export_to_string(
    records: &[Record],
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<String> {
    let mut buf = Vec::new();
    export(records, format, options, &mut buf)?;
    String::from_utf8(buf).map_err(|e| RecgenError::Other(format!("export is not UTF-8: {}", e)))
}

/// Write a string slice, mapping IO errors to [`RecgenError::Output`].
pub(crate) fn write_str<W: Write>(writer: &mut W, s: &str, what: &str) -> Result<()> {
    writer
        .write_all(s.as_bytes())
        .map_err(|e| RecgenError::Output {
            message: format!("writing {}", what),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::value::Value;

    #[test]
    fn test_from_extension() {
        assert_eq!(
            ExportFormat::from_extension(Path::new("out/data.CSV")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(
            ExportFormat::from_extension(Path::new("dump.sql")),
            Some(ExportFormat::Sql)
        );
        assert_eq!(ExportFormat::from_extension(Path::new("notes.txt")), None);
        assert_eq!(ExportFormat::from_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("XML".parse::<ExportFormat>().unwrap(), ExportFormat::Xml);
        assert!(matches!(
            "yaml".parse::<ExportFormat>(),
            Err(RecgenError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn test_export_to_string_dispatches() {
        let mut record = Record::new();
        record.insert("n".to_string(), Value::Int(1));
        let records = vec![record];
        let opts = ExportOptions::default();

        let sql = export_to_string(&records, ExportFormat::Sql, &opts).unwrap();
        assert!(sql.starts_with("INSERT INTO test_data"));

        let xml = export_to_string(&records, ExportFormat::Xml, &opts).unwrap();
        assert!(xml.contains("<records>"));

        let csv = export_to_string(&records, ExportFormat::Csv, &opts).unwrap();
        assert_eq!(csv, "n\n1\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_failure_is_output_error() {
        let mut record = Record::new();
        record.insert("n".to_string(), Value::Int(1));
        let err = export(
            &[record],
            ExportFormat::Json,
            &ExportOptions::default(),
            &mut FailingWriter,
        )
        .unwrap_err();
        assert!(matches!(err, RecgenError::Output { .. }));
    }
}
