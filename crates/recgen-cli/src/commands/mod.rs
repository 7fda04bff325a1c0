pub mod generate;
pub mod kinds;
pub mod preview;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use recgen_core::config::{RecgenConfig, CONFIG_FILE_NAME};
use recgen_core::schema::types::Schema;

/// Pick the schema file: explicit flag or env var first, then recgen.toml.
pub fn resolve_schema_path(
    explicit: Option<&Path>,
    config: Option<&RecgenConfig>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = config.and_then(RecgenConfig::schema_path) {
        return Ok(path);
    }
    bail!(
        "No schema given. Pass --schema <file>, set RECGEN_SCHEMA, or add `schema` under [generate] in {}.",
        CONFIG_FILE_NAME
    )
}

/// Read and decode a schema JSON file.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;
    let schema = Schema::from_json(&content)
        .with_context(|| format!("Failed to load schema from {}", path.display()))?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_schema_wins() {
        let path = resolve_schema_path(Some(Path::new("a.json")), None).unwrap();
        assert_eq!(path, PathBuf::from("a.json"));
    }

    #[test]
    fn test_missing_schema_is_an_error() {
        let err = resolve_schema_path(None, None).unwrap_err();
        assert!(err.to_string().contains("--schema"));
    }

    #[test]
    fn test_load_schema_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_schema(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load schema"));
    }

    #[test]
    fn test_load_schema_decodes_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"fields": [{{"name": "siteId", "type": "string", "required": true}}]}}"#
        )
        .unwrap();
        let schema = load_schema(file.path()).unwrap();
        assert_eq!(schema.field_count(), 1);
    }
}
