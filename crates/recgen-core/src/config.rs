//! # Configuration File Parser
//!
//! Reads `recgen.toml`, the optional per-project file that sets defaults for
//! the CLI so common flags do not have to be repeated:
//!
//! - `[generate]` — schema path, record count, preview, identifier prefix, seed
//! - `[output]` — export format, SQL table name, XML element names
//!
//! Example `recgen.toml`:
//!
//! ```toml
//! [generate]
//! schema = "schemas/sensors.json"
//! count = 500
//! id_prefix = "ORD"
//! seed = 42
//!
//! [output]
//! format = "csv"
//! table = "readings"
//! root = "records"
//! item = "record"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RecgenError, Result};
use crate::output::xml::element_name;
use crate::output::{ExportFormat, ExportOptions};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "recgen.toml";

/// Top-level recgen.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecgenConfig {
    pub generate: GenerateConfig,
    pub output: OutputConfig,

    /// Absolute path to the directory containing recgen.toml.
    ///
    /// Populated by `read_config()` so a relative `schema` path resolves
    /// against the config file's location, not the CWD.
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

/// Default synthesis settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Schema file (JSON).
    pub schema: Option<String>,
    /// Default number of records.
    pub count: Option<usize>,
    /// Cap batches at the preview size.
    pub preview: Option<bool>,
    /// Global identifier prefix.
    pub id_prefix: Option<String>,
    /// Fixed random seed for deterministic batches.
    pub seed: Option<u64>,
}

/// Default export settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<ExportFormat>,
    /// Table name for SQL `INSERT` statements.
    pub table: Option<String>,
    /// XML document element.
    pub root: Option<String>,
    /// XML per-record element.
    pub item: Option<String>,
}

/// Read and parse a recgen.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be read, parsed or
/// validated.
pub fn read_config(dir: &Path) -> Result<Option<RecgenConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| RecgenError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let mut config: RecgenConfig = toml::from_str(&content).map_err(|e| RecgenError::Config {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    config.config_dir = Some(std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf()));
    config.validate()?;

    Ok(Some(config))
}

impl RecgenConfig {
    /// Validate constraints that serde cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.generate.id_prefix {
            if prefix.trim().is_empty() {
                return Err(config_error(
                    "generate.id_prefix must not be empty. Remove it to derive prefixes from field names.",
                ));
            }
        }

        if let Some(table) = &self.output.table {
            if !is_plain_identifier(table) {
                return Err(config_error(&format!(
                    "output.table '{}' is not a valid SQL identifier \
                     (letters, digits and '_', not starting with a digit).",
                    table
                )));
            }
        }

        for (key, name) in [("root", &self.output.root), ("item", &self.output.item)] {
            if let Some(name) = name {
                if name.is_empty() || element_name(name) != *name {
                    return Err(config_error(&format!(
                        "output.{} '{}' is not a valid XML element name.",
                        key, name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Schema path from `[generate]`, resolved against the config directory.
    pub fn schema_path(&self) -> Option<PathBuf> {
        let schema = self.generate.schema.as_ref()?;
        let path = PathBuf::from(schema);
        match &self.config_dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path),
        }
    }

    /// Export naming with the built-in defaults filled in.
    pub fn export_options(&self) -> ExportOptions {
        let defaults = ExportOptions::default();
        ExportOptions {
            table: self.output.table.clone().unwrap_or(defaults.table),
            root: self.output.root.clone().unwrap_or(defaults.root),
            item: self.output.item.clone().unwrap_or(defaults.item),
        }
    }
}

fn config_error(message: &str) -> RecgenError {
    RecgenError::Config {
        message: message.to_string(),
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
