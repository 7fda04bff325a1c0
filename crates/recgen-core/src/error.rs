//! # Error Types
//!
//! Defines `RecgenError`, the unified error enum for recgen. Synthesis itself
//! is designed to degrade instead of failing, so most variants describe the
//! edges of the pipeline: loading a schema, reading `recgen.toml`, and
//! writing exported records.

use thiserror::Error;

/// All errors that can occur in recgen operations.
#[derive(Error, Debug)]
pub enum RecgenError {
    #[error("Schema has no fields to generate from.\n  Extraction reported {} error(s): {}", parse_errors.len(), parse_errors.join("; "))]
    EmptySchema { parse_errors: Vec<String> },

    #[error("Failed to decode schema: {source}")]
    SchemaDecode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Template '{template}' could not be rendered: {message}")]
    Template { template: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown export format '{name}'. Supported: json, csv, sql, xml")]
    UnknownFormat { name: String },

    #[error("Output error: {message}: {source}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RecgenError>;
