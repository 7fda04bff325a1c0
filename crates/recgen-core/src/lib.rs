pub mod classify;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod schema;

// Re-export key types for convenience
pub use error::{RecgenError, Result};
pub use generate::{synthesize, BatchOptions, Record, Value};
pub use output::{ExportFormat, ExportOptions};
pub use schema::types::{DateFormat, FieldKind, FieldSchema, Schema};
