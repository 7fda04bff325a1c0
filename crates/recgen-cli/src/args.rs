use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use recgen_core::output::ExportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "recgen",
    about = "Generate realistic, structured test records from a field schema",
    version,
    after_help = "Examples:\n  recgen generate --schema order.json --count 1000 --output orders.csv\n  recgen generate --schema order.json --id-prefix PO --seed 42\n  recgen generate                           # schema and defaults from recgen.toml\n  recgen preview --schema order.json\n  recgen kinds"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a batch of records and export it
    Generate(GenerateArgs),

    /// Preview a few generated records as a table
    Preview(PreviewArgs),

    /// List field kinds, date formats and export formats
    Kinds,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Schema JSON file produced by the extractor.
    /// Falls back to RECGEN_SCHEMA or `schema` in recgen.toml
    #[arg(long, env = "RECGEN_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Number of records to generate (1 to 100000, default 100)
    #[arg(long)]
    pub count: Option<usize>,

    /// Cap the batch at 10 records
    #[arg(long)]
    pub preview: bool,

    /// Replace the field-derived prefix of every identifier
    #[arg(long)]
    pub id_prefix: Option<String>,

    /// Random seed for deterministic generation
    #[arg(long, env = "RECGEN_SEED")]
    pub seed: Option<u64>,

    /// Output format (auto-detected from file extension if not specified)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Output file path (.json, .csv, .sql, .xml). Writes to stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Table name for SQL INSERT statements
    #[arg(long)]
    pub table: Option<String>,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Schema JSON file produced by the extractor
    #[arg(long, env = "RECGEN_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Number of records to show (at most 10)
    #[arg(long, default_value = "10")]
    pub rows: usize,

    /// Random seed for deterministic generation
    #[arg(long, env = "RECGEN_SEED")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Sql,
    Xml,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Sql => ExportFormat::Sql,
            OutputFormat::Xml => ExportFormat::Xml,
        }
    }
}

impl GenerateArgs {
    /// Export format from the explicit flag or the output file extension.
    ///
    /// `None` means neither decided it and the caller falls back to
    /// recgen.toml, then JSON.
    pub fn output_format(&self) -> Option<ExportFormat> {
        if let Some(fmt) = self.format {
            return Some(fmt.into());
        }
        self.output.as_deref().and_then(ExportFormat::from_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn generate_args(args: &[&str]) -> GenerateArgs {
        match parse(args).command {
            Command::Generate(args) => args,
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_flags() {
        let args = generate_args(&[
            "recgen",
            "generate",
            "--schema",
            "order.json",
            "--count",
            "250",
            "--id-prefix",
            "PO",
            "--seed",
            "7",
            "--table",
            "orders",
        ]);
        assert_eq!(args.schema, Some(PathBuf::from("order.json")));
        assert_eq!(args.count, Some(250));
        assert_eq!(args.id_prefix.as_deref(), Some("PO"));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.table.as_deref(), Some("orders"));
        assert!(!args.preview);
    }

    #[test]
    fn test_format_flag_beats_extension() {
        let args = generate_args(&[
            "recgen", "generate", "--format", "xml", "--output", "out.csv",
        ]);
        assert_eq!(args.output_format(), Some(ExportFormat::Xml));
    }

    #[test]
    fn test_format_from_extension() {
        let args = generate_args(&["recgen", "generate", "--output", "out.sql"]);
        assert_eq!(args.output_format(), Some(ExportFormat::Sql));

        let args = generate_args(&["recgen", "generate", "--output", "out.txt"]);
        assert_eq!(args.output_format(), None);
    }

    #[test]
    fn test_preview_defaults() {
        match parse(&["recgen", "preview", "--schema", "s.json"]).command {
            Command::Preview(args) => assert_eq!(args.rows, 10),
            other => panic!("expected preview, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["recgen", "generate", "--format", "yaml"]).is_err());
    }
}
