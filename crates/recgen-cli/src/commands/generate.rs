use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use recgen_core::config::{read_config, RecgenConfig};
use recgen_core::generate::{effective_count, synthesize, BatchOptions};
use recgen_core::output::{export, ExportFormat, ExportOptions};

use super::{load_schema, resolve_schema_path};
use crate::args::GenerateArgs;

/// Default batch size when neither the flag nor recgen.toml sets one.
const DEFAULT_COUNT: usize = 100;

pub fn run(args: &GenerateArgs) -> Result<()> {
    // Load optional recgen.toml config
    let config = read_config(Path::new("."))?;

    let schema_path = resolve_schema_path(args.schema.as_deref(), config.as_ref())?;
    let schema = load_schema(&schema_path)?;

    let options = batch_options(args, config.as_ref());
    let format = args
        .output_format()
        .or_else(|| config.as_ref().and_then(|c| c.output.format))
        .unwrap_or_default();
    let export_options = export_options(args, config.as_ref());

    // Phase 1: Synthesize
    let total = effective_count(options.count, options.preview);
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.cyan} [1/2] Generating records... {bar:40.cyan/dim} {pos}/{len} ({eta})",
            )
            .context("Invalid progress bar template")?
            .progress_chars("█▓░"),
    );

    let records = synthesize(
        &schema,
        &options,
        Some(&|current, _total| {
            pb.set_position(current as u64);
        }),
    )?;

    pb.finish_with_message(format!("Generating records... ✓ ({} records)", records.len()));

    // Phase 2: Export
    let pb2 = ProgressBar::new_spinner();
    pb2.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [2/2] {msg}")
            .context("Invalid progress bar template")?,
    );

    match &args.output {
        Some(path) => {
            pb2.set_message(format!("Writing {} to {}...", format, path.display()));
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export(&records, format, &export_options, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;

            pb2.finish_with_message(format!("Writing to {}... ✓", path.display()));
            eprintln!(
                "\n✓ Generated {} records from {} fields → {} ({})",
                records.len(),
                schema.field_count(),
                path.display(),
                format.label(),
            );
        }
        None => {
            pb2.set_message("Writing to stdout...");
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            export(&records, format, &export_options, &mut writer)?;
            writer.flush().context("Failed to write to stdout")?;

            pb2.finish_with_message("Writing to stdout... ✓");
            eprintln!(
                "\n✓ Generated {} records from {} fields ({})",
                records.len(),
                schema.field_count(),
                format.label(),
            );
        }
    }

    if let Some(seed) = options.seed {
        eprintln!("Seed {} (rerun with --seed {} to reproduce)", seed, seed);
    }

    Ok(())
}

/// Merge flags over recgen.toml over built-in defaults.
///
/// Environment variables reach us through clap, so they already sit at
/// the flag level.
fn batch_options(args: &GenerateArgs, config: Option<&RecgenConfig>) -> BatchOptions {
    let generate = config.map(|c| &c.generate);

    BatchOptions {
        count: args
            .count
            .or_else(|| generate.and_then(|g| g.count))
            .unwrap_or(DEFAULT_COUNT),
        preview: args.preview || generate.and_then(|g| g.preview).unwrap_or(false),
        id_prefix: args
            .id_prefix
            .clone()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| generate.and_then(|g| g.id_prefix.clone())),
        seed: args.seed.or_else(|| generate.and_then(|g| g.seed)),
        ..Default::default()
    }
}

fn export_options(args: &GenerateArgs, config: Option<&RecgenConfig>) -> ExportOptions {
    let mut options = config
        .map(RecgenConfig::export_options)
        .unwrap_or_default();
    if let Some(table) = &args.table {
        options.table = table.clone();
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::args::{Cli, Command};

    fn generate_args(args: &[&str]) -> GenerateArgs {
        match Cli::try_parse_from(args).unwrap().command {
            Command::Generate(args) => args,
            other => panic!("expected generate, got {:?}", other),
        }
    }

    fn config(toml_src: &str) -> RecgenConfig {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let args = generate_args(&["recgen", "generate", "--schema", "s.json"]);
        let options = batch_options(&args, None);
        assert_eq!(options.count, DEFAULT_COUNT);
        assert!(!options.preview);
        assert_eq!(options.id_prefix, None);
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let cfg = config(
            r#"
[generate]
count = 500
id_prefix = "ORD"
seed = 42

[output]
table = "readings"
"#,
        );
        let args = generate_args(&["recgen", "generate", "--schema", "s.json"]);
        let options = batch_options(&args, Some(&cfg));
        assert_eq!(options.count, 500);
        assert_eq!(options.id_prefix.as_deref(), Some("ORD"));
        assert_eq!(export_options(&args, Some(&cfg)).table, "readings");
    }

    #[test]
    fn test_flags_override_config() {
        let cfg = config(
            r#"
[generate]
count = 500
id_prefix = "ORD"
seed = 42

[output]
table = "readings"
"#,
        );
        let args = generate_args(&[
            "recgen",
            "generate",
            "--schema",
            "s.json",
            "--count",
            "20",
            "--id-prefix",
            "PO",
            "--seed",
            "9",
            "--table",
            "orders",
        ]);
        let options = batch_options(&args, Some(&cfg));
        assert_eq!(options.count, 20);
        assert_eq!(options.id_prefix.as_deref(), Some("PO"));
        assert_eq!(options.seed, Some(9));
        assert_eq!(export_options(&args, Some(&cfg)).table, "orders");
    }

    #[test]
    fn test_blank_prefix_flag_is_ignored() {
        let args = generate_args(&["recgen", "generate", "--id-prefix", "  "]);
        assert_eq!(batch_options(&args, None).id_prefix, None);
    }

    #[test]
    fn test_export_defaults() {
        let args = generate_args(&["recgen", "generate"]);
        assert_eq!(export_options(&args, None), ExportOptions::default());
        assert_eq!(args.output_format().unwrap_or_default(), ExportFormat::Json);
    }
}
