use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::error::{RecgenError, Result};
use crate::generate::context::GenerationContext;
use crate::generate::identifier::random_token;
use crate::generate::structure::synthesize_object;
use crate::generate::value::Record;
use crate::schema::types::Schema;

/// Hard upper bound on records per batch.
pub const MAX_RECORDS: usize = 100_000;

/// Record cap in preview mode.
pub const PREVIEW_RECORDS: usize = 10;

/// Progress reporting batch size — avoids terminal I/O overhead on every record.
const PROGRESS_BATCH_SIZE: usize = 100;

/// Knobs for one synthesis batch.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Requested record count; clamped to `[1, MAX_RECORDS]`.
    pub count: usize,
    /// Cap the batch at [`PREVIEW_RECORDS`].
    pub preview: bool,
    /// Replaces the name-derived prefix of every identifier field. A blank
    /// prefix is ignored.
    pub id_prefix: Option<String>,
    /// Seed for a reproducible batch. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Anchor for every relative date.
    pub base_time: NaiveDateTime,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: 100,
            preview: false,
            id_prefix: None,
            seed: None,
            base_time: chrono::Utc::now().naive_utc(),
        }
    }
}

/// The number of records a batch actually produces.
pub fn effective_count(count: usize, preview: bool) -> usize {
    let clamped = count.clamp(1, MAX_RECORDS);
    if preview {
        clamped.min(PREVIEW_RECORDS)
    } else {
        clamped
    }
}

/// Synthesize a batch of records from `schema`.
///
/// The RNG is seeded from `options.seed` when set, so the same schema, seed
/// and base time always produce the same batch.
pub fn synthesize(
    schema: &Schema,
    options: &BatchOptions,
    progress_callback: Option<&dyn Fn(usize, usize)>,
) -> Result<Vec<Record>> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    synthesize_with_rng(schema, options, &mut rng, progress_callback)
}

/// [`synthesize`] with a caller-supplied random source.
pub fn synthesize_with_rng<R: Rng>(
    schema: &Schema,
    options: &BatchOptions,
    rng: &mut R,
    progress_callback: Option<&dyn Fn(usize, usize)>,
) -> Result<Vec<Record>> {
    if schema.fields.is_empty() && !schema.parse_errors.is_empty() {
        return Err(RecgenError::EmptySchema {
            parse_errors: schema.parse_errors.clone(),
        });
    }
    for error in &schema.parse_errors {
        warn!("Schema extraction reported: {}", error);
    }

    let total = effective_count(options.count, options.preview);
    if total != options.count {
        info!("Record count {} adjusted to {}", options.count, total);
    }
    info!(
        "Synthesizing {} records from {} fields (preview: {}, seed: {:?})",
        total,
        schema.fields.len(),
        options.preview,
        options.seed
    );

    let id_prefix: Option<Arc<str>> = options
        .id_prefix
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(Arc::from);
    let mut issued_tokens: HashSet<String> = HashSet::with_capacity(total);
    let mut records = Vec::with_capacity(total);

    for index in 0..total {
        let token = fresh_token(rng, &mut issued_tokens);
        let ctx = GenerationContext::for_record(index, total, token, id_prefix.clone());
        records.push(synthesize_object(&schema.fields, Some(&ctx), rng, options.base_time));

        let done = index + 1;
        if let Some(cb) = progress_callback {
            if done.is_multiple_of(PROGRESS_BATCH_SIZE) || done == total {
                cb(done, total);
            }
        }
    }

    info!("Synthesized {} records", records.len());
    Ok(records)
}

/// Sample a record token not yet issued in this batch.
fn fresh_token<R: Rng>(rng: &mut R, issued: &mut HashSet<String>) -> String {
    loop {
        let token = random_token(rng);
        if issued.insert(token.clone()) {
            return token;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{FieldKind, FieldSchema};
    use std::cell::RefCell;

    fn base_time() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn options(count: usize, seed: u64) -> BatchOptions {
        BatchOptions {
            count,
            seed: Some(seed),
            base_time: base_time(),
            ..Default::default()
        }
    }

    fn order_schema() -> Schema {
        Schema::new(vec![
            FieldSchema::new("orderId", FieldKind::String).required(),
            FieldSchema::new("customer", FieldKind::FullName).required(),
            FieldSchema::new("note", FieldKind::Lorem),
        ])
    }

    #[test]
    fn test_effective_count() {
        assert_eq!(effective_count(0, false), 1);
        assert_eq!(effective_count(50, false), 50);
        assert_eq!(effective_count(250_000, false), MAX_RECORDS);
        assert_eq!(effective_count(50, true), 10);
        assert_eq!(effective_count(3, true), 3);
        assert_eq!(effective_count(0, true), 1);
    }

    #[test]
    fn test_synthesize_count() {
        let records = synthesize(&order_schema(), &options(37, 1), None).unwrap();
        assert_eq!(records.len(), 37);

        let preview = BatchOptions {
            preview: true,
            ..options(37, 1)
        };
        assert_eq!(synthesize(&order_schema(), &preview, None).unwrap().len(), 10);
    }

    #[test]
    fn test_seed_determinism() {
        let a = synthesize(&order_schema(), &options(20, 99), None).unwrap();
        let b = synthesize(&order_schema(), &options(20, 99), None).unwrap();
        assert_eq!(a, b, "Same seed must produce identical records");

        let c = synthesize(&order_schema(), &options(20, 100), None).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_tokens_distinct_and_sequences_ordered() {
        let records = synthesize(&order_schema(), &options(120, 5), None).unwrap();
        let mut tokens = HashSet::new();
        for (i, record) in records.iter().enumerate() {
            let id = record["orderId"].as_str().unwrap();
            let parts: Vec<&str> = id.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], "ORDER");
            assert!(tokens.insert(parts[1].to_string()), "duplicate token {}", parts[1]);
            assert_eq!(parts[2], format!("{:03}", i + 1));
        }
    }

    #[test]
    fn test_prefix_override() {
        let opts = BatchOptions {
            id_prefix: Some("PO".to_string()),
            ..options(3, 5)
        };
        let records = synthesize(&order_schema(), &opts, None).unwrap();
        for record in &records {
            assert!(record["orderId"].as_str().unwrap().starts_with("PO-"));
        }
    }

    #[test]
    fn test_blank_prefix_falls_back_to_field_name() {
        for blank in ["", "   "] {
            let opts = BatchOptions {
                id_prefix: Some(blank.to_string()),
                ..options(3, 5)
            };
            let records = synthesize(&order_schema(), &opts, None).unwrap();
            for record in &records {
                assert!(record["orderId"].as_str().unwrap().starts_with("ORDER-"));
            }
        }
    }

    #[test]
    fn test_empty_schema_with_errors_fails() {
        let mut schema = Schema::new(vec![]);
        schema.parse_errors.push("Unexpected token".to_string());
        let err = synthesize(&schema, &options(5, 1), None).unwrap_err();
        assert!(matches!(err, RecgenError::EmptySchema { .. }));
    }

    #[test]
    fn test_empty_schema_without_errors_yields_empty_records() {
        let records = synthesize(&Schema::new(vec![]), &options(4, 1), None).unwrap();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_progress_batched() {
        let calls = RefCell::new(Vec::new());
        let cb = |done: usize, total: usize| calls.borrow_mut().push((done, total));
        synthesize(&order_schema(), &options(250, 3), Some(&cb)).unwrap();
        assert_eq!(*calls.borrow(), vec![(100, 250), (200, 250), (250, 250)]);
    }
}
