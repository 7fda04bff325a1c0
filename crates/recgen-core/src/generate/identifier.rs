//! Hierarchical identifiers.
//!
//! Top-level records get `PREFIX-TOKEN-SEQ`; items of nested arrays get
//! `PREFIX-PARENTTOKEN-PARENTSEQ-CHILDSEQ`, so every child can be traced back
//! to the record that owns it.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::generate::context::GenerationContext;
use crate::generate::providers::random_upper_alphanumeric;

/// Length of the per-record token.
pub const TOKEN_LEN: usize = 6;

/// Width basis for child sequences. Fixed at 10 regardless of array size.
const CHILD_SEQUENCE_BASIS: usize = 10;

static IDENTIFIER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^id$",
        r"Id$",
        r"(?i)_id$",
        r"(?i)reference$",
        r"(?i)^ref$",
        r"(?i)_ref$",
        r"(?i)^identifier$",
        r"(?i)^code$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("identifier pattern must compile"))
    .collect()
});

static PREFIX_SUFFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Id$",
        r"(?i)_id$",
        r"(?i)Reference$",
        r"(?i)_ref$",
        r"(?i)Identifier$",
        r"(?i)Code$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("suffix pattern must compile"))
    .collect()
});

/// Whether a field name denotes an identifier/reference.
pub fn is_identifier_field(name: &str) -> bool {
    IDENTIFIER_PATTERNS.iter().any(|re| re.is_match(name))
}

/// Derive the identifier prefix from a field name.
///
/// `userId` → `USER`, `site_ref` → `SITE`, `reference` → `REF`.
pub fn extract_prefix(name: &str) -> String {
    let mut base = name.to_string();
    for re in PREFIX_SUFFIXES.iter() {
        base = re.replace(&base, "").into_owned();
    }
    if base.is_empty() {
        base = name.to_string();
    }

    match base.to_lowercase().as_str() {
        "id" | "identifier" => return "ID".to_string(),
        "ref" | "reference" => return "REF".to_string(),
        "code" => return "CODE".to_string(),
        _ => {}
    }

    let word = first_word(&base);
    if word.is_empty() {
        base.to_uppercase()
    } else {
        word.to_uppercase()
    }
}

/// First camelCase/snake_case word of `name`. Empty when `name` starts
/// with a separator.
fn first_word(name: &str) -> &str {
    let mut prev_lower = false;
    for (i, c) in name.char_indices() {
        if c == '_' || c.is_whitespace() || (c.is_uppercase() && prev_lower) {
            return &name[..i];
        }
        prev_lower = c.is_lowercase();
    }
    name
}

/// 1-based sequence of `index`, zero-padded to the digit count of `total`.
pub fn format_sequence(index: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{:0width$}", index + 1, width = width)
}

/// Per-record token: six characters from `[A-Z0-9]`.
pub fn random_token<R: Rng>(rng: &mut R) -> String {
    random_upper_alphanumeric(rng, TOKEN_LEN)
}

/// Compose the identifier for field `name` at the position `ctx` describes.
pub fn compose(name: &str, ctx: &GenerationContext) -> String {
    let prefix = match &ctx.id_prefix {
        Some(p) => p.to_string(),
        None => extract_prefix(name),
    };

    match &ctx.parent {
        Some(parent) => {
            let child = format_sequence(ctx.array_item_index.unwrap_or(0), CHILD_SEQUENCE_BASIS);
            format!("{}-{}-{}-{}", prefix, parent.token, parent.sequence, child)
        }
        None => format!(
            "{}-{}-{}",
            prefix,
            ctx.record_token,
            format_sequence(ctx.record_index, ctx.total_records)
        ),
    }
}
