use std::sync::Arc;

use crate::generate::identifier::format_sequence;

/// Lineage of the top-level record an array item descends from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentContext {
    /// The owning record's token.
    pub token: String,
    /// The owning record's formatted sequence.
    pub sequence: String,
    /// 0 for items of a top-level array, +1 per further array level.
    pub depth: usize,
}

/// Positional information threaded through one record's synthesis.
///
/// Contexts are immutable: descending into an array item derives a new
/// context with [`for_array_item`](Self::for_array_item), while descending
/// into an object reuses the caller's context as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    pub record_index: usize,
    pub total_records: usize,
    pub record_token: String,
    pub id_prefix: Option<Arc<str>>,
    pub parent: Option<ParentContext>,
    pub array_item_index: Option<usize>,
}

impl GenerationContext {
    pub fn for_record(
        record_index: usize,
        total_records: usize,
        record_token: String,
        id_prefix: Option<Arc<str>>,
    ) -> Self {
        Self {
            record_index,
            total_records,
            record_token,
            id_prefix,
            parent: None,
            array_item_index: None,
        }
    }

    /// Context for item `index` of an array owned by this context.
    ///
    /// The parent lineage always points at the top-level record, and the
    /// identifier prefix override carries through unchanged.
    pub fn for_array_item(&self, index: usize) -> Self {
        Self {
            record_index: self.record_index,
            total_records: self.total_records,
            record_token: self.record_token.clone(),
            id_prefix: self.id_prefix.clone(),
            parent: Some(ParentContext {
                token: self.record_token.clone(),
                sequence: format_sequence(self.record_index, self.total_records),
                depth: self.parent.as_ref().map_or(0, |p| p.depth + 1),
            }),
            array_item_index: Some(index),
        }
    }
}
