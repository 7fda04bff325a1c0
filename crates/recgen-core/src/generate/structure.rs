use chrono::NaiveDateTime;
use rand::Rng;

use crate::generate::context::GenerationContext;
use crate::generate::scalar::{lorem_word, synthesize_value};
use crate::generate::value::{Record, Value};
use crate::schema::types::FieldSchema;

const DEFAULT_MIN_ITEMS: usize = 1;
const DEFAULT_MAX_ITEMS: usize = 5;

/// Probability that an optional field is kept in a given instance.
const OPTIONAL_PRESENCE: f64 = 0.7;

/// Generate the items of an array field.
///
/// Each item gets its own derived context so identifiers inside it link back
/// to the owning record. Without an item descriptor the array holds lorem
/// words.
pub fn synthesize_array<R: Rng>(
    field: &FieldSchema,
    ctx: Option<&GenerationContext>,
    rng: &mut R,
    base_time: NaiveDateTime,
) -> Vec<Value> {
    let mut min = field.array_min_items.unwrap_or(DEFAULT_MIN_ITEMS);
    let mut max = field.array_max_items.unwrap_or(DEFAULT_MAX_ITEMS);
    if min > max {
        tracing::warn!(
            "Field '{}' has an inverted item range (min: {}, max: {}). Swapping.",
            field.name,
            min,
            max
        );
        std::mem::swap(&mut min, &mut max);
    }
    let len = rng.random_range(min..=max);

    let Some(item) = field.array_item.as_deref() else {
        return (0..len).map(|_| lorem_word(rng)).collect();
    };

    (0..len)
        .map(|i| {
            let child = ctx.map(|c| c.for_array_item(i));
            synthesize_value(item, child.as_ref(), rng, base_time)
        })
        .collect()
}

/// Generate an object from sibling descriptors, applying the presence policy.
///
/// Object nesting does not start a new identifier level: the caller's context
/// is passed down unchanged.
pub fn synthesize_object<R: Rng>(
    fields: &[FieldSchema],
    ctx: Option<&GenerationContext>,
    rng: &mut R,
    base_time: NaiveDateTime,
) -> Record {
    let mut record = Record::with_capacity(fields.len());
    for field in fields {
        if !is_present(field, rng) {
            continue;
        }
        let value = synthesize_value(field, ctx, rng, base_time);
        record.insert(field.name.clone(), value);
    }
    record
}

/// Presence roll: required fields always appear, optional ones 70% of the time.
pub fn is_present<R: Rng>(field: &FieldSchema, rng: &mut R) -> bool {
    field.required || rng.random_bool(OPTIONAL_PRESENCE)
}
