use chrono::{Duration as ChronoDuration, NaiveDateTime};
use fake::faker::lorem::en::{Word, Words};
use fake::Fake;
use rand::Rng;
use tracing::{debug, warn};

use crate::classify::rules::classify_field;
use crate::classify::semantic::SemanticType;
use crate::generate::context::GenerationContext;
use crate::generate::dates::{past_instant, render as render_date};
use crate::generate::identifier::{compose, is_identifier_field};
use crate::generate::providers::{generate_value, random_alphanumeric, round_to};
use crate::generate::structure::{synthesize_array, synthesize_object};
use crate::generate::template;
use crate::generate::value::Value;
use crate::schema::types::{FieldKind, FieldSchema};

const DEFAULT_MIN_LENGTH: usize = 1;
const DEFAULT_MAX_LENGTH: usize = 50;
const DEFAULT_MIN_NUMBER: f64 = 0.0;
const DEFAULT_MAX_NUMBER: f64 = 1000.0;
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produce one value for `field`.
///
/// The first applicable step wins: nullability roll, identifier override,
/// raw template, name/hint realism, then the type-based default.
pub fn synthesize_value<R: Rng>(
    field: &FieldSchema,
    ctx: Option<&GenerationContext>,
    rng: &mut R,
    base_time: NaiveDateTime,
) -> Value {
    if let Some(percent) = field.nullable_percent.filter(|p| field.nullable && *p > 0.0) {
        let roll: f64 = rng.random_range(0.0..100.0);
        if roll < percent {
            return Value::Null;
        }
    }

    if field.kind == FieldKind::String && is_identifier_field(&field.name) {
        if let Some(ctx) = ctx {
            return Value::owned(compose(&field.name, ctx));
        }
    }

    if let Some(tpl) = &field.template {
        match template::render(tpl, rng, base_time) {
            Ok(value) => return value,
            Err(e) => debug!("Field '{}': {}; falling back", field.name, e),
        }
    }

    if let Some(semantic_type) = classify_field(field.kind, &field.name, field.hint.as_deref()) {
        return generate_value(semantic_type, rng, base_time);
    }

    synthesize_by_kind(field, ctx, rng, base_time)
}

fn synthesize_by_kind<R: Rng>(
    field: &FieldSchema,
    ctx: Option<&GenerationContext>,
    rng: &mut R,
    base_time: NaiveDateTime,
) -> Value {
    let provider =
        |semantic_type: SemanticType, rng: &mut R| generate_value(semantic_type, rng, base_time);

    match field.kind {
        FieldKind::String => Value::owned(synthesize_string(field, rng)),
        FieldKind::Number => synthesize_number(field, rng),
        FieldKind::Boolean => Value::Bool(rng.random_bool(0.5)),
        FieldKind::Date => {
            let instant = past_instant(rng, base_time, ChronoDuration::days(365));
            render_date(field.date_format.unwrap_or_default(), instant)
        }
        FieldKind::Email => provider(SemanticType::Email, rng),
        FieldKind::Uuid => provider(SemanticType::Uuid, rng),
        FieldKind::Phone => provider(SemanticType::Phone, rng),
        FieldKind::Url => provider(SemanticType::Url, rng),
        FieldKind::FirstName => provider(SemanticType::FirstName, rng),
        FieldKind::LastName => provider(SemanticType::LastName, rng),
        FieldKind::FullName => provider(SemanticType::FullName, rng),
        FieldKind::Address => provider(SemanticType::StreetAddress, rng),
        FieldKind::City => provider(SemanticType::City, rng),
        FieldKind::Country => provider(SemanticType::Country, rng),
        FieldKind::ZipCode => provider(SemanticType::ZipCode, rng),
        FieldKind::Company => provider(SemanticType::CompanyName, rng),
        FieldKind::Lorem => provider(SemanticType::Sentence, rng),
        FieldKind::Enum => match field.enum_values.as_deref() {
            Some(values) if !values.is_empty() => {
                Value::owned(values[rng.random_range(0..values.len())].clone())
            }
            _ => lorem_word(rng),
        },
        FieldKind::Array => Value::Array(synthesize_array(field, ctx, rng, base_time)),
        FieldKind::Object => match field.nested_fields.as_deref() {
            Some(fields) => Value::Object(synthesize_object(fields, ctx, rng, base_time)),
            None => Value::Object(Default::default()),
        },
        FieldKind::Unknown => lorem_word(rng),
    }
}

pub(crate) fn lorem_word<R: Rng>(rng: &mut R) -> Value {
    Value::owned(Word().fake_with_rng(rng))
}

/// Ordered `(low, high)`; an inverted pair is swapped with a warning.
fn ordered<T: PartialOrd + std::fmt::Display>(field: &str, low: T, high: T) -> (T, T) {
    if low > high {
        warn!(
            "Field '{}' has an inverted range (min: {}, max: {}). Swapping.",
            field, low, high
        );
        (high, low)
    } else {
        (low, high)
    }
}

fn synthesize_string<R: Rng>(field: &FieldSchema, rng: &mut R) -> String {
    let (min_len, max_len) = ordered(
        &field.name,
        field.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
        field.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
    );
    let length = rng.random_range(min_len..=max_len);

    // Patterns are not interpreted; only the length is honoured.
    if field.pattern.is_some() {
        return random_alphanumeric(rng, length);
    }

    let word_count = length.div_ceil(5).max(1);
    let words: Vec<String> = Words(word_count..word_count + 1).fake_with_rng(rng);
    let mut text = words.join(" ");

    if text.chars().count() > max_len {
        text = text.chars().take(max_len).collect();
    } else if text.chars().count() < min_len {
        let pad = LETTERS[rng.random_range(0..LETTERS.len())] as char;
        while text.chars().count() < min_len {
            text.push(pad);
        }
    }
    text
}

fn synthesize_number<R: Rng>(field: &FieldSchema, rng: &mut R) -> Value {
    let (min, max) = ordered(
        &field.name,
        field.min.unwrap_or(DEFAULT_MIN_NUMBER),
        field.max.unwrap_or(DEFAULT_MAX_NUMBER),
    );

    match field.precision.unwrap_or(0) {
        0 => {
            let low = min.ceil() as i64;
            let high = max.floor() as i64;
            if low > high {
                // No integer inside a fractional range like [0.2, 0.8].
                Value::Int(min.round() as i64)
            } else {
                Value::Int(rng.random_range(low..=high))
            }
        }
        precision => {
            let raw = if min < max {
                rng.random_range(min..=max)
            } else {
                min
            };
            Value::Float(round_to(raw, precision).clamp(min, max))
        }
    }
}
