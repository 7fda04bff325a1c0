use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{RecgenError, Result};

/// A field schema as handed over by the extraction step.
///
/// `parse_errors` is informational: generation proceeds as long as at least
/// one field survived extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub fields: Vec<FieldSchema>,
    #[serde(default)]
    pub original_input: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parse_errors: Vec<String>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self {
            fields,
            original_input: String::new(),
            parse_errors: Vec::new(),
        }
    }

    /// Decode a schema from its JSON wire form.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|source| RecgenError::SchemaDecode { source })
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Total number of field descriptors, including array items and nested
    /// object fields.
    pub fn descriptor_count(&self) -> usize {
        self.fields.iter().map(FieldSchema::descriptor_count).sum()
    }
}

/// Describes one record attribute, recursively.
///
/// The wire names follow the extractor's camelCase JSON. Kind-specific
/// constraints are flat optional fields; the ones that don't apply to
/// `kind` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub nullable: bool,
    /// Chance (0–100) of a null value. Only consulted when `nullable` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable_percent: Option<f64>,
    /// Free-text description used for realism matching, e.g. "site reference code".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    // String constraints
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    // Number constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    // Date constraints
    #[serde(
        default,
        alias = "outputFormat",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_format: Option<DateFormat>,

    // Enum constraints
    #[serde(
        default,
        alias = "allowedValues",
        skip_serializing_if = "Option::is_none"
    )]
    pub enum_values: Option<Vec<String>>,

    // Array constraints
    #[serde(
        default,
        rename = "arrayMinLength",
        deserialize_with = "lenient",
        alias = "minItems",
        skip_serializing_if = "Option::is_none"
    )]
    pub array_min_items: Option<usize>,
    #[serde(
        default,
        rename = "arrayMaxLength",
        deserialize_with = "lenient",
        alias = "maxItems",
        skip_serializing_if = "Option::is_none"
    )]
    pub array_max_items: Option<usize>,
    #[serde(
        default,
        rename = "arrayItemConfig",
        alias = "itemSchema",
        skip_serializing_if = "Option::is_none"
    )]
    pub array_item: Option<Box<FieldSchema>>,

    // Object constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_fields: Option<Vec<FieldSchema>>,

    /// Raw provider template such as `"{{person.firstName}} from {{location.city}}"`.
    #[serde(
        default,
        rename = "fakerTemplate",
        alias = "template",
        skip_serializing_if = "Option::is_none"
    )]
    pub template: Option<String>,
}

/// Decode an optional constraint, reading a value of the wrong shape (an
/// unknown date format, a negative length) as absent.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            nullable: false,
            nullable_percent: None,
            hint: None,
            min_length: None,
            max_length: None,
            pattern: None,
            min: None,
            max: None,
            precision: None,
            date_format: None,
            enum_values: None,
            array_min_items: None,
            array_max_items: None,
            array_item: None,
            nested_fields: None,
            template: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn nullable(mut self, percent: f64) -> Self {
        self.nullable = true;
        self.nullable_percent = Some(percent);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_range(mut self, min: f64, max: f64, precision: u32) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.precision = Some(precision);
        self
    }

    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.date_format = Some(format);
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_items(mut self, item: FieldSchema, min: usize, max: usize) -> Self {
        self.array_item = Some(Box::new(item));
        self.array_min_items = Some(min);
        self.array_max_items = Some(max);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldSchema>) -> Self {
        self.nested_fields = Some(fields);
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    fn descriptor_count(&self) -> usize {
        let items = self
            .array_item
            .as_deref()
            .map(FieldSchema::descriptor_count)
            .unwrap_or(0);
        let nested: usize = self
            .nested_fields
            .iter()
            .flatten()
            .map(FieldSchema::descriptor_count)
            .sum();
        1 + items + nested
    }
}

/// The closed set of semantic field kinds.
///
/// Tags the extractor doesn't know about decode as `Unknown`, which
/// synthesizes a single lorem word rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Date,
    Email,
    Uuid,
    Phone,
    Url,
    FirstName,
    LastName,
    FullName,
    Address,
    City,
    Country,
    ZipCode,
    Company,
    Lorem,
    Enum,
    Array,
    Object,
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    pub const ALL: &'static [FieldKind] = &[
        FieldKind::String,
        FieldKind::Number,
        FieldKind::Boolean,
        FieldKind::Date,
        FieldKind::Email,
        FieldKind::Uuid,
        FieldKind::Phone,
        FieldKind::Url,
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::FullName,
        FieldKind::Address,
        FieldKind::City,
        FieldKind::Country,
        FieldKind::ZipCode,
        FieldKind::Company,
        FieldKind::Lorem,
        FieldKind::Enum,
        FieldKind::Array,
        FieldKind::Object,
    ];

    /// Wire tag used in schema JSON.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::Email => "email",
            FieldKind::Uuid => "uuid",
            FieldKind::Phone => "phone",
            FieldKind::Url => "url",
            FieldKind::FirstName => "firstName",
            FieldKind::LastName => "lastName",
            FieldKind::FullName => "fullName",
            FieldKind::Address => "address",
            FieldKind::City => "city",
            FieldKind::Country => "country",
            FieldKind::ZipCode => "zipCode",
            FieldKind::Company => "company",
            FieldKind::Lorem => "lorem",
            FieldKind::Enum => "enum",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
            FieldKind::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::String => "Text",
            FieldKind::Number => "Number",
            FieldKind::Boolean => "Boolean",
            FieldKind::Date => "Date/Time",
            FieldKind::Email => "Email",
            FieldKind::Uuid => "UUID",
            FieldKind::Phone => "Phone",
            FieldKind::Url => "URL",
            FieldKind::FirstName => "First Name",
            FieldKind::LastName => "Last Name",
            FieldKind::FullName => "Full Name",
            FieldKind::Address => "Address",
            FieldKind::City => "City",
            FieldKind::Country => "Country",
            FieldKind::ZipCode => "Zip Code",
            FieldKind::Company => "Company",
            FieldKind::Lorem => "Lorem",
            FieldKind::Enum => "Enum",
            FieldKind::Array => "Array",
            FieldKind::Object => "Object",
            FieldKind::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FieldKind::String => "Generic text string",
            FieldKind::Number => "Integer or decimal number",
            FieldKind::Boolean => "True or false",
            FieldKind::Date => "Date, time, or timestamp (choose format)",
            FieldKind::Email => "Email address",
            FieldKind::Uuid => "Unique identifier",
            FieldKind::Phone => "Phone number",
            FieldKind::Url => "Web address",
            FieldKind::FirstName => "Person first name",
            FieldKind::LastName => "Person last name",
            FieldKind::FullName => "Full person name",
            FieldKind::Address => "Street address",
            FieldKind::City => "City name",
            FieldKind::Country => "Country name",
            FieldKind::ZipCode => "Postal code",
            FieldKind::Company => "Company name",
            FieldKind::Lorem => "Lorem ipsum text",
            FieldKind::Enum => "Value from list",
            FieldKind::Array => "List of items",
            FieldKind::Object => "Nested object",
            FieldKind::Unknown => "Unrecognized kind, generates a lorem word",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Output format for date-kind fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `2024-01-15T10:30:00.000Z`
    #[default]
    Iso,
    /// `2024-01-15`
    IsoDate,
    /// `10:30:00`
    IsoTime,
    /// Seconds since the epoch, as a number.
    Unix,
    /// Milliseconds since the epoch, as a number.
    UnixMs,
    /// `01/15/2024`
    Us,
    /// `15/01/2024`
    Eu,
    /// `Jan 15, 2024`
    Short,
    /// `January 15, 2024`
    Long,
}

impl DateFormat {
    pub const ALL: &'static [DateFormat] = &[
        DateFormat::Iso,
        DateFormat::IsoDate,
        DateFormat::IsoTime,
        DateFormat::Unix,
        DateFormat::UnixMs,
        DateFormat::Us,
        DateFormat::Eu,
        DateFormat::Short,
        DateFormat::Long,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DateFormat::Iso => "iso",
            DateFormat::IsoDate => "iso-date",
            DateFormat::IsoTime => "iso-time",
            DateFormat::Unix => "unix",
            DateFormat::UnixMs => "unix-ms",
            DateFormat::Us => "us",
            DateFormat::Eu => "eu",
            DateFormat::Short => "short",
            DateFormat::Long => "long",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::Iso => "ISO 8601",
            DateFormat::IsoDate => "ISO Date",
            DateFormat::IsoTime => "ISO Time",
            DateFormat::Unix => "Unix (seconds)",
            DateFormat::UnixMs => "Unix (milliseconds)",
            DateFormat::Us => "US Format",
            DateFormat::Eu => "EU Format",
            DateFormat::Short => "Short",
            DateFormat::Long => "Long",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            DateFormat::Iso => "2024-01-15T10:30:00.000Z",
            DateFormat::IsoDate => "2024-01-15",
            DateFormat::IsoTime => "10:30:00",
            DateFormat::Unix => "1705314600",
            DateFormat::UnixMs => "1705314600000",
            DateFormat::Us => "01/15/2024",
            DateFormat::Eu => "15/01/2024",
            DateFormat::Short => "Jan 15, 2024",
            DateFormat::Long => "January 15, 2024",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_schema() {
        let json = r#"{
            "fields": [
                {"name": "siteId", "type": "string", "required": true, "nullable": false},
                {"name": "temperature", "type": "number", "required": true, "nullable": true,
                 "nullablePercent": 10, "min": -20, "max": 45, "precision": 1},
                {"name": "recordedAt", "type": "date", "required": false, "nullable": false,
                 "dateFormat": "unix-ms"},
                {"name": "readings", "type": "array", "required": true, "nullable": false,
                 "arrayMinLength": 2, "arrayMaxLength": 4,
                 "arrayItemConfig": {"name": "item", "type": "object", "required": true, "nullable": false,
                    "nestedFields": [{"name": "readingId", "type": "string", "required": true, "nullable": false}]}}
            ],
            "originalInput": "{}",
            "parseErrors": ["line 3: trailing comma"]
        }"#;

        let schema = Schema::from_json(json).unwrap();
        assert_eq!(schema.field_count(), 4);
        assert_eq!(schema.descriptor_count(), 6);
        assert_eq!(schema.parse_errors.len(), 1);

        let temp = &schema.fields[1];
        assert_eq!(temp.kind, FieldKind::Number);
        assert_eq!(temp.nullable_percent, Some(10.0));
        assert_eq!(temp.precision, Some(1));

        assert_eq!(schema.fields[2].date_format, Some(DateFormat::UnixMs));

        let readings = &schema.fields[3];
        assert_eq!(readings.array_min_items, Some(2));
        let item = readings.array_item.as_deref().unwrap();
        assert_eq!(item.kind, FieldKind::Object);
        assert_eq!(item.nested_fields.as_ref().unwrap()[0].name, "readingId");
    }

    #[test]
    fn test_decode_spec_style_aliases() {
        let json = r#"{"fields": [
            {"name": "tags", "kind": "array", "minItems": 1, "maxItems": 3,
             "itemSchema": {"name": "tag", "kind": "enum", "allowedValues": ["a", "b"]}},
            {"name": "at", "kind": "date", "outputFormat": "eu"},
            {"name": "greeting", "kind": "string", "template": "{{person.firstName}}"}
        ]}"#;

        let schema = Schema::from_json(json).unwrap();
        let tags = &schema.fields[0];
        assert_eq!(tags.array_max_items, Some(3));
        assert_eq!(
            tags.array_item.as_ref().unwrap().enum_values.as_deref(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(schema.fields[1].date_format, Some(DateFormat::Eu));
        assert_eq!(
            schema.fields[2].template.as_deref(),
            Some("{{person.firstName}}")
        );
        assert!(schema.original_input.is_empty());
    }

    #[test]
    fn test_unknown_kind_decodes_as_unknown() {
        let schema = Schema::from_json(r#"{"fields": [{"name": "blob", "type": "binary"}]}"#)
            .unwrap();
        assert_eq!(schema.fields[0].kind, FieldKind::Unknown);
        assert!(!schema.fields[0].required);
    }

    #[test]
    fn test_malformed_constraints_fall_back_to_defaults() {
        let json = r#"{"fields": [
            {"name": "at", "type": "date", "dateFormat": "rfc2822"},
            {"name": "score", "type": "number", "precision": -1, "min": 1, "max": 5},
            {"name": "label", "type": "string", "minLength": -3, "maxLength": "long"},
            {"name": "tags", "type": "array", "arrayMinLength": -1, "arrayMaxLength": 2}
        ]}"#;

        let schema = Schema::from_json(json).unwrap();
        assert_eq!(schema.fields[0].date_format, None);
        assert_eq!(schema.fields[1].precision, None);
        assert_eq!(schema.fields[1].max, Some(5.0));
        assert_eq!(schema.fields[2].min_length, None);
        assert_eq!(schema.fields[2].max_length, None);
        assert_eq!(schema.fields[3].array_min_items, None);
        assert_eq!(schema.fields[3].array_max_items, Some(2));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = Schema::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RecgenError::SchemaDecode { .. }));
    }

    #[test]
    fn test_builder_serializes_with_wire_names() {
        let field = FieldSchema::new("zones", FieldKind::Array)
            .required()
            .with_items(FieldSchema::new("zone", FieldKind::City), 1, 2);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "array");
        assert_eq!(json["arrayMinLength"], 1);
        assert_eq!(json["arrayItemConfig"]["type"], "city");
        assert!(json.get("hint").is_none());
    }

    #[test]
    fn test_catalog_tags_match_serde() {
        for kind in FieldKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.tag());
        }
        for format in DateFormat::ALL {
            let json = serde_json::to_value(format).unwrap();
            assert_eq!(json, format.tag());
        }
    }
}
