use recgen_core::schema::types::*;

/// A monitoring-site schema: identifiers, realism-driven names, coordinates,
/// and a nested array of readings that carry their own identifiers.
pub fn sensor_site_schema() -> Schema {
    let reading = FieldSchema::new("reading", FieldKind::Object).with_fields(vec![
        FieldSchema::new("readingId", FieldKind::String).required(),
        FieldSchema::new("temperature", FieldKind::Number)
            .required()
            .with_range(-20.0, 45.0, 1),
        FieldSchema::new("humidity", FieldKind::Number).with_range(0.0, 100.0, 1),
        FieldSchema::new("recordedAt", FieldKind::Date)
            .required()
            .with_date_format(DateFormat::Iso),
    ]);

    let location = FieldSchema::new("location", FieldKind::Object)
        .required()
        .with_fields(vec![
            FieldSchema::new("city", FieldKind::City).required(),
            FieldSchema::new("country", FieldKind::Country).required(),
            FieldSchema::new("latitude", FieldKind::Number).required(),
            FieldSchema::new("longitude", FieldKind::Number).required(),
        ]);

    Schema::new(vec![
        FieldSchema::new("siteId", FieldKind::String).required(),
        FieldSchema::new("siteName", FieldKind::String).required(),
        FieldSchema::new("status", FieldKind::Enum)
            .required()
            .with_values(["online", "offline", "maintenance"]),
        location,
        FieldSchema::new("readings", FieldKind::Array)
            .required()
            .with_items(reading, 1, 5),
        FieldSchema::new("notes", FieldKind::Lorem).nullable(50.0),
        FieldSchema::new("installedOn", FieldKind::Date).with_date_format(DateFormat::IsoDate),
    ])
}

/// An order schema: top-level identifiers, contact fields, and line items.
pub fn order_schema() -> Schema {
    let line_item = FieldSchema::new("lineItem", FieldKind::Object).with_fields(vec![
        FieldSchema::new("lineId", FieldKind::String).required(),
        FieldSchema::new("productName", FieldKind::String).required(),
        FieldSchema::new("quantity", FieldKind::Number)
            .required()
            .with_range(1.0, 10.0, 0),
        FieldSchema::new("unitPrice", FieldKind::Number)
            .required()
            .with_range(1.0, 500.0, 2),
    ]);

    Schema::new(vec![
        FieldSchema::new("orderId", FieldKind::String).required(),
        FieldSchema::new("customerId", FieldKind::String).required(),
        FieldSchema::new("email", FieldKind::String)
            .required()
            .with_hint("contact email"),
        FieldSchema::new("customerName", FieldKind::FullName).required(),
        FieldSchema::new("shippingAddress", FieldKind::Address),
        FieldSchema::new("priority", FieldKind::Enum)
            .required()
            .with_values(["low", "normal", "high"]),
        FieldSchema::new("express", FieldKind::Boolean).required(),
        FieldSchema::new("lines", FieldKind::Array)
            .required()
            .with_items(line_item, 1, 4),
        FieldSchema::new("placedAt", FieldKind::Date)
            .required()
            .with_date_format(DateFormat::UnixMs),
    ])
}

/// Every field optional and nullable, to exercise the presence policy.
pub fn sparse_schema() -> Schema {
    Schema::new(vec![
        FieldSchema::new("nickname", FieldKind::FirstName).nullable(30.0),
        FieldSchema::new("website", FieldKind::Url).nullable(30.0),
        FieldSchema::new("company", FieldKind::Company).nullable(30.0),
        FieldSchema::new("tags", FieldKind::Array),
        FieldSchema::new("extra", FieldKind::Object),
    ])
}

/// The wire form of a small schema, as an extractor would emit it.
pub const SENSOR_SCHEMA_JSON: &str = r#"{
  "fields": [
    {"name": "deviceId", "type": "string", "required": true, "nullable": false},
    {"name": "deviceName", "type": "string", "required": true, "nullable": false},
    {"name": "pressure", "type": "number", "required": true, "nullable": false, "precision": 2},
    {"name": "mode", "type": "enum", "required": true, "nullable": false,
     "enumValues": ["auto", "manual"]},
    {"name": "samples", "type": "array", "required": true, "nullable": false,
     "arrayMinLength": 2, "arrayMaxLength": 3,
     "arrayItemConfig": {"name": "sampleId", "type": "string", "required": true, "nullable": false}}
  ],
  "originalInput": "{\"deviceId\": \"DEV-1\"}",
  "parseErrors": []
}"#;
