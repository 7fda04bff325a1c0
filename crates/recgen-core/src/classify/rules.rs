use std::sync::LazyLock;

use regex::Regex;

use crate::classify::semantic::SemanticType;
use crate::schema::types::FieldKind;

/// A pre-compiled realism rule with ready-to-use regex patterns.
struct CompiledRule {
    patterns: Vec<Regex>,
    kinds: Option<&'static [FieldKind]>,
    semantic_type: SemanticType,
}

impl CompiledRule {
    fn admits(&self, kind: FieldKind) -> bool {
        self.kinds.is_none_or(|kinds| kinds.contains(&kind))
    }

    fn matches(&self, search_text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(search_text))
    }
}

/// Pre-compiled rules, in priority order — built once on first access.
static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    REALISM_RULES
        .iter()
        .map(|r| CompiledRule {
            patterns: r
                .patterns
                .iter()
                .map(|p| Regex::new(p).expect("realism patterns are valid regexes"))
                .collect(),
            kinds: r.kinds,
            semantic_type: r.semantic_type,
        })
        .collect()
});

/// A realism rule: name/hint patterns + optional kind restriction.
struct RealismRule {
    /// Regexes matched against `"<hint> <normalized name>"`; any one suffices.
    patterns: &'static [&'static str],
    /// Field kinds the rule applies to (`None` = any eligible kind).
    kinds: Option<&'static [FieldKind]>,
    /// The value category to generate if matched.
    semantic_type: SemanticType,
}

/// Pick a specialized realistic category for a field from its name and hint.
///
/// Only string and number fields are eligible; date fields always go through
/// type-based synthesis so their output format is honored. Rules are tried in
/// table order and the first match wins. `None` means "use the type-based
/// generator".
pub fn classify_field(kind: FieldKind, name: &str, hint: Option<&str>) -> Option<SemanticType> {
    if !matches!(kind, FieldKind::String | FieldKind::Number) {
        return None;
    }

    let search_text = search_text(name, hint);
    COMPILED_RULES
        .iter()
        .find(|rule| rule.admits(kind) && rule.matches(&search_text))
        .map(|rule| rule.semantic_type)
}

/// Build the text realism patterns run against: the hint followed by the
/// normalized field name.
pub fn search_text(name: &str, hint: Option<&str>) -> String {
    format!("{} {}", hint.unwrap_or_default(), normalize_field_name(name))
}

/// Normalize a field name into space-separated lowercase words:
/// - camelCase boundaries become spaces (`siteReference` → `site reference`)
/// - underscores become spaces (`site_reference` → `site reference`)
///
/// Tracks the previous character instead of indexing bytes so non-ASCII
/// names are handled safely.
pub fn normalize_field_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_char: Option<char> = None;

    for ch in name.chars() {
        if ch == '_' {
            result.push(' ');
            prev_char = Some(ch);
            continue;
        }
        if ch.is_uppercase() {
            if let Some(p) = prev_char {
                if p.is_lowercase() {
                    result.push(' ');
                }
            }
        }
        for lower_ch in ch.to_lowercase() {
            result.push(lower_ch);
        }
        prev_char = Some(ch);
    }
    result
}

static STRING: &[FieldKind] = &[FieldKind::String];
static NUMBER: &[FieldKind] = &[FieldKind::Number];
/// Temporal rules also list `Date` so the table documents their intent, even
/// though date fields never reach the matcher.
static TEMPORAL: &[FieldKind] = &[FieldKind::String, FieldKind::Date];

// === Realism rules (order = priority) ===
//
// Identifier-like rules come first so `siteId` is never read as a person
// name. Generic rules shadow the specific ones listed after them: `name`
// wins over `first name`, `title` over `job title`, and `address` over
// `email address`, `ip address` and `mac address`.

static REALISM_RULES: &[RealismRule] = &[
    // === Identifiers & references ===
    RealismRule {
        patterns: &[r"(?i)\b(id|identifier|ref|reference|code)\b", r"Id$"],
        kinds: Some(STRING),
        semantic_type: SemanticType::ShortCode,
    },
    RealismRule {
        patterns: &[r"(?i)\b(sku|product.?code|item.?code|part.?number)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Sku,
    },
    RealismRule {
        patterns: &[r"(?i)\b(serial|serial.?number)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::SerialNumber,
    },
    // === Names & labels ===
    RealismRule {
        patterns: &[r"(?i)\b(sensor.?name|device.?name|equipment.?name)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::DeviceName,
    },
    RealismRule {
        patterns: &[r"(?i)\b(site.?name|location.?name|place.?name|building.?name)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::SiteName,
    },
    RealismRule {
        patterns: &[r"(?i)\b(project.?name|campaign.?name)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::ProjectName,
    },
    RealismRule {
        patterns: &[r"(?i)\b(title|heading|subject)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Title,
    },
    RealismRule {
        patterns: &[r"(?i)\b(name)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::FullName,
    },
    RealismRule {
        patterns: &[r"(?i)\b(first.?name|firstname|given.?name)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::FirstName,
    },
    RealismRule {
        patterns: &[r"(?i)\b(last.?name|lastname|surname|family.?name)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::LastName,
    },
    RealismRule {
        patterns: &[r"(?i)\b(username|user.?name|login)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Username,
    },
    // === Descriptions & text ===
    RealismRule {
        patterns: &[r"(?i)\b(description|desc|summary|overview|details)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Description,
    },
    RealismRule {
        patterns: &[r"(?i)\b(comment|note|remark|feedback)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Comment,
    },
    RealismRule {
        patterns: &[r"(?i)\b(function|purpose|role|type|category)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Category,
    },
    RealismRule {
        patterns: &[r"(?i)\b(status|state)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Status,
    },
    // === Location & address ===
    RealismRule {
        patterns: &[r"(?i)\b(address|street)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::StreetAddress,
    },
    RealismRule {
        patterns: &[r"(?i)\b(city|town)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::City,
    },
    RealismRule {
        patterns: &[r"(?i)\b(state|province|region)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::State,
    },
    RealismRule {
        patterns: &[r"(?i)\b(country)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Country,
    },
    RealismRule {
        patterns: &[r"(?i)\b(zip|postal|postcode)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::ZipCode,
    },
    RealismRule {
        patterns: &[r"(?i)\b(lat|latitude)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Latitude,
    },
    RealismRule {
        patterns: &[r"(?i)\b(lon|lng|longitude)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Longitude,
    },
    // === Contact ===
    RealismRule {
        patterns: &[r"(?i)\b(email|e-mail|mail)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Email,
    },
    RealismRule {
        patterns: &[r"(?i)\b(phone|telephone|mobile|cell)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Phone,
    },
    RealismRule {
        patterns: &[r"(?i)\b(website|url|link|homepage)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Url,
    },
    // === Company & organization ===
    RealismRule {
        patterns: &[r"(?i)\b(company|organization|org|business|firm)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::CompanyName,
    },
    RealismRule {
        patterns: &[r"(?i)\b(department|dept|division|team)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Department,
    },
    RealismRule {
        patterns: &[r"(?i)\b(job.?title|position|occupation)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::JobTitle,
    },
    // === Dates & times ===
    RealismRule {
        patterns: &[r"(?i)\b(created|created.?at|creation.?date)\b"],
        kinds: Some(TEMPORAL),
        semantic_type: SemanticType::CreatedAt,
    },
    RealismRule {
        patterns: &[r"(?i)\b(updated|modified|updated.?at|modified.?at)\b"],
        kinds: Some(TEMPORAL),
        semantic_type: SemanticType::UpdatedAt,
    },
    RealismRule {
        patterns: &[r"(?i)\b(timestamp|time|datetime)\b"],
        kinds: Some(TEMPORAL),
        semantic_type: SemanticType::Timestamp,
    },
    RealismRule {
        patterns: &[r"(?i)\b(date|day)\b"],
        kinds: Some(TEMPORAL),
        semantic_type: SemanticType::DateOnly,
    },
    RealismRule {
        patterns: &[r"(?i)\b(start|begin|from)\b"],
        kinds: Some(TEMPORAL),
        semantic_type: SemanticType::StartTime,
    },
    RealismRule {
        patterns: &[r"(?i)\b(end|finish|to|until)\b"],
        kinds: Some(TEMPORAL),
        semantic_type: SemanticType::EndTime,
    },
    // === Measurements & values ===
    RealismRule {
        patterns: &[r"(?i)\b(temperature|temp)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Temperature,
    },
    RealismRule {
        patterns: &[r"(?i)\b(humidity)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Humidity,
    },
    RealismRule {
        patterns: &[r"(?i)\b(pressure)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Pressure,
    },
    RealismRule {
        patterns: &[r"(?i)\b(speed|velocity)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Speed,
    },
    RealismRule {
        patterns: &[r"(?i)\b(weight|mass)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Weight,
    },
    RealismRule {
        patterns: &[r"(?i)\b(height|length|width|depth|distance)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Dimension,
    },
    RealismRule {
        patterns: &[r"(?i)\b(price|cost|amount|total|fee)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Price,
    },
    RealismRule {
        patterns: &[r"(?i)\b(count|quantity|qty|number|num)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Quantity,
    },
    RealismRule {
        patterns: &[r"(?i)\b(percent|percentage|rate)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Percentage,
    },
    RealismRule {
        patterns: &[r"(?i)\b(reading|value|measurement|level)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Reading,
    },
    RealismRule {
        patterns: &[r"(?i)\b(age)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Age,
    },
    RealismRule {
        patterns: &[r"(?i)\b(year)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Year,
    },
    // === Product & commerce ===
    RealismRule {
        patterns: &[r"(?i)\b(product|item)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::ProductName,
    },
    RealismRule {
        patterns: &[r"(?i)\b(brand|manufacturer)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Brand,
    },
    RealismRule {
        patterns: &[r"(?i)\b(color|colour)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Color,
    },
    RealismRule {
        patterns: &[r"(?i)\b(model)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::ModelNumber,
    },
    RealismRule {
        patterns: &[r"(?i)\b(version|ver)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::Version,
    },
    // === Technical ===
    RealismRule {
        patterns: &[r"(?i)\b(ip|ip.?address)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::IpAddress,
    },
    RealismRule {
        patterns: &[r"(?i)\b(mac|mac.?address)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::MacAddress,
    },
    RealismRule {
        patterns: &[r"(?i)\b(port)\b"],
        kinds: Some(NUMBER),
        semantic_type: SemanticType::Port,
    },
    RealismRule {
        patterns: &[r"(?i)\b(path|file.?path|directory)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::FilePath,
    },
    RealismRule {
        patterns: &[r"(?i)\b(filename|file.?name)\b"],
        kinds: Some(STRING),
        semantic_type: SemanticType::FileName,
    },
];
