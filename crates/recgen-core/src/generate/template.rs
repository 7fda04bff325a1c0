//! `{{namespace.method}}` provider templates.
//!
//! A field may carry a raw template such as `"{{person.firstName}} <{{internet.email}}>"`.
//! Each placeholder is replaced with a freshly generated provider value.
//! Unknown placeholders or unbalanced braces are errors; the caller falls back
//! to the next synthesis step.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use fake::faker::address::en::StateAbbr;
use fake::faker::company::en::CatchPhrase;
use fake::faker::lorem::en::Words;
use fake::Fake;
use rand::Rng;
use regex::Regex;

use crate::classify::semantic::SemanticType;
use crate::error::{RecgenError, Result};
use crate::generate::providers::generate_value;
use crate::generate::value::Value;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z]+)\.([A-Za-z]+)\s*\}\}").expect("placeholder pattern must compile")
});

/// Render `template`, replacing every placeholder.
pub fn render<R: Rng>(template: &str, rng: &mut R, base_time: NaiveDateTime) -> Result<Value> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(namespace), Some(method)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        let value = expand(namespace.as_str(), method.as_str(), rng, base_time).ok_or_else(
            || RecgenError::Template {
                template: template.to_string(),
                message: format!(
                    "unknown placeholder '{}.{}'",
                    namespace.as_str(),
                    method.as_str()
                ),
            },
        )?;
        out.push_str(&value);
        last = whole.end();
    }
    out.push_str(&template[last..]);

    if out.contains("{{") || out.contains("}}") {
        return Err(RecgenError::Template {
            template: template.to_string(),
            message: "malformed placeholder".to_string(),
        });
    }

    Ok(Value::owned(out))
}

fn expand<R: Rng>(
    namespace: &str,
    method: &str,
    rng: &mut R,
    base_time: NaiveDateTime,
) -> Option<String> {
    let semantic_type = match (namespace, method) {
        ("person", "firstName") => SemanticType::FirstName,
        ("person", "lastName") => SemanticType::LastName,
        ("person", "fullName") => SemanticType::FullName,
        ("person", "jobTitle") => SemanticType::JobTitle,
        ("internet", "email") => SemanticType::Email,
        ("internet", "userName") | ("internet", "username") => SemanticType::Username,
        ("internet", "url") => SemanticType::Url,
        ("internet", "ip") | ("internet", "ipv4") => SemanticType::IpAddress,
        ("internet", "mac") => SemanticType::MacAddress,
        ("internet", "port") => SemanticType::Port,
        ("phone", "number") => SemanticType::Phone,
        ("location", "city") => SemanticType::City,
        ("location", "country") => SemanticType::Country,
        ("location", "streetAddress") => SemanticType::StreetAddress,
        ("location", "state") => SemanticType::State,
        ("location", "zipCode") => SemanticType::ZipCode,
        ("location", "latitude") => SemanticType::Latitude,
        ("location", "longitude") => SemanticType::Longitude,
        ("company", "name") => SemanticType::CompanyName,
        ("commerce", "department") => SemanticType::Department,
        ("commerce", "productName") => SemanticType::ProductName,
        ("commerce", "price") => SemanticType::Price,
        ("lorem", "word") => SemanticType::Word,
        ("lorem", "sentence") => SemanticType::Sentence,
        ("lorem", "paragraph") => SemanticType::Paragraph,
        ("string", "uuid") => SemanticType::Uuid,
        ("datatype", "boolean") => SemanticType::BooleanFlag,
        ("color", "human") => SemanticType::Color,
        ("system", "fileName") => SemanticType::FileName,
        ("system", "filePath") => SemanticType::FilePath,
        ("system", "semver") => SemanticType::Version,
        ("date", "past") => SemanticType::CreatedAt,
        ("date", "recent") => SemanticType::Timestamp,
        ("date", "future") => SemanticType::EndTime,
        ("location", "stateAbbr") => return Some(StateAbbr().fake_with_rng(rng)),
        ("company", "catchPhrase") => return Some(CatchPhrase().fake_with_rng(rng)),
        ("lorem", "words") => {
            let words: Vec<String> = Words(3..4).fake_with_rng(rng);
            return Some(words.join(" "));
        }
        ("number", "int") => return Some(rng.random_range(0..=1000).to_string()),
        _ => return None,
    };
    Some(generate_value(semantic_type, rng, base_time).to_text())
}
