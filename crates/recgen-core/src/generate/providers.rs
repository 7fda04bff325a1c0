use chrono::{Duration as ChronoDuration, NaiveDateTime};
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode,
};
use fake::faker::company::en::{CompanyName, Profession};
use fake::faker::internet::en::{DomainSuffix, IPv4, MACAddress, SafeEmail, Username};
use fake::faker::lorem::en::{Paragraph, Sentence, Sentences, Word, Words};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

use crate::classify::semantic::SemanticType;
use crate::generate::dates::{future_instant, iso_timestamp, past_instant};
use crate::generate::value::Value;

const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MIXED_ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const UPPER_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const ELEMENTS: &[&str] = &[
    "Hydrogen", "Helium", "Lithium", "Carbon", "Nitrogen", "Oxygen", "Neon", "Sodium",
    "Magnesium", "Silicon", "Argon", "Calcium", "Titanium", "Chromium", "Iron", "Cobalt",
    "Nickel", "Copper", "Zinc", "Krypton", "Silver", "Xenon", "Tungsten", "Platinum", "Gold",
];

const SITE_SUFFIXES: &[&str] = &["Center", "Station", "Hub", "Facility", "Plant"];

const PROJECT_ADJECTIVES: &[&str] = &[
    "Agile", "Bright", "Silent", "Rapid", "Golden", "Hidden", "Crimson", "Northern", "Quantum",
    "Steady", "Lunar", "Iron", "Clear", "Bold", "Vivid",
];

const PROJECT_NOUNS: &[&str] = &[
    "Falcon", "Harbor", "Summit", "Beacon", "Horizon", "Canyon", "Orbit", "Atlas", "Meridian",
    "Compass", "Forge", "Prairie", "Cascade", "Pioneer", "Lantern",
];

const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Cotton", "Plastic", "Granite", "Rubber", "Bronze", "Concrete", "Fresh",
    "Frozen", "Soft", "Metal",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Table", "Keyboard", "Shoes", "Gloves", "Lamp", "Bike", "Sensor", "Towels",
    "Hat", "Computer", "Ball", "Bag", "Shirt", "Clock",
];

const CATEGORIES: &[&str] = &[
    "Primary",
    "Secondary",
    "Backup",
    "Monitoring",
    "Control",
    "Analysis",
    "Processing",
    "Storage",
    "Communication",
    "Display",
];

const STATUSES: &[&str] = &["Active", "Inactive", "Pending", "Completed", "Failed", "Running"];

const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Sales",
    "Marketing",
    "Product",
    "Design",
    "Finance",
    "Legal",
    "Operations",
    "Support",
    "Research",
];

const COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "black", "white", "gray",
    "brown", "cyan", "magenta", "teal",
];

const FILE_EXTENSIONS: &[&str] = &["pdf", "docx", "xlsx", "png", "jpg", "csv", "txt"];

const PATH_ROOTS: &[&str] = &["usr", "var", "opt", "home", "srv", "etc"];

/// Generate a realistic value for a semantic category.
///
/// `base_time` anchors every temporal category, so a seeded generator paired
/// with the same anchor yields the same values on every run.
pub fn generate_value<R: Rng>(
    semantic_type: SemanticType,
    rng: &mut R,
    base_time: NaiveDateTime,
) -> Value {
    match semantic_type {
        // === Identifiers ===
        SemanticType::ShortCode => Value::owned(random_chars(rng, UPPER_ALNUM, 8)),
        SemanticType::Sku => Value::owned(format!(
            "{}-{:06}",
            random_chars(rng, UPPER_LETTERS, 3),
            rng.random_range(0..1_000_000)
        )),
        SemanticType::SerialNumber => Value::owned(random_chars(rng, UPPER_ALNUM, 12)),
        SemanticType::Uuid => {
            let uuid = uuid::Builder::from_random_bytes(rng.random()).into_uuid();
            Value::owned(uuid.to_string())
        }

        // === Names & labels ===
        SemanticType::DeviceName => Value::owned(format!(
            "{}-{:03}",
            pick(rng, ELEMENTS),
            rng.random_range(1..1000)
        )),
        SemanticType::SiteName => {
            let city: String = CityName().fake_with_rng(rng);
            Value::owned(format!("{} {}", city, pick(rng, SITE_SUFFIXES)))
        }
        SemanticType::ProjectName => Value::owned(format!(
            "{} {}",
            pick(rng, PROJECT_ADJECTIVES),
            pick(rng, PROJECT_NOUNS)
        )),
        SemanticType::Title => {
            let words: Vec<String> = Words(3..7).fake_with_rng(rng);
            Value::owned(capitalize(&words.join(" ")))
        }
        SemanticType::FirstName => Value::owned(FirstName().fake_with_rng(rng)),
        SemanticType::LastName => Value::owned(LastName().fake_with_rng(rng)),
        SemanticType::FullName => Value::owned(Name().fake_with_rng(rng)),
        SemanticType::Username => Value::owned(Username().fake_with_rng(rng)),
        SemanticType::FileName => Value::owned(file_name(rng)),
        SemanticType::JobTitle => Value::owned(Profession().fake_with_rng(rng)),
        SemanticType::ProductName => Value::owned(format!(
            "{} {} {}",
            pick(rng, PROJECT_ADJECTIVES),
            pick(rng, PRODUCT_MATERIALS),
            pick(rng, PRODUCT_NOUNS)
        )),

        // === Text ===
        SemanticType::Description => {
            let sentences: Vec<String> = Sentences(1..4).fake_with_rng(rng);
            Value::owned(sentences.join(" "))
        }
        SemanticType::Comment => Value::owned(Sentence(5..16).fake_with_rng(rng)),
        SemanticType::Category => Value::borrowed(pick(rng, CATEGORIES)),
        SemanticType::Status => Value::borrowed(pick(rng, STATUSES)),
        SemanticType::Word => Value::owned(Word().fake_with_rng(rng)),
        SemanticType::Sentence => Value::owned(Sentence(3..11).fake_with_rng(rng)),
        SemanticType::Paragraph => Value::owned(Paragraph(3..4).fake_with_rng(rng)),

        // === Location ===
        SemanticType::StreetAddress => {
            let number: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            Value::owned(format!("{} {}", number, street))
        }
        SemanticType::City => Value::owned(CityName().fake_with_rng(rng)),
        SemanticType::State => Value::owned(StateName().fake_with_rng(rng)),
        SemanticType::Country => Value::owned(CountryName().fake_with_rng(rng)),
        SemanticType::ZipCode => Value::owned(ZipCode().fake_with_rng(rng)),
        SemanticType::Latitude => Value::Float(float_in(rng, -90.0, 90.0, 4)),
        SemanticType::Longitude => Value::Float(float_in(rng, -180.0, 180.0, 4)),

        // === Contact ===
        SemanticType::Email => Value::owned(SafeEmail().fake_with_rng(rng)),
        SemanticType::Phone => Value::owned(PhoneNumber().fake_with_rng(rng)),
        SemanticType::Url => {
            let host: String = Word().fake_with_rng(rng);
            let suffix: String = DomainSuffix().fake_with_rng(rng);
            Value::owned(format!("https://{}.{}", host.to_lowercase(), suffix))
        }

        // === Organization ===
        SemanticType::CompanyName | SemanticType::Brand => {
            Value::owned(CompanyName().fake_with_rng(rng))
        }
        SemanticType::Department => Value::borrowed(pick(rng, DEPARTMENTS)),

        // === Temporal ===
        SemanticType::CreatedAt => {
            past_iso(rng, base_time, ChronoDuration::days(730))
        }
        SemanticType::UpdatedAt => past_iso(rng, base_time, ChronoDuration::days(30)),
        SemanticType::Timestamp => past_iso(rng, base_time, ChronoDuration::days(7)),
        SemanticType::DateOnly => {
            let dt = past_instant(rng, base_time, ChronoDuration::days(365));
            Value::owned(dt.format("%Y-%m-%d").to_string())
        }
        SemanticType::StartTime => past_iso(rng, base_time, ChronoDuration::days(365)),
        SemanticType::EndTime => {
            let dt = future_instant(rng, base_time, ChronoDuration::days(365));
            Value::owned(iso_timestamp(dt))
        }

        // === Measurements ===
        SemanticType::Temperature => Value::Float(float_in(rng, -20.0, 45.0, 1)),
        SemanticType::Humidity => Value::Float(float_in(rng, 0.0, 100.0, 1)),
        SemanticType::Pressure => Value::Float(float_in(rng, 900.0, 1100.0, 2)),
        SemanticType::Speed => Value::Float(float_in(rng, 0.0, 200.0, 2)),
        SemanticType::Weight => Value::Float(float_in(rng, 0.1, 1000.0, 2)),
        SemanticType::Dimension => Value::Float(float_in(rng, 0.1, 500.0, 2)),
        SemanticType::Price => Value::Float(float_in(rng, 1.0, 10_000.0, 2)),
        SemanticType::Quantity => Value::Int(rng.random_range(1..=100)),
        SemanticType::Percentage => Value::Float(float_in(rng, 0.0, 100.0, 2)),
        SemanticType::Reading => Value::Float(float_in(rng, 0.0, 1000.0, 2)),
        SemanticType::Age => Value::Int(rng.random_range(18..=80)),
        SemanticType::Year => Value::Int(rng.random_range(2000..=2025)),

        // === Commerce ===
        SemanticType::Color => Value::borrowed(pick(rng, COLORS)),
        SemanticType::ModelNumber => Value::owned(format!(
            "{}-{:04}",
            random_chars(rng, UPPER_LETTERS, 2),
            rng.random_range(0..10_000)
        )),
        SemanticType::Version => Value::owned(format!(
            "{}.{}.{}",
            rng.random_range(1..=10),
            rng.random_range(0..=99),
            rng.random_range(0..=99)
        )),

        // === Technical ===
        SemanticType::IpAddress => Value::owned(IPv4().fake_with_rng(rng)),
        SemanticType::MacAddress => Value::owned(MACAddress().fake_with_rng(rng)),
        SemanticType::Port => Value::Int(rng.random_range(1..=65_535)),
        SemanticType::FilePath => {
            let dir: String = Word().fake_with_rng(rng);
            let root = pick(rng, PATH_ROOTS);
            Value::owned(format!("/{}/{}/{}", root, dir, file_name(rng)))
        }

        SemanticType::BooleanFlag => Value::Bool(rng.random_bool(0.5)),
    }
}

fn past_iso<R: Rng>(rng: &mut R, base_time: NaiveDateTime, window: ChronoDuration) -> Value {
    Value::owned(iso_timestamp(past_instant(rng, base_time, window)))
}

fn file_name<R: Rng>(rng: &mut R) -> String {
    let words: Vec<String> = Words(1..3).fake_with_rng(rng);
    format!("{}.{}", words.join("_"), pick(rng, FILE_EXTENSIONS))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Pick one entry of a static table.
pub fn pick<R: Rng>(rng: &mut R, table: &[&'static str]) -> &'static str {
    table[rng.random_range(0..table.len())]
}

/// Uniform float in `[min, max]`, rounded to `precision` decimal places.
pub fn float_in<R: Rng>(rng: &mut R, min: f64, max: f64, precision: u32) -> f64 {
    let raw = if min < max {
        rng.random_range(min..=max)
    } else {
        min
    };
    round_to(raw, precision)
}

pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    (value * factor).round() / factor
}

/// Mixed-case alphanumeric string of length `len`.
pub fn random_alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    random_chars(rng, MIXED_ALNUM, len)
}

/// Upper-case alphanumeric string of length `len`.
pub fn random_upper_alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    random_chars(rng, UPPER_ALNUM, len)
}

fn random_chars<R: Rng>(rng: &mut R, charset: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}
