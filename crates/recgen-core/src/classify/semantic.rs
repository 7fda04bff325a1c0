use serde::{Deserialize, Serialize};

/// A semantic value category understood by the provider layer.
///
/// Realism rules resolve a field to one of these, and the type-based
/// fallback maps the dedicated field kinds (email, city, ...) onto them too,
/// so every realistic value flows through
/// [`generate_value`](crate::generate::providers::generate_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    // === Identifiers ===
    ShortCode,
    Sku,
    SerialNumber,
    Uuid,

    // === Names & labels ===
    DeviceName,
    SiteName,
    ProjectName,
    Title,
    FirstName,
    LastName,
    FullName,
    Username,
    FileName,
    JobTitle,
    ProductName,

    // === Text ===
    Description,
    Comment,
    Category,
    Status,
    Word,
    Sentence,
    Paragraph,

    // === Location ===
    StreetAddress,
    City,
    State,
    Country,
    ZipCode,
    Latitude,
    Longitude,

    // === Contact ===
    Email,
    Phone,
    Url,

    // === Organization ===
    CompanyName,
    Department,

    // === Temporal ===
    CreatedAt,
    UpdatedAt,
    Timestamp,
    DateOnly,
    StartTime,
    EndTime,

    // === Measurements ===
    Temperature,
    Humidity,
    Pressure,
    Speed,
    Weight,
    Dimension,
    Price,
    Quantity,
    Percentage,
    Reading,
    Age,
    Year,

    // === Commerce ===
    Brand,
    Color,
    ModelNumber,
    Version,

    // === Technical ===
    IpAddress,
    MacAddress,
    Port,
    FilePath,

    BooleanFlag,
}

impl SemanticType {
    /// Whether the category produces a number rather than text.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SemanticType::Latitude
                | SemanticType::Longitude
                | SemanticType::Temperature
                | SemanticType::Humidity
                | SemanticType::Pressure
                | SemanticType::Speed
                | SemanticType::Weight
                | SemanticType::Dimension
                | SemanticType::Price
                | SemanticType::Quantity
                | SemanticType::Percentage
                | SemanticType::Reading
                | SemanticType::Age
                | SemanticType::Year
                | SemanticType::Port
        )
    }
}
