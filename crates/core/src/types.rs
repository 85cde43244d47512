use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a timestamp from either RFC 3339 (`2024-03-01T09:30:00Z`) or a bare
/// calendar date (`2024-03-01`, taken as midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Serde helper for optional timestamp fields in request bodies.
///
/// Accepts `null`, RFC 3339 strings, and `YYYY-MM-DD` dates. Use with
/// `#[serde(default, deserialize_with = "...")]`.
pub fn deserialize_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{s}'"))),
    }
}

/// A JSON scalar accepted where a text value is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextScalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl From<TextScalar> for String {
    fn from(value: TextScalar) -> Self {
        match value {
            TextScalar::Text(s) => s,
            TextScalar::Signed(n) => n.to_string(),
            TextScalar::Unsigned(n) => n.to_string(),
            TextScalar::Float(f) => f.to_string(),
            TextScalar::Bool(b) => b.to_string(),
        }
    }
}

/// Serde helper for optional text fields in request bodies.
///
/// Numbers and booleans are stored as their string form (`1` becomes `"1"`,
/// `true` becomes `"true"`). Arrays and objects are rejected. Use with
/// `#[serde(default, deserialize_with = "...")]`.
pub fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextScalar>::deserialize(deserializer)?.map(String::from))
}
