//! Source record extraction.
//!
//! Requests arrive tagged with a `source_type` naming one of several upstream
//! tables, each with its own field names. This module maps every supported
//! shape onto one canonical [`BirthRecord`].

use serde_json::Value;

use crate::error::{Error, Result};
use crate::geo;
use crate::record::{BirthRecord, BirthTime, parse_birth_date};

/// City used when a record carries none; the renderer resolves coordinates
/// from city + country, so this must be a real place.
const DEFAULT_CITY: &str = "London";
const DEFAULT_COUNTRY: &str = "GB";

/// Where the record's fields come from. Unknown or missing tags take the
/// generic path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// Profile table: `chart_birth_*` fields at the top level.
    UserProfile,
    /// Celebrity table: `birth_*` fields at the top level.
    Idol,
    /// Saved-chart table: `birth_*` fields at the top level.
    Chart,
    /// Pre-processed payload: plain field names inside `chart_data`.
    ProcessedChartData,
    /// Fallback: `birth_*` fields inside an embedded `chart_data` object.
    Generic,
}

impl SourceType {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("user_profile") => Self::UserProfile,
            Some("idol") => Self::Idol,
            Some("chart") => Self::Chart,
            Some("processed_chart_data") => Self::ProcessedChartData,
            _ => Self::Generic,
        }
    }

    fn default_name(self) -> &'static str {
        match self {
            Self::UserProfile => "Profile Chart",
            Self::Idol => "Celebrity Chart",
            Self::Chart => "Saved Chart",
            Self::ProcessedChartData => "Processed Chart",
            Self::Generic => "Chart",
        }
    }
}

/// Field names one source shape reads from.
struct FieldSet {
    date: &'static str,
    time: &'static str,
    city: &'static str,
    country: &'static str,
    latitude: &'static str,
    longitude: &'static str,
    timezone: &'static str,
}

const PROFILE_FIELDS: FieldSet = FieldSet {
    date: "chart_birth_date",
    time: "chart_birth_time",
    city: "chart_birth_city",
    country: "chart_birth_country",
    latitude: "chart_birth_latitude",
    longitude: "chart_birth_longitude",
    timezone: "chart_birth_timezone",
};

const BIRTH_FIELDS: FieldSet = FieldSet {
    date: "birth_date",
    time: "birth_time",
    city: "birth_city",
    country: "birth_country",
    latitude: "birth_latitude",
    longitude: "birth_longitude",
    timezone: "birth_timezone",
};

const PROCESSED_FIELDS: FieldSet = FieldSet {
    date: "birth_date",
    time: "birth_time",
    city: "birth_city",
    country: "birth_country",
    latitude: "latitude",
    longitude: "longitude",
    timezone: "timezone",
};

fn str_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Reads a coordinate that may arrive as a JSON number or a numeric string.
/// Malformed values are treated as absent, not as errors.
fn coordinate(payload: &Value, key: &str) -> Option<f64> {
    let value = payload.get(key)?;
    if value.is_null() {
        return None;
    }
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    match value.as_str().and_then(|s| s.trim().parse::<f64>().ok()) {
        Some(n) => Some(n),
        None => {
            tracing::warn!(key, %value, "malformed coordinate value; treating as absent");
            None
        }
    }
}

/// Builds a canonical record from a request payload and its declared source
/// type. A missing or malformed birth date is the only hard failure here.
pub fn extract_record(payload: &Value, source: SourceType) -> Result<BirthRecord> {
    let (fields, scope) = match source {
        SourceType::UserProfile => (&PROFILE_FIELDS, payload),
        SourceType::Idol | SourceType::Chart => (&BIRTH_FIELDS, payload),
        SourceType::ProcessedChartData | SourceType::Generic => {
            let embedded = payload
                .get("chart_data")
                .filter(|v| v.is_object())
                .ok_or(Error::MissingChartData)?;
            let fields = if source == SourceType::ProcessedChartData {
                &PROCESSED_FIELDS
            } else {
                &BIRTH_FIELDS
            };
            (fields, embedded)
        }
    };

    let date_raw = str_field(scope, fields.date).ok_or(Error::MissingBirthDate)?;
    let birth_date = parse_birth_date(date_raw)?;

    let birth_time = str_field(scope, fields.time)
        .map(BirthTime::parse)
        .unwrap_or_default();

    let name = str_field(scope, "name")
        .or_else(|| str_field(payload, "name"))
        .unwrap_or(source.default_name())
        .to_string();

    let city = str_field(scope, fields.city)
        .unwrap_or(DEFAULT_CITY)
        .to_string();
    let country = str_field(scope, fields.country).unwrap_or(DEFAULT_COUNTRY);

    Ok(BirthRecord {
        name,
        birth_date,
        birth_time,
        city,
        country_code: geo::country_to_code(country),
        latitude: coordinate(scope, fields.latitude),
        longitude: coordinate(scope, fields.longitude),
        timezone: str_field(scope, fields.timezone).map(str::to_string),
    })
}
