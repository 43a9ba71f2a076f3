//! The canonical birth record and its date/time parsing rules.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Wall-clock birth time. Defaults to local noon when the source carries no
/// usable time: a missing time still leaves the request meaningful, unlike a
/// missing date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthTime {
    pub hour: u8,
    pub minute: u8,
}

impl Default for BirthTime {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
        }
    }
}

impl BirthTime {
    /// Parses `HH:MM` or `HH:MM:SS`. Anything else (including out-of-range
    /// components) resolves to the noon default rather than failing.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(':');
        let hour = parts.next().and_then(|p| p.parse::<u8>().ok());
        let minute = parts.next().and_then(|p| p.parse::<u8>().ok());
        match (hour, minute) {
            (Some(h), Some(m)) if h < 24 && m < 60 => Self { hour: h, minute: m },
            _ => {
                tracing::debug!(raw, "unparseable birth time; defaulting to noon");
                Self::default()
            }
        }
    }
}

/// One normalized birth/event record. Constructed once per incoming request
/// field-set, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthRecord {
    pub name: String,
    pub birth_date: NaiveDate,
    pub birth_time: BirthTime,
    pub city: String,
    /// Two-letter country code ([`crate::geo::country_to_code`] output).
    pub country_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

impl BirthRecord {
    /// True when both coordinates are present and non-zero. Zero coordinates
    /// are treated as "not supplied" because upstream sources use 0/0 as a
    /// null placeholder.
    pub fn has_coordinates(&self) -> bool {
        matches!(
            (self.latitude, self.longitude),
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0
        )
    }
}

/// Parses a birth date from either a date-only string (`YYYY-MM-DD`) or a
/// full timestamp with an optional trailing `Z` zone marker.
///
/// A malformed or absent date is an error: the request is meaningless
/// without one.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidBirthDate {
        value: raw.to_string(),
    };

    if raw.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.date_naive());
        }
        let trimmed = raw.strip_suffix('Z').unwrap_or(raw);
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return Ok(dt.date());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
            return Ok(dt.date());
        }
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}
