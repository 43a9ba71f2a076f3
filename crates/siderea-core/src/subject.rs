//! Subject construction.
//!
//! A [`Subject`] is the external library's parameterized representation of a
//! person or moment in time. This module builds one (or two) per request and
//! applies every mode-specific rule in one place: the Greenwich-noon
//! anchoring for pure transits, and the single explicit house-clearing step
//! for transit-bearing subjects.

use chrono::Datelike;
use serde::Serialize;

use crate::geo::DEFAULT_TIMEZONE;
use crate::mode::ChartMode;
use crate::prefs::{HouseSystem, RenderPreferences};
use crate::record::BirthRecord;

/// Fixed reference point for date-only transits: noon UTC at Greenwich.
/// Planetary positions barely move across the globe within a day, so this
/// keeps pure-transit charts deterministic and comparable regardless of the
/// nominal subject's birth data.
pub const GREENWICH_LATITUDE: f64 = 51.5;
pub const GREENWICH_LONGITUDE: f64 = 0.0;
pub const GREENWICH_CITY: &str = "Greenwich";

/// Parameter set for one external-library subject. Serialized as-is across
/// the renderer process boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u8,
    pub minute: u8,
    pub city: String,
    /// Present only on the city+country path; the library geocodes from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz_str: Option<String>,
    pub houses_system_identifier: char,
    pub zodiac_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidereal_mode: Option<&'static str>,
    pub disable_chiron: bool,
    /// House longitudes. `None` lets the library compute them; an explicit
    /// empty list tells it there is nothing to draw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub houses_list: Option<Vec<f64>>,
    /// Cusp longitudes, same convention as `houses_list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cusps: Option<Vec<f64>>,
}

impl Subject {
    /// Builds a subject from a canonical record.
    ///
    /// If the record carries usable coordinates, they are passed explicitly
    /// together with the record's timezone (UTC when absent). Otherwise the
    /// city + country pair goes through and the library resolves both
    /// coordinates and timezone itself.
    pub fn from_record(record: &BirthRecord, prefs: &RenderPreferences) -> Self {
        let mut subject = Self::base(record, prefs);
        if record.has_coordinates() {
            subject.lat = record.latitude;
            subject.lng = record.longitude;
            subject.tz_str = Some(
                record
                    .timezone
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            );
        } else {
            subject.nation = Some(record.country_code.clone());
        }
        subject
    }

    /// Builds a date-only transit subject anchored to noon UTC at Greenwich.
    ///
    /// The record's nominal time, city, and coordinates are ignored
    /// entirely; only the calendar date (and the zodiac preference) carries
    /// over. The house system is pinned to Placidus since house geometry is
    /// cleared right below anyway.
    pub fn pure_transit(record: &BirthRecord, prefs: &RenderPreferences) -> Self {
        let mut subject = Self::base(record, prefs);
        subject.name = format!("{} (Transit)", record.name);
        subject.hour = 12;
        subject.minute = 0;
        subject.lat = Some(GREENWICH_LATITUDE);
        subject.lng = Some(GREENWICH_LONGITUDE);
        subject.tz_str = Some(DEFAULT_TIMEZONE.to_string());
        subject.city = GREENWICH_CITY.to_string();
        subject.houses_system_identifier = HouseSystem::Placidus.identifier();
        subject.clear_houses();
        subject
    }

    fn base(record: &BirthRecord, prefs: &RenderPreferences) -> Self {
        Self {
            name: record.name.clone(),
            year: record.birth_date.year(),
            month: record.birth_date.month(),
            day: record.birth_date.day(),
            hour: record.birth_time.hour,
            minute: record.birth_time.minute,
            city: record.city.clone(),
            nation: None,
            lng: None,
            lat: None,
            tz_str: None,
            houses_system_identifier: prefs.house_system.identifier(),
            zodiac_type: prefs.zodiac.zodiac_type(),
            sidereal_mode: prefs.zodiac.sidereal_mode(),
            disable_chiron: true,
            houses_list: None,
            cusps: None,
        }
    }

    /// Empties the house and cusp lists so the renderer has nothing to draw.
    ///
    /// House geometry is mathematically undefined for a pure-date transit.
    /// This is the one and only place house data gets suppressed on the
    /// input side; the post-render filter in the sanitizer is a separate
    /// safety net for output the library draws regardless.
    pub fn clear_houses(&mut self) {
        self.houses_list = Some(Vec::new());
        self.cusps = Some(Vec::new());
    }

    /// True when both house-related lists are explicitly empty.
    pub fn houses_cleared(&self) -> bool {
        matches!(
            (&self.houses_list, &self.cusps),
            (Some(h), Some(c)) if h.is_empty() && c.is_empty()
        )
    }
}

/// Builds the subject parameter set(s) for a request.
///
/// Two-subject modes take the second record; its absence degrades to the
/// single-subject shape (the mode selector only picks those modes when a
/// second payload exists, so this is unreachable in the assembled pipeline).
pub fn build_subjects(
    record: &BirthRecord,
    second: Option<&BirthRecord>,
    prefs: &RenderPreferences,
    mode: ChartMode,
) -> (Subject, Option<Subject>) {
    match mode {
        ChartMode::Natal => (Subject::from_record(record, prefs), None),
        ChartMode::PureTransit => (Subject::pure_transit(record, prefs), None),
        ChartMode::Synastry => (
            Subject::from_record(record, prefs),
            second.map(|r| Subject::from_record(r, prefs)),
        ),
        ChartMode::TransitOverlay => {
            let transiting = second.map(|r| {
                let mut subject = Subject::from_record(r, prefs);
                subject.clear_houses();
                subject
            });
            (Subject::from_record(record, prefs), transiting)
        }
    }
}
