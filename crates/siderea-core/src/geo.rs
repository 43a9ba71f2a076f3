//! Country name resolution.
//!
//! The external renderer wants ISO-3166 alpha-2 codes, but upstream data
//! sources carry free-text country names. The lookup is a fixed table of
//! common names; anything it does not recognize silently becomes
//! [`FALLBACK_COUNTRY`]. This function is total and side-effect free.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Country code substituted when the input is empty or unrecognized.
pub const FALLBACK_COUNTRY: &str = "US";

/// Timezone used when a record carries coordinates but no timezone.
pub const DEFAULT_TIMEZONE: &str = "UTC";

static COUNTRY_CODES: &[(&str, &str)] = &[
    ("United States", "US"),
    ("USA", "US"),
    ("United Kingdom", "GB"),
    ("UK", "GB"),
    ("Canada", "CA"),
    ("Australia", "AU"),
    ("Germany", "DE"),
    ("France", "FR"),
    ("Italy", "IT"),
    ("Spain", "ES"),
    ("Netherlands", "NL"),
    ("Belgium", "BE"),
    ("Switzerland", "CH"),
    ("Austria", "AT"),
    ("Japan", "JP"),
    ("China", "CN"),
    ("India", "IN"),
    ("Brazil", "BR"),
    ("Mexico", "MX"),
    ("Argentina", "AR"),
    ("Russia", "RU"),
    ("Norway", "NO"),
    ("Sweden", "SE"),
    ("Denmark", "DK"),
    ("Finland", "FI"),
    ("Poland", "PL"),
    ("Czech Republic", "CZ"),
    ("Hungary", "HU"),
    ("Ireland", "IE"),
    ("Portugal", "PT"),
    ("Greece", "GR"),
    ("Turkey", "TR"),
    ("Israel", "IL"),
    ("Egypt", "EG"),
    ("South Africa", "ZA"),
    ("New Zealand", "NZ"),
    ("South Korea", "KR"),
    ("Thailand", "TH"),
    ("Singapore", "SG"),
    ("Philippines", "PH"),
    ("Malaysia", "MY"),
    ("Indonesia", "ID"),
    ("Vietnam", "VN"),
    ("Chile", "CL"),
    ("Colombia", "CO"),
    ("Peru", "PE"),
    ("Venezuela", "VE"),
    ("Ukraine", "UA"),
    ("Romania", "RO"),
    ("Bulgaria", "BG"),
    ("Croatia", "HR"),
    ("Serbia", "RS"),
    ("Slovenia", "SI"),
    ("Slovakia", "SK"),
    ("Lithuania", "LT"),
    ("Latvia", "LV"),
    ("Estonia", "EE"),
    ("Iceland", "IS"),
    ("Luxembourg", "LU"),
    ("Malta", "MT"),
    ("Cyprus", "CY"),
];

fn country_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| COUNTRY_CODES.iter().copied().collect())
}

/// Maps a free-text country name to a two-letter code.
///
/// Inputs of two characters or fewer are assumed to already be codes and pass
/// through unchanged (empty input yields [`FALLBACK_COUNTRY`]). Longer inputs
/// are looked up exactly (case-sensitive); misses yield the fallback.
pub fn country_to_code(country: &str) -> String {
    if country.is_empty() {
        return FALLBACK_COUNTRY.to_string();
    }
    if country.chars().count() <= 2 {
        return country.to_string();
    }
    match country_table().get(country) {
        Some(code) => (*code).to_string(),
        None => {
            tracing::debug!(country, "unrecognized country name; using fallback code");
            FALLBACK_COUNTRY.to_string()
        }
    }
}
