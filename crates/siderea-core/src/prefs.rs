//! Render preferences.
//!
//! Preference strings come from user-editable settings, so unrecognized
//! values fall back to documented defaults (Placidus, tropical, modern)
//! instead of failing the request.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Campanus,
}

impl HouseSystem {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "placidus" => Self::Placidus,
            "whole-sign" => Self::WholeSign,
            "campanus" => Self::Campanus,
            other => {
                tracing::warn!(house_system = other, "unknown house system; using Placidus");
                Self::Placidus
            }
        }
    }

    /// Single-letter identifier the external renderer expects.
    pub fn identifier(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::WholeSign => 'W',
            Self::Campanus => 'C',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zodiac {
    #[default]
    Tropical,
    LahiriVedic,
}

impl Zodiac {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "tropical" => Self::Tropical,
            "lahiri-vedic" => Self::LahiriVedic,
            other => {
                tracing::warn!(zodiac = other, "unknown zodiac; using tropical");
                Self::Tropical
            }
        }
    }

    pub fn zodiac_type(self) -> &'static str {
        match self {
            Self::Tropical => "Tropic",
            Self::LahiriVedic => "Sidereal",
        }
    }

    /// Ayanamsa identifier; only sidereal computation carries one.
    pub fn sidereal_mode(self) -> Option<&'static str> {
        match self {
            Self::Tropical => None,
            Self::LahiriVedic => Some("LAHIRI"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rulership {
    Traditional,
    #[default]
    Modern,
}

impl Rulership {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "traditional" => Self::Traditional,
            "modern" => Self::Modern,
            other => {
                tracing::warn!(rulership = other, "unknown rulership; using modern");
                Self::Modern
            }
        }
    }
}

pub const DEFAULT_THEME: &str = "dark";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPreferences {
    pub house_system: HouseSystem,
    pub zodiac: Zodiac,
    pub rulership: Rulership,
    pub theme: String,
}

impl Default for RenderPreferences {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::default(),
            zodiac: Zodiac::default(),
            rulership: Rulership::default(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl RenderPreferences {
    /// Reads the `user_preferences` object from a request. Absent or
    /// malformed fields take the defaults.
    pub fn from_value(preferences: Option<&Value>, theme: Option<&str>) -> Self {
        let get = |key: &str| {
            preferences
                .and_then(|p| p.get(key))
                .and_then(Value::as_str)
        };
        Self {
            house_system: get("houseSystem").map(HouseSystem::from_tag).unwrap_or_default(),
            zodiac: get("zodiac").map(Zodiac::from_tag).unwrap_or_default(),
            rulership: get("rulership").map(Rulership::from_tag).unwrap_or_default(),
            theme: theme.unwrap_or(DEFAULT_THEME).to_string(),
        }
    }
}
