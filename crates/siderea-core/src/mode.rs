//! Chart mode selection.
//!
//! The mode is derived exactly once per request from the `is_transit` flag
//! and the shape of the optional second payload, then threaded through every
//! later stage. No stage re-derives it.

use serde_json::Value;

/// Second-payload names starting with one of these indicate a transit
/// overlay rather than a synastry comparison.
pub const TRANSIT_NAME_PREFIXES: &[&str] = &["Transit ", "Transits "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    /// Single-subject birth chart.
    Natal,
    /// Two subjects compared; both keep full house geometry.
    Synastry,
    /// Natal chart with a second "transiting" subject overlaid.
    TransitOverlay,
    /// Date-only chart anchored to noon UTC at Greenwich; carries no
    /// location, time, or house semantics at all.
    PureTransit,
}

impl ChartMode {
    /// True for modes where house geometry is undefined and must never reach
    /// the renderer.
    pub fn is_transit_bearing(self) -> bool {
        matches!(self, Self::TransitOverlay | Self::PureTransit)
    }

    /// True for modes rendered from two subjects.
    pub fn has_second_subject(self) -> bool {
        matches!(self, Self::Synastry | Self::TransitOverlay)
    }

    /// Chart-type label passed to the external renderer. Single-subject
    /// modes carry no label.
    pub fn renderer_label(self) -> Option<&'static str> {
        match self {
            Self::Synastry => Some("Synastry"),
            Self::TransitOverlay => Some("Transit"),
            Self::Natal | Self::PureTransit => None,
        }
    }
}

/// Selects the mode from the request flags. Precedence, highest first:
/// transit-named second payload, any other second payload, the `is_transit`
/// flag alone, then natal. Total and deterministic.
pub fn select_mode(is_transit: bool, second_payload: Option<&Value>) -> ChartMode {
    if let Some(second) = second_payload {
        let name = second.get("name").and_then(Value::as_str).unwrap_or("");
        if TRANSIT_NAME_PREFIXES.iter().any(|p| name.starts_with(p)) {
            return ChartMode::TransitOverlay;
        }
        return ChartMode::Synastry;
    }
    if is_transit {
        return ChartMode::PureTransit;
    }
    ChartMode::Natal
}
