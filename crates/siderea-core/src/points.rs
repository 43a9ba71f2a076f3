//! Active celestial point selection.

use crate::mode::ChartMode;
use crate::prefs::Rulership;

/// The seven classical bodies, in traditional order.
pub const TRADITIONAL_POINTS: &[&str] = &[
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn",
];

/// Outer planets and the mean lunar node, appended under modern rulership.
pub const MODERN_EXTRA_POINTS: &[&str] = &["Uranus", "Neptune", "Pluto", "Mean_Node"];

/// Chart angles. Meaningless without a location and time, so transit-bearing
/// modes never include them.
pub const ANGLE_POINTS: &[&str] = &["Ascendant", "Medium_Coeli"];

/// Ordered point identifiers to render for the given rulership and mode.
pub fn active_points(rulership: Rulership, mode: ChartMode) -> Vec<&'static str> {
    let mut points: Vec<&'static str> = TRADITIONAL_POINTS.to_vec();
    if rulership == Rulership::Modern {
        points.extend_from_slice(MODERN_EXTRA_POINTS);
    }
    if !mode.is_transit_bearing() {
        points.extend_from_slice(ANGLE_POINTS);
    }
    points
}
