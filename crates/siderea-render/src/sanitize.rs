//! Artifact post-processing.
//!
//! Three fix-ups run over the raw SVG text before it reaches the consumer:
//! the standard namespace declaration, a `viewBox` derived from the declared
//! width/height, and (transit-bearing modes only) house-markup removal.
//!
//! House removal is two-layered. A structural pass removes explicitly tagged
//! house groups when present. Because the library does not reliably tag house
//! elements, a heuristic line-oriented pass then drops thin/gray line
//! elements and house-number text. The heuristic is a best-effort safety net,
//! not a guarantee: it works on serialized markup, line by line, and can
//! misfire if the renderer's output format changes. Its thresholds live in
//! [`HouseFilter`] so they can be re-validated against the renderer's current
//! output instead of being baked in.
//!
//! Every function here is pure and idempotent; nothing in this module can
//! abort the pipeline. Where a fix-up cannot be computed (e.g. no usable
//! width/height for a viewBox) the input flows through unchanged.

use std::sync::OnceLock;

use regex::Regex;
use siderea_core::ChartMode;

pub const SVG_NAMESPACE: &str = r#"xmlns="http://www.w3.org/2000/svg""#;

fn width_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"width="(\d+(?:\.\d+)?)""#).expect("valid regex"))
}

fn height_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"height="(\d+(?:\.\d+)?)""#).expect("valid regex"))
}

fn house_group_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<g[^>]*\b(?:id|class)="[^"]*houses?[^"]*"[^>]*>.*?</g>"#)
            .expect("valid regex")
    })
}

fn house_number_text_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)>\s*(?:1[0-2]|[1-9]|I|II|III|IV|V|VI|VII|VIII|IX|X|XI|XII)\s*<")
            .expect("valid regex")
    })
}

/// Thresholds for the heuristic house-line pass. The defaults match the
/// renderer's current output; treat them as tunable, not authoritative.
#[derive(Debug, Clone)]
pub struct HouseFilter {
    /// Stroke widths used for house-division lines.
    pub stroke_widths: Vec<String>,
    /// Lowercased color fragments common to house lines.
    pub line_colors: Vec<String>,
}

impl Default for HouseFilter {
    fn default() -> Self {
        Self {
            stroke_widths: ["0.5", "1", "2"].map(String::from).to_vec(),
            line_colors: [
                "#666", "#777", "#888", "#999", "#aaa", "#bbb", "#ccc", "gray", "grey",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl HouseFilter {
    fn matches_line_element(&self, line: &str) -> bool {
        if !line.contains("<line") {
            return false;
        }
        if self
            .stroke_widths
            .iter()
            .any(|w| line.contains(&format!(r#"stroke-width="{w}""#)))
        {
            return true;
        }
        let lower = line.to_ascii_lowercase();
        self.line_colors.iter().any(|c| lower.contains(c.as_str()))
    }

    fn matches_house_text(&self, line: &str) -> bool {
        line.contains("<text") && house_number_text_regex().is_match(line)
    }
}

/// Full post-processing pass for one rendered artifact.
pub fn sanitize_artifact(svg: &str, mode: ChartMode) -> String {
    let svg = ensure_namespace(svg);
    let svg = ensure_view_box(&svg);
    if mode.is_transit_bearing() {
        let svg = strip_house_groups(&svg);
        strip_house_lines(&svg, &HouseFilter::default())
    } else {
        svg
    }
}

/// Inserts the SVG namespace declaration on the root element if absent.
pub fn ensure_namespace(svg: &str) -> String {
    if svg.contains(SVG_NAMESPACE) {
        return svg.to_string();
    }
    svg.replacen("<svg", &format!("<svg {SVG_NAMESPACE}"), 1)
}

/// Inserts a `viewBox` derived from the declared width/height when neither a
/// viewBox nor the needed dimensions are missing. Consumers scale the chart
/// through the viewBox, so the declared size becomes the coordinate system.
pub fn ensure_view_box(svg: &str) -> String {
    if svg.contains("viewBox=") {
        return svg.to_string();
    }
    let width = width_regex().captures(svg).map(|c| c[1].to_string());
    let height = height_regex().captures(svg).map(|c| c[1].to_string());
    match (width, height) {
        (Some(w), Some(h)) => {
            svg.replacen("<svg", &format!(r#"<svg viewBox="0 0 {w} {h}""#), 1)
        }
        _ => {
            tracing::debug!("no width/height declared; leaving artifact without viewBox");
            svg.to_string()
        }
    }
}

/// Structural pass: removes explicitly tagged house groups.
pub fn strip_house_groups(svg: &str) -> String {
    house_group_regex().replace_all(svg, "").to_string()
}

/// Heuristic pass: drops line elements with thin strokes or house-line
/// grays, and text elements whose entire content is a house number (1-12 or
/// I-XII). Operates per-line on the serialized markup.
pub fn strip_house_lines(svg: &str, filter: &HouseFilter) -> String {
    let kept: Vec<&str> = svg
        .lines()
        .filter(|line| !filter.matches_line_element(line) && !filter.matches_house_text(line))
        .collect();
    kept.join("\n")
}
