//! Fallback diagram.
//!
//! Any pipeline failure ends here: a fixed-size placeholder wheel carrying a
//! truncated error message. Pure string formatting, no parsing, no I/O —
//! this function itself cannot fail, so the caller always has a well-formed
//! diagram to return.

/// Longest error text embedded in the placeholder. Anything beyond this goes
/// to the logs only.
pub const MESSAGE_LIMIT_CHARS: usize = 50;

/// Builds the placeholder diagram for a failed request.
pub fn fallback_svg(message: &str) -> String {
    let message = escape_xml(&truncate_chars(message, MESSAGE_LIMIT_CHARS));
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400">
  <circle cx="200" cy="200" r="180" fill="none" stroke="#666" stroke-width="3"/>
  <text x="200" y="180" text-anchor="middle" font-family="Arial, sans-serif" font-size="16" fill="#666">Chart Generation Error</text>
  <text x="200" y="220" text-anchor="middle" font-family="Arial, sans-serif" font-size="12" fill="#999">{message}</text>
</svg>"##
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
