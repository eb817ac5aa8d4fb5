mod console_renderer;
mod markdown_renderer;

pub use console_renderer::ConsoleRenderer;
pub use markdown_renderer::MarkdownRenderer;

use chrono::{DateTime, Utc};

/// Placeholder rendered when the platform omitted a value
const UNKNOWN: &str = "Unknown";

fn display_or_unknown(value: &str) -> &str {
    if value.is_empty() {
        UNKNOWN
    } else {
        value
    }
}

/// Renders a timestamp in fixed UTC form so report output stays deterministic
/// across machines and locales.
fn display_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(value) => value.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => UNKNOWN.to_string(),
    }
}
