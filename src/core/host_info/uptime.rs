use crate::error::{FetchError, Result};
use std::fs;

const UPTIME_PATH: &str = "/proc/uptime";

/// Read the system uptime and format it as "Xd Yh Zm".
pub fn collect() -> Result<String> {
    let content = fs::read_to_string(UPTIME_PATH)?;
    let seconds = parse_uptime_seconds(&content)
        .ok_or_else(|| FetchError::parse(format!("unparsable {}", UPTIME_PATH)))?;
    Ok(format_uptime(seconds))
}

/// First whitespace-delimited token of /proc/uptime, truncated to whole seconds.
fn parse_uptime_seconds(content: &str) -> Option<u64> {
    let token = content.split_whitespace().next()?;
    let seconds: f64 = token.parse().ok()?;
    Some(seconds as u64)
}

/// Leading zero units are omitted: days only if nonzero, hours only if
/// days or hours are nonzero, minutes always.
fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 || days > 0 {
        parts.push(format!("{}h", hours));
    }
    parts.push(format!("{}m", minutes));
    parts.join(" ")
}
