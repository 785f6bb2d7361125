use crate::error::{FetchError, Result};
use std::fs;

const MEMINFO_PATH: &str = "/proc/meminfo";

/// Read memory usage from /proc/meminfo, formatted as "{used}M / {total}M".
pub fn collect() -> Result<String> {
    let content = fs::read_to_string(MEMINFO_PATH)?;
    let (total_kb, available_kb) = parse_meminfo(&content).ok_or_else(|| {
        FetchError::parse(format!("no MemTotal/MemAvailable in {}", MEMINFO_PATH))
    })?;
    Ok(format_usage(total_kb, available_kb))
}

/// MemTotal and MemAvailable values in kilobytes.
fn parse_meminfo(content: &str) -> Option<(u64, u64)> {
    let total_kb = keyed_kb_value(content, "MemTotal:")?;
    let available_kb = keyed_kb_value(content, "MemAvailable:")?;
    Some((total_kb, available_kb))
}

fn keyed_kb_value(content: &str, key: &str) -> Option<u64> {
    content
        .lines()
        .find(|line| line.starts_with(key))?
        .split_whitespace()
        .nth(1)?
        .parse()
        .ok()
}

/// Used memory is the kilobyte difference, truncated to megabytes only
/// after subtracting.
fn format_usage(total_kb: u64, available_kb: u64) -> String {
    let used_mb = total_kb.saturating_sub(available_kb) / 1024;
    let total_mb = total_kb / 1024;
    format!("{}M / {}M", used_mb, total_mb)
}
