use crate::error::{FetchError, Result};
use regex::Regex;
use std::fs;

const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Read the CPU model name from /proc/cpuinfo.
pub fn collect() -> Result<String> {
    let content = fs::read_to_string(CPUINFO_PATH)?;
    extract_model_name(&content)
        .ok_or_else(|| FetchError::parse(format!("no model name in {}", CPUINFO_PATH)))
}

/// First "model name : ..." value; later cores repeat the same line.
fn extract_model_name(cpuinfo: &str) -> Option<String> {
    let re = Regex::new(r"model name\s*:\s*(.+)").ok()?;
    re.captures(cpuinfo)
        .map(|caps| caps[1].trim_end().to_string())
}
