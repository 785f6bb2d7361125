use crate::error::{FetchError, Result};
use regex::Regex;
use std::fs;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Read the distribution pretty name from /etc/os-release.
pub fn collect() -> Result<String> {
    let content = fs::read_to_string(OS_RELEASE_PATH)?;
    extract_pretty_name(&content)
        .ok_or_else(|| FetchError::parse(format!("no PRETTY_NAME in {}", OS_RELEASE_PATH)))
}

pub fn get_fallback() -> String {
    "Gentoo".to_string()
}

/// Extract the value of the first PRETTY_NAME="..." entry.
fn extract_pretty_name(content: &str) -> Option<String> {
    let re = Regex::new(r#"PRETTY_NAME="([^"]+)""#).ok()?;
    re.captures(content).map(|caps| caps[1].to_string())
}
