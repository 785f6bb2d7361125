use crate::error::{FetchError, Result};
use std::fs;
use std::process::Command;

const PORTAGEQ_BIN: &str = "portageq";
const MAKE_PROFILE_LINK: &str = "/etc/portage/make.profile";

/// Portage version as reported by `portageq --version`.
///
/// Failure to spawn the process is the one fatal error of a fetch run;
/// callers propagate it instead of degrading the field.
pub fn version() -> Result<String> {
    query_version(PORTAGEQ_BIN)
}

/// Run `<program> --version` and capture stdout, trimmed of trailing
/// whitespace. The child's exit status is not inspected; whatever it
/// printed is the value.
pub fn query_version(program: &str) -> Result<String> {
    let output = Command::new(program)
        .arg("--version")
        .output()
        .map_err(|source| FetchError::command_spawn(format!("{} --version", program), source))?;
    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

/// Target of the active make.profile symlink.
pub fn profile() -> Result<String> {
    let target = fs::read_link(MAKE_PROFILE_LINK)?;
    Ok(target.to_string_lossy().into_owned())
}
