use std::env;
use std::fs;
use std::io::{self, IsTerminal};

const STDIN_FD_LINK: &str = "/proc/self/fd/0";

/// Login shell path from the environment.
pub fn shell() -> Option<String> {
    env::var("SHELL").ok()
}

/// Controlling terminal device path, resolved through the stdin fd
/// symlink. None when stdin is not an interactive terminal.
pub fn terminal() -> Option<String> {
    if !io::stdin().is_terminal() {
        return None;
    }
    fs::read_link(STDIN_FD_LINK)
        .ok()
        .map(|path| path.to_string_lossy().into_owned())
}
