// gfetch Library - Public API

// Re-export error types
pub mod error;
pub use error::{FetchError, Result, FATAL_PREFIX};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::host_info::{collect_host_info, HostInfo};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
}
