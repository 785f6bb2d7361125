// Core business logic module

pub mod host_info;

pub use host_info::{collect_host_info, HostInfo};
