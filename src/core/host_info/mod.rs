pub mod collector;
pub mod cpu;
pub mod host;
pub mod memory;
pub mod os;
pub mod packages;
pub mod portage;
pub mod session;
pub mod types;
pub mod uptime;

pub use collector::collect_host_info;
pub use types::*;
