// UI and formatting module

pub mod fields;
pub mod logo;

// Re-export commonly used items for cleaner imports
pub use fields::{field_line, print_host_info, render_host_info};
pub use logo::print_logo;
