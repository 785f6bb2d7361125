// Command handlers module
pub mod fetch;

// Re-exports for cleaner imports
pub use fetch::execute as fetch;
