pub mod property;

// Re-export the core types to provide a clean public API.
pub use property::Property;
