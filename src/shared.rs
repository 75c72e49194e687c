pub mod errors;
pub mod settings;
pub mod types;


// Re-export the session-level error for convenience
pub use errors::{ConverterError, ConverterResult};
