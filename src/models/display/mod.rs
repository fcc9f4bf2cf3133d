//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod secret;

pub use secret::SecretDisplay;
#[cfg(test)]
pub use secret::digest;
