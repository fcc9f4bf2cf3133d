//! API trait definitions
//!
//! - [`SecretsApi`] - Project secret operations

mod secrets;

pub use secrets::SecretsApi;
