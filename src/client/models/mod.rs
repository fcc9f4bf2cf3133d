//! Supabase Management API data models

mod response;
mod secret;

pub use response::ApiResponse;
pub use secret::Secret;
