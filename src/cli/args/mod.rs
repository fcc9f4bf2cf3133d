//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod global;
mod project;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use project::ProjectRefArgs;
