//! Secret models

use serde::{Deserialize, Serialize};

/// Project secret as exchanged with the Management API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Secret name
    pub name: String,

    /// Secret value (absent or redacted in some list responses)
    #[serde(default)]
    pub value: String,
}

impl Secret {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
