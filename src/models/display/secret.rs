//! Secret display model

use serde::Serialize;
use sha2::{Digest, Sha256};
use tabled::Tabled;

use crate::client::models::Secret;

/// Secret display model for table/JSON output.
///
/// Values never leave the API response; only their SHA-256 digest is shown so
/// users can tell whether two projects hold the same value.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SecretDisplay {
    /// Secret name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Hex-encoded SHA-256 of the value
    #[tabled(rename = "DIGEST")]
    pub digest: String,
}

/// Hex-encoded SHA-256 of a secret value
pub fn digest(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}

impl From<&Secret> for SecretDisplay {
    fn from(secret: &Secret) -> Self {
        Self {
            name: secret.name.clone(),
            digest: digest(&secret.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_display_hides_value() {
        let secret = Secret::new("API_KEY", "sk-live-123");

        let display = SecretDisplay::from(&secret);

        assert_eq!(display.name, "API_KEY");
        assert_ne!(display.digest, "sk-live-123");
        assert_eq!(display.digest.len(), 64);
    }

    #[test]
    fn test_digest_known_value() {
        assert_eq!(
            digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
