//! Backend credentials.
//!
//! Credentials are explicit configuration passed into an adapter at
//! construction. Nothing in Qward reads process-wide credential state
//! implicitly; [`Credentials::from_env`] exists as an opt-in
//! constructor for callers that want the conventional environment
//! variables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable naming the provider channel.
pub const CHANNEL_ENV: &str = "QWARD_QUANTUM_CHANNEL";
/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "QWARD_QUANTUM_TOKEN";

/// Credentials selecting and authenticating a remote backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Provider channel (e.g. a cloud service name).
    pub channel: String,
    /// API token. Never serialized; absent tokens deserialize empty.
    #[serde(skip_serializing, default)]
    pub token: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(channel: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            token: token.into(),
        }
    }

    /// Read credentials from the conventional environment variables.
    ///
    /// Returns `None` when the token variable is unset; the channel
    /// falls back to `"simulator"`.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var(TOKEN_ENV).ok()?;
        let channel = std::env::var(CHANNEL_ENV).unwrap_or_else(|_| "simulator".to_string());
        Some(Self { channel, token })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("channel", &self.channel)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("cloud", "secret-token");
        let debug = format!("{creds:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_serialize_skips_token() {
        let creds = Credentials::new("cloud", "secret-token");
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains("cloud"));
        assert!(!json.contains("secret-token"));
    }
}
