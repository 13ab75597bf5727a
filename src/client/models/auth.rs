//! Login models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Username/secret pair for a single login attempt. Never persisted.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Session token issued by the authority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Session record ID at the authority
    pub id: i64,

    /// Opaque proof string
    pub content: String,

    /// Absolute expiry instant (informational only)
    #[serde(rename = "expiresAt", deserialize_with = "expires_at::deserialize")]
    pub expires_at: DateTime<Utc>,
}

/// Body of the authority's login response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<Token>,

    #[serde(default)]
    pub error: Option<String>,
}

mod expires_at {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    /// The authority has emitted both Unix seconds and RFC 3339 strings.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Seconds(i64),
        Rfc3339(DateTime<Utc>),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Wire::deserialize(deserializer)? {
            Wire::Seconds(secs) => DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                serde::de::Error::custom(format!("expiresAt out of range: {secs}"))
            }),
            Wire::Rfc3339(at) => Ok(at),
        }
    }
}
