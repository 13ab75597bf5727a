//! Token validation models

use serde::{Deserialize, Serialize};

/// Proof presented back to the authority, decoded from a session artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Session record ID
    pub id: i64,

    /// The token's `content`, re-presented as the client's proof
    pub client: String,
}

/// Authority verdict for a single validation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub validated: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
