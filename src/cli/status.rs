//! Status command implementation

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output::{self, Formattable};
use crate::session::codec;

/// Local view of configuration and the stored session.
///
/// Nothing here judges validity; only the authority does that (`check`).
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub config_file: String,
    pub config_found: bool,
    pub authority_url: String,
    pub login_path: String,
    pub session_file: String,
    pub session: SessionView,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionView {
    None,
    Malformed {
        detail: String,
    },
    Stored {
        id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        claims: Option<Map<String, Value>>,
    },
}

impl SessionView {
    fn from_artifact(artifact: Option<&str>) -> Self {
        let Some(artifact) = artifact else {
            return SessionView::None;
        };

        match codec::decode(artifact) {
            Ok(request) => SessionView::Stored {
                id: request.id,
                claims: peek_jwt_claims(&request.client),
            },
            Err(err) => SessionView::Malformed {
                detail: err.to_string(),
            },
        }
    }
}

/// Read the claims of a JWT-shaped proof without verifying it.
///
/// Returns `None` when the proof is not a `header.payload.signature` JWT
/// with a JSON object payload.
pub fn peek_jwt_claims(proof: &str) -> Option<Map<String, Value>> {
    let parts: Vec<&str> = proof.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    // Tolerate padded payloads
    let payload = URL_SAFE_NO_PAD.decode(parts[1].trim_end_matches('=')).ok()?;

    match serde_json::from_slice(&payload).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

impl Formattable for StatusReport {
    fn pretty(&self) -> String {
        let mut lines = vec![format!("{}\n", "authgate Status".bold())];

        let found = if self.config_found {
            "".normal()
        } else {
            " (not found, using defaults)".dimmed()
        };
        lines.push(format!("Config file: {}{}", self.config_file.cyan(), found));
        lines.push(format!("Authority:   {}", self.authority_url.cyan()));
        lines.push(format!("Login path:  {}", self.login_path));
        lines.push(format!("Session file: {}", self.session_file));
        lines.push(String::new());

        match &self.session {
            SessionView::None => {
                lines.push(format!("{} No stored session", "○".dimmed()));
                lines.push("  → Run 'authgate login' to sign in".to_string());
            }
            SessionView::Malformed { detail } => {
                lines.push(format!("{} Stored session is unusable: {}", "✗".red(), detail));
                lines.push("  → Run 'authgate login' to replace it".to_string());
            }
            SessionView::Stored { id, claims } => {
                lines.push(format!("{} Stored session: {}", "✓".green(), id));
                if let Some(claims) = claims {
                    for (name, value) in claims {
                        lines.push(format!("  {}: {}", name, value));
                    }
                }
                lines.push(format!(
                    "  → Run {} to ask the authority whether it is still valid",
                    "authgate check".cyan()
                ));
            }
        }

        lines.join("\n")
    }

    fn json_data(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Run the status command to display configuration and session state
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let artifact = ctx.store.load()?;

    let report = StatusReport {
        config_file: ctx.config_path.display().to_string(),
        config_found: ctx.config_path.exists(),
        authority_url: ctx.config.authority_url.clone(),
        login_path: ctx.config.login_path.clone(),
        session_file: ctx.store.path().display().to_string(),
        session: SessionView::from_artifact(artifact.as_deref()),
    };

    output::print(&report, ctx.format)
}
