//! Check command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output::{self, Formattable};
use crate::session::Access;

/// Result of a guard check as shown to the user
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub allowed: bool,
    #[serde(flatten)]
    pub access: Access,
}

impl Formattable for CheckReport {
    fn pretty(&self) -> String {
        match &self.access {
            Access::Proceed => format!("{} Allowed", "✓".green()),
            Access::Redirect { location, reason } => {
                let mut lines = vec![format!("{} Denied: {}", "✗".red(), reason)];
                if let Some(detail) = reason.detail() {
                    lines.push(format!("  {}", detail.dimmed()));
                }
                lines.push(format!("  → Redirect to {}", location.cyan()));
                lines.join("\n")
            }
        }
    }

    fn json_data(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Run the guard against an explicit or stored artifact.
///
/// Returns whether access is allowed; denial is an outcome, not an error.
pub async fn run(opts: &GlobalOptions, session: Option<String>) -> Result<bool> {
    let ctx = CommandContext::new(opts)?;

    let artifact = match session {
        Some(artifact) => Some(artifact),
        None => ctx.store.load()?,
    };

    let access = ctx.guard().guard(artifact.as_deref()).await;
    let report = CheckReport {
        allowed: access == Access::Proceed,
        access,
    };

    output::print(&report, ctx.format)?;
    Ok(report.allowed)
}
