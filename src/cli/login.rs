//! Login command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use serde_json::json;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::Credentials;
use crate::error::Result;
use crate::output::json::format_json;
use crate::session::{CredentialCheck, codec};

/// Run the login command.
///
/// On success the encoded artifact replaces any stored one. On failure the
/// stored artifact is left untouched and the login error is returned.
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    secret: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = match username {
        Some(u) => u,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()?,
    };

    let secret = match secret {
        Some(s) => s,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Secret")
            .interact()?,
    };

    let credentials = Credentials::new(username, secret);

    if ctx.format == OutputFormat::Pretty {
        println!("{}", "Authenticating...".cyan());
    }

    let token = CredentialCheck::new(&ctx.client).login(&credentials).await?;
    let artifact = codec::encode(&token);
    ctx.store.save(&artifact)?;

    match ctx.format {
        OutputFormat::Pretty => {
            println!("{}", "✓ Login successful!".green());
            println!("  Session: {}", token.id.to_string().bold());
            println!("  Expires: {}", token.expires_at.to_rfc3339());
            println!("  Stored in: {}", ctx.store.path().display());
        }
        OutputFormat::Json => {
            let data = json!({
                "id": token.id,
                "expiresAt": token.expires_at.to_rfc3339(),
                "sessionFile": ctx.store.path().display().to_string(),
            });
            println!("{}", format_json(&data)?);
        }
    }

    Ok(())
}
