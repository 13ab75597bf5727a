//! Expire command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AuthorityApi;
use crate::error::Result;

/// Ask the authority to schedule deletion of every issued token at its expiry
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    ctx.client.trigger_expiry().await?;

    println!(
        "{} Expiry scheduled at {}",
        "✓".green(),
        ctx.client.base_url().cyan()
    );
    Ok(())
}
