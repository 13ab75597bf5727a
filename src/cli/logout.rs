//! Logout command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;

/// Forget the stored session artifact. The authority is not contacted.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if ctx.store.clear()? {
        println!("{} Session removed", "✓".green());
    } else {
        println!("{} No stored session", "○".dimmed());
    }

    Ok(())
}
