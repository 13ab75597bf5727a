//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.authgate/config.yaml)
    pub config: Option<String>,

    /// Authority base URL override
    pub authority: Option<String>,

    /// Session artifact file override
    pub session_file: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            authority: cli.authority.clone(),
            session_file: cli.session_file.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get authority override as `Option<&str>`.
    pub fn authority_ref(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Get session file override as `Option<&str>`.
    pub fn session_file_ref(&self) -> Option<&str> {
        self.session_file.as_deref()
    }
}
