//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod check;
pub mod context;
pub mod expire;
pub mod login;
pub mod logout;
pub mod session;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// authgate - log in to an authority and guard access with its session tokens
#[derive(Parser, Debug)]
#[command(name = "authgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "AUTHGATE_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "AUTHGATE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the authority base URL
    #[arg(long, global = true, env = "AUTHGATE_AUTHORITY", hide_env = true)]
    pub authority: Option<String>,

    /// Override the session artifact file
    #[arg(long, global = true, env = "AUTHGATE_SESSION_FILE", hide_env = true)]
    pub session_file: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "AUTHGATE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session artifact
    Login {
        /// Username (prompted when omitted)
        #[arg(long, short)]
        username: Option<String>,

        /// Secret (prompted when omitted)
        #[arg(long, env = "AUTHGATE_SECRET", hide_env_values = true)]
        secret: Option<String>,
    },

    /// Check whether the session grants access to protected operations
    Check {
        /// Session artifact to check instead of the stored one
        #[arg(long)]
        session: Option<String>,
    },

    /// Show configuration and stored session
    Status,

    /// Forget the stored session artifact
    Logout,

    /// Ask the authority to schedule expiry of its issued tokens
    Expire,

    /// Encode or decode session artifacts
    #[command(subcommand)]
    Session(SessionCommands),

    /// Display version information
    Version,
}

/// Session artifact codec commands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Encode a token into a session artifact
    Encode {
        /// Token ID
        #[arg(long, allow_negative_numbers = true)]
        id: i64,

        /// Token content (the proof)
        #[arg(long)]
        content: String,
    },

    /// Decode a session artifact into a validation request
    Decode {
        /// Session artifact, e.g. "id=7;content=xyz"
        artifact: String,
    },
}
