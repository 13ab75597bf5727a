//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - coloured, human-oriented
    #[default]
    Pretty,
    /// JSON format - structured for scripts
    Json,
}
