//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;

/// Types that can render themselves for the selected output format
pub trait Formattable {
    /// Human-oriented rendering
    fn pretty(&self) -> String;

    /// Value placed under `data` in JSON output
    fn json_data(&self) -> Result<serde_json::Value>;

    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.pretty()),
            OutputFormat::Json => Ok(json::format_json(&self.json_data()?)?),
        }
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}
