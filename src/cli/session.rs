//! Session codec commands

use chrono::Utc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::Token;
use crate::error::Result;
use crate::output::json::format_json;
use crate::session::codec;

/// Print the artifact for a token
pub fn encode(opts: &GlobalOptions, id: i64, content: String) -> Result<()> {
    // Expiry never enters the artifact
    let token = Token {
        id,
        content,
        expires_at: Utc::now(),
    };
    let artifact = codec::encode(&token);

    match opts.format {
        OutputFormat::Pretty => println!("{}", artifact),
        OutputFormat::Json => println!("{}", format_json(&artifact)?),
    }
    Ok(())
}

/// Print the validation request an artifact decodes to
pub fn decode(opts: &GlobalOptions, artifact: &str) -> Result<()> {
    let request = codec::decode(artifact)?;

    match opts.format {
        OutputFormat::Pretty => {
            println!("id:     {}", request.id);
            println!("client: {}", request.client);
        }
        OutputFormat::Json => println!("{}", format_json(&request)?),
    }
    Ok(())
}
