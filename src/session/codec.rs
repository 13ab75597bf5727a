//! Session artifact codec
//!
//! A session artifact is the string form of a [`Token`] that a client keeps
//! (typically as a cookie value) and presents on every protected request:
//!
//! ```text
//! id=<integer>;content=<percent-encoded proof>
//! ```
//!
//! Fields are keyed, so the decoder accepts them in any order and skips keys
//! it does not know. Only `id` and `content` are ever written. The older
//! positional form (`<id>|<proof>`) is not accepted.

use crate::client::{Token, ValidationRequest};
use crate::error::SessionError;

const FIELD_DELIMITER: char = ';';
const KEY_VALUE_SEPARATOR: char = '=';
const ID_KEY: &str = "id";
const CONTENT_KEY: &str = "content";

/// Encode a token into its session artifact string
pub fn encode(token: &Token) -> String {
    format!(
        "{ID_KEY}{KEY_VALUE_SEPARATOR}{}{FIELD_DELIMITER}{CONTENT_KEY}{KEY_VALUE_SEPARATOR}{}",
        token.id,
        urlencoding::encode(&token.content)
    )
}

/// Decode a session artifact into the request presented to the authority.
///
/// Any deviation from the keyed grammar is reported as
/// [`SessionError::MalformedSession`].
pub fn decode(artifact: &str) -> Result<ValidationRequest, SessionError> {
    let mut id: Option<&str> = None;
    let mut content: Option<&str> = None;

    for field in artifact.trim().split(FIELD_DELIMITER) {
        if field.is_empty() {
            continue;
        }

        let (key, value) = field
            .split_once(KEY_VALUE_SEPARATOR)
            .ok_or_else(|| malformed(format!("field '{}' has no '=' separator", field)))?;

        let slot = match key.trim() {
            ID_KEY => &mut id,
            CONTENT_KEY => &mut content,
            _ => continue,
        };

        if slot.replace(value).is_some() {
            return Err(malformed(format!("duplicate '{}' field", key.trim())));
        }
    }

    let id = id.ok_or_else(|| malformed("missing 'id' field"))?;
    let content = content.ok_or_else(|| malformed("missing 'content' field"))?;

    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| malformed(format!("id '{}' is not an integer", id)))?;

    let client = urlencoding::decode(content.trim())
        .map_err(|e| malformed(format!("content is not valid UTF-8: {}", e)))?
        .into_owned();

    if client.is_empty() {
        return Err(malformed("empty 'content' field"));
    }

    Ok(ValidationRequest { id, client })
}

fn malformed(detail: impl Into<String>) -> SessionError {
    SessionError::MalformedSession(detail.into())
}
