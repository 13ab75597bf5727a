//! Token validator
//!
//! Re-checks a decoded session against the authority. Nothing is cached: each
//! call is a fresh round trip, so a session revoked at the authority is denied
//! on the very next request.

use crate::client::{AuthorityApi, ValidationRequest, ValidationResult};
use crate::error::{ApiError, Error, SessionError};

/// Interpreted authority verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// `validated = true`
    Valid,
    /// `validated = false` with the authority's reason
    Invalid(String),
    /// `validated = false` with no reason given
    Ambiguous,
}

impl From<ValidationResult> for Verdict {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult {
                validated: true, ..
            } => Verdict::Valid,
            ValidationResult {
                validated: false,
                error: Some(reason),
            } => Verdict::Invalid(reason),
            ValidationResult {
                validated: false,
                error: None,
            } => Verdict::Ambiguous,
        }
    }
}

impl Verdict {
    /// Collapse the verdict into the session error taxonomy
    pub fn into_result(self) -> Result<(), SessionError> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(reason) => Err(SessionError::SessionInvalid(reason)),
            Verdict::Ambiguous => Err(SessionError::AmbiguousValidation),
        }
    }
}

pub struct TokenValidator<'a, A: AuthorityApi + ?Sized> {
    authority: &'a A,
}

impl<'a, A: AuthorityApi + ?Sized> TokenValidator<'a, A> {
    pub fn new(authority: &'a A) -> Self {
        Self { authority }
    }

    /// Validate a request against the authority.
    ///
    /// Any failure to obtain a well-formed verdict (transport error, timeout,
    /// non-success status, unparseable body) is returned as
    /// [`SessionError::AuthorityUnreachable`] carrying the raw body or
    /// transport message. It is never folded into [`Verdict::Invalid`].
    pub async fn validate(&self, request: &ValidationRequest) -> Result<Verdict, SessionError> {
        log::debug!("Validating session {}", request.id);

        let result = self
            .authority
            .validate(request)
            .await
            .map_err(unreachable_reason)?;

        let verdict = Verdict::from(result);
        if verdict == Verdict::Ambiguous {
            log::warn!(
                "Authority returned validated=false without a reason for session {}",
                request.id
            );
        }

        Ok(verdict)
    }
}

fn unreachable_reason(err: Error) -> SessionError {
    let reason = match err {
        Error::Api(ApiError::Status { body, .. }) => body,
        Error::Api(ApiError::InvalidResponse(body)) => body,
        Error::Api(ApiError::Network(msg)) => msg,
        other => other.to_string(),
    };
    SessionError::AuthorityUnreachable(reason)
}
