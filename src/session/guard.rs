//! Route guard
//!
//! Gates access to a protected operation. Each check starts `Unchecked` and
//! ends in exactly one terminal [`GuardDecision`]. The guard fails closed:
//! if the authority cannot be reached the answer is always `Denied`.

use std::fmt;

use serde::Serialize;

use super::codec;
use super::validator::{TokenValidator, Verdict};
use crate::client::AuthorityApi;
use crate::error::SessionError;

/// Default login entry point for denied requests
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Why access was denied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DenyReason {
    /// No artifact was presented
    NoSession,
    /// The artifact does not follow the keyed grammar
    MalformedSession(String),
    /// The authority could not give a verdict
    AuthorityUnreachable(String),
    /// The authority refused the session with a reason
    SessionInvalid(String),
    /// The authority refused the session without a reason
    AmbiguousValidation,
}

impl DenyReason {
    /// Message suitable for showing to the user
    pub fn message(&self) -> &str {
        match self {
            DenyReason::NoSession => "no session",
            DenyReason::MalformedSession(_) => "malformed session",
            DenyReason::AuthorityUnreachable(_) => "authority unreachable",
            DenyReason::SessionInvalid(reason) => reason,
            DenyReason::AmbiguousValidation => "session rejected",
        }
    }

    /// Underlying detail hidden behind the user-facing message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            DenyReason::MalformedSession(detail) | DenyReason::AuthorityUnreachable(detail) => {
                Some(detail)
            }
            _ => None,
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<SessionError> for DenyReason {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::MalformedSession(detail) => DenyReason::MalformedSession(detail),
            SessionError::AuthorityUnreachable(detail) => DenyReason::AuthorityUnreachable(detail),
            SessionError::SessionInvalid(reason) => DenyReason::SessionInvalid(reason),
            SessionError::AmbiguousValidation => DenyReason::AmbiguousValidation,
            // Login-flow failures never reach the guard; treat them as unreachable
            SessionError::CredentialRejected(detail) | SessionError::TransportFailure(detail) => {
                DenyReason::AuthorityUnreachable(detail)
            }
        }
    }
}

/// Terminal state of a guard check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum GuardDecision {
    Allowed,
    Denied(DenyReason),
}

/// What the caller should do with the original request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Access {
    /// Run the requested operation unmodified
    Proceed,
    /// Send the user to the login entry point
    Redirect { location: String, reason: DenyReason },
}

pub struct RouteGuard<'a, A: AuthorityApi + ?Sized> {
    authority: &'a A,
    login_path: String,
}

impl<'a, A: AuthorityApi + ?Sized> RouteGuard<'a, A> {
    pub fn new(authority: &'a A) -> Self {
        Self {
            authority,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    /// Override the login entry point used for redirects.
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    /// Decide access for the presented session artifact.
    ///
    /// The artifact is passed explicitly; the guard never looks it up itself.
    /// Missing or malformed artifacts are denied without contacting the
    /// authority.
    pub async fn check(&self, artifact: Option<&str>) -> GuardDecision {
        let Some(artifact) = artifact.filter(|a| !a.trim().is_empty()) else {
            log::debug!("Denied: no session artifact");
            return GuardDecision::Denied(DenyReason::NoSession);
        };

        let request = match codec::decode(artifact) {
            Ok(request) => request,
            Err(err) => {
                log::debug!("Denied: {}", err);
                return GuardDecision::Denied(err.into());
            }
        };

        let outcome = TokenValidator::new(self.authority)
            .validate(&request)
            .await
            .and_then(Verdict::into_result);

        match outcome {
            Ok(()) => GuardDecision::Allowed,
            Err(err @ SessionError::AuthorityUnreachable(_)) => {
                log::warn!("Denied session {} (failing closed): {}", request.id, err);
                GuardDecision::Denied(err.into())
            }
            Err(err) => {
                log::debug!("Denied session {}: {}", request.id, err);
                GuardDecision::Denied(err.into())
            }
        }
    }

    /// Run [`check`](Self::check) and map the decision to a caller action.
    pub async fn guard(&self, artifact: Option<&str>) -> Access {
        match self.check(artifact).await {
            GuardDecision::Allowed => Access::Proceed,
            GuardDecision::Denied(reason) => Access::Redirect {
                location: self.login_path.clone(),
                reason,
            },
        }
    }
}
