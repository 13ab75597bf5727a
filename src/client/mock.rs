//! Mock authority for testing
//!
//! Provides an in-memory implementation of [`AuthorityApi`] for unit testing
//! the session components without making real HTTP calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use super::{AuthorityApi, Credentials, LoginResponse, Token, ValidationRequest, ValidationResult};
use crate::error::{ApiError, Error, Result};

/// Mock authority.
///
/// By default it accepts one account (`admin`/`secret`), issues sequential
/// token IDs, and validates a request when the ID is known and the proof
/// matches. Builder methods override any of that.
///
/// # Example
/// ```ignore
/// let mock = MockAuthority::new().with_session(7, "xyz").await;
/// let result = mock.validate(&ValidationRequest { id: 7, client: "xyz".into() }).await?;
/// assert!(result.validated);
/// ```
pub struct MockAuthority {
    /// Accepted username/secret pairs
    accounts: Arc<Mutex<HashMap<String, String>>>,
    /// Live sessions: token ID -> proof
    sessions: Arc<Mutex<HashMap<i64, String>>>,
    /// Next token ID to issue
    next_id: Arc<Mutex<i64>>,
    /// Fixed login response, bypassing account lookup
    login_response: Arc<Mutex<Option<LoginResponse>>>,
    /// Fixed validation result, bypassing session lookup
    validation: Arc<Mutex<Option<ValidationResult>>>,
    /// Failure returned by every call while set
    failure: Arc<Mutex<Option<MockFailure>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Validation requests received, in order
    captured: Arc<Mutex<Vec<ValidationRequest>>>,
}

/// Simulated transport-level failure
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Connection refused, timeout, etc.
    Network(String),
    /// Non-success status with raw body
    Status(u16, String),
    /// Success status with a body that is not the expected JSON
    InvalidBody(String),
}

impl MockFailure {
    fn to_error(&self) -> Error {
        match self {
            MockFailure::Network(msg) => ApiError::Network(msg.clone()).into(),
            MockFailure::Status(status, body) => ApiError::Status {
                status: *status,
                body: body.clone(),
            }
            .into(),
            MockFailure::InvalidBody(body) => ApiError::InvalidResponse(body.clone()).into(),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub validate: usize,
    pub trigger_expiry: usize,
}

impl CallCounts {
    /// Get total number of authority calls made.
    pub fn total(&self) -> usize {
        self.login + self.validate + self.trigger_expiry
    }
}

impl Default for MockAuthority {
    fn default() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert("admin".to_string(), "secret".to_string());

        Self {
            accounts: Arc::new(Mutex::new(accounts)),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            login_response: Arc::new(Mutex::new(None)),
            validation: Arc::new(Mutex::new(None)),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockAuthority {
    /// Create a new mock authority with the default account.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a live session the authority will accept.
    pub async fn with_session(self, id: i64, proof: &str) -> Self {
        self.sessions.lock().await.insert(id, proof.to_string());
        self
    }

    /// Always answer login with this response.
    pub async fn with_login_response(self, response: LoginResponse) -> Self {
        *self.login_response.lock().await = Some(response);
        self
    }

    /// Always answer validate with this result.
    pub async fn with_validation(self, result: ValidationResult) -> Self {
        *self.validation.lock().await = Some(result);
        self
    }

    /// Fail every call with this transport failure.
    pub async fn with_failure(self, failure: MockFailure) -> Self {
        *self.failure.lock().await = Some(failure);
        self
    }

    /// Expire a session at the authority.
    pub async fn revoke(&self, id: i64) {
        self.sessions.lock().await.remove(&id);
    }

    /// Get call counts for verification.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get validation requests received so far.
    pub async fn captured_requests(&self) -> Vec<ValidationRequest> {
        self.captured.lock().await.clone()
    }

    async fn check_failure(&self) -> Result<()> {
        match self.failure.lock().await.as_ref() {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthorityApi for MockAuthority {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.call_count.lock().await.login += 1;
        self.check_failure().await?;

        if let Some(response) = self.login_response.lock().await.clone() {
            return Ok(response);
        }

        let accepted = self
            .accounts
            .lock()
            .await
            .get(&credentials.username)
            .is_some_and(|secret| *secret == credentials.secret);

        if !accepted {
            return Ok(LoginResponse {
                token: None,
                error: Some("Invalid username or password!".to_string()),
            });
        }

        let id = {
            let mut next = self.next_id.lock().await;
            let id = *next;
            *next += 1;
            id
        };
        let content = format!("proof-{}-{}", credentials.username, id);
        self.sessions.lock().await.insert(id, content.clone());

        Ok(LoginResponse {
            token: Some(Token {
                id,
                content,
                expires_at: Utc::now() + Duration::hours(1),
            }),
            error: None,
        })
    }

    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationResult> {
        self.call_count.lock().await.validate += 1;
        self.captured.lock().await.push(request.clone());
        self.check_failure().await?;

        if let Some(result) = self.validation.lock().await.clone() {
            return Ok(result);
        }

        let result = match self.sessions.lock().await.get(&request.id) {
            Some(proof) if *proof == request.client => ValidationResult {
                validated: true,
                error: None,
            },
            Some(_) => ValidationResult {
                validated: false,
                error: Some("Token is invalid!".to_string()),
            },
            None => ValidationResult {
                validated: false,
                error: Some(format!(
                    "There is not any valid token with id {}",
                    request.id
                )),
            },
        };

        Ok(result)
    }

    async fn trigger_expiry(&self) -> Result<()> {
        self.call_count.lock().await.trigger_expiry += 1;
        self.check_failure().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_issues_sequential_ids() {
        let mock = MockAuthority::new();

        let first = mock.login(&Credentials::new("admin", "secret")).await.unwrap();
        let second = mock.login(&Credentials::new("admin", "secret")).await.unwrap();

        assert_eq!(first.token.unwrap().id, 1);
        assert_eq!(second.token.unwrap().id, 2);
        assert_eq!(mock.call_counts().await.login, 2);
    }

    #[tokio::test]
    async fn test_mock_rejects_unknown_account() {
        let mock = MockAuthority::new();

        let resp = mock.login(&Credentials::new("admin", "nope")).await.unwrap();

        assert!(resp.token.is_none());
        assert!(resp.error.is_some());
    }

    #[tokio::test]
    async fn test_mock_revoke_invalidates_session() {
        let mock = MockAuthority::new().with_session(3, "p").await;
        let request = ValidationRequest {
            id: 3,
            client: "p".to_string(),
        };

        assert!(mock.validate(&request).await.unwrap().validated);
        mock.revoke(3).await;
        assert!(!mock.validate(&request).await.unwrap().validated);
        assert_eq!(mock.captured_requests().await.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_failure_applies_to_all_calls() {
        let mock = MockAuthority::new()
            .with_failure(MockFailure::Network("refused".to_string()))
            .await;

        assert!(mock.login(&Credentials::new("admin", "secret")).await.is_err());
        assert!(mock.trigger_expiry().await.is_err());
        assert_eq!(mock.call_counts().await.total(), 2);
    }
}
