//! Credential check client

use crate::client::{AuthorityApi, Credentials, LoginResponse, Token};
use crate::error::{ApiError, Error, SessionError};

/// Runs the login exchange with the authority.
///
/// Stateless: it neither stores nor clears any session artifact. The caller
/// encodes the returned [`Token`] with [`super::codec::encode`] and decides
/// where to keep it.
pub struct CredentialCheck<'a, A: AuthorityApi + ?Sized> {
    authority: &'a A,
}

impl<'a, A: AuthorityApi + ?Sized> CredentialCheck<'a, A> {
    pub fn new(authority: &'a A) -> Self {
        Self { authority }
    }

    /// Submit credentials once; no retry.
    ///
    /// # Errors
    /// - [`SessionError::CredentialRejected`] when the authority answers with
    ///   an error string or a client-error status.
    /// - [`SessionError::TransportFailure`] when the call itself fails, the
    ///   authority errors server-side, or the body is unusable.
    pub async fn login(&self, credentials: &Credentials) -> Result<Token, SessionError> {
        log::debug!("Checking credentials for '{}'", credentials.username);

        match self.authority.login(credentials).await {
            Ok(LoginResponse {
                token: Some(token), ..
            }) => {
                log::debug!("Authority issued session {}", token.id);
                Ok(token)
            }
            Ok(LoginResponse {
                error: Some(message),
                ..
            }) => Err(SessionError::CredentialRejected(message)),
            Ok(LoginResponse { .. }) => Err(SessionError::TransportFailure(
                "authority returned neither token nor error".to_string(),
            )),
            Err(Error::Api(ApiError::Status { status, body })) if (400..500).contains(&status) => {
                let message = if body.trim().is_empty() {
                    format!("authority rejected the login with status {}", status)
                } else {
                    body
                };
                Err(SessionError::CredentialRejected(message))
            }
            Err(e) => Err(SessionError::TransportFailure(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::client::{MockAuthority, MockFailure};
    use crate::session::codec;

    #[tokio::test]
    async fn test_login_success_then_encode_and_decode() {
        let expires_at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let mock = MockAuthority::new()
            .with_login_response(LoginResponse {
                token: Some(Token {
                    id: 7,
                    content: "xyz".to_string(),
                    expires_at,
                }),
                error: None,
            })
            .await;

        let token = CredentialCheck::new(&mock)
            .login(&Credentials::new("a", "b"))
            .await
            .unwrap();

        assert_eq!(token.id, 7);
        assert_eq!(token.content, "xyz");
        assert_eq!(token.expires_at, expires_at);

        let artifact = codec::encode(&token);
        assert_eq!(artifact, "id=7;content=xyz");

        let request = codec::decode(&artifact).unwrap();
        assert_eq!(request.id, 7);
        assert_eq!(request.client, "xyz");
    }

    #[tokio::test]
    async fn test_login_rejected_with_message() {
        let mock = MockAuthority::new();

        let err = CredentialCheck::new(&mock)
            .login(&Credentials::new("admin", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SessionError::CredentialRejected("Invalid username or password!".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_rejected_by_status() {
        let mock = MockAuthority::new()
            .with_failure(MockFailure::Status(
                401,
                "Invalid username or password!".to_string(),
            ))
            .await;

        let err = CredentialCheck::new(&mock)
            .login(&Credentials::new("admin", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SessionError::CredentialRejected("Invalid username or password!".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_rejected_by_status_without_body() {
        let mock = MockAuthority::new()
            .with_failure(MockFailure::Status(403, String::new()))
            .await;

        let err = CredentialCheck::new(&mock)
            .login(&Credentials::new("admin", "wrong"))
            .await
            .unwrap_err();

        match err {
            SessionError::CredentialRejected(message) => assert!(message.contains("403")),
            other => panic!("Expected CredentialRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_network_failure() {
        let mock = MockAuthority::new()
            .with_failure(MockFailure::Network(
                "Failed to connect to authority".to_string(),
            ))
            .await;

        let err = CredentialCheck::new(&mock)
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap_err();

        match err {
            SessionError::TransportFailure(message) => {
                assert!(message.contains("Failed to connect"))
            }
            other => panic!("Expected TransportFailure, got {:?}", other),
        }
        assert_eq!(mock.call_counts().await.login, 1);
    }

    #[tokio::test]
    async fn test_login_server_error_is_transport_failure() {
        let mock = MockAuthority::new()
            .with_failure(MockFailure::Status(500, "db down".to_string()))
            .await;

        let err = CredentialCheck::new(&mock)
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::TransportFailure(_)));
    }

    #[tokio::test]
    async fn test_login_empty_response() {
        let mock = MockAuthority::new()
            .with_login_response(LoginResponse::default())
            .await;

        let err = CredentialCheck::new(&mock)
            .login(&Credentials::new("admin", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::TransportFailure(_)));
    }
}
