//! HTTP implementation of the authority API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;

use super::{AuthorityApi, Credentials, LoginResponse, ValidationRequest, ValidationResult};
use crate::error::{ApiError, Error, Result};

/// Default authority base URL
pub const DEFAULT_AUTHORITY_URL: &str = "http://127.0.0.1:8080";

const LOGIN_PATH: &str = "/api/login";
const VALIDATE_PATH: &str = "/api/validate";
const EXPIRE_PATH: &str = "/expire";

/// reqwest-backed authority client.
///
/// Holds no session state; every call is an independent request, so a single
/// client can be shared across tasks.
pub struct AuthorityClient {
    http: HttpClient,
    base_url: String,
}

impl AuthorityClient {
    /// Create a client for the authority at `base_url`.
    ///
    /// `timeout` bounds each whole request; an elapsed timeout surfaces as
    /// [`ApiError::Network`].
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and return the response text of a success status
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;
        log::debug!("POST {} -> {}", url, status);

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        Ok(text)
    }
}

#[async_trait]
impl AuthorityApi for AuthorityClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        match self.post_json(LOGIN_PATH, credentials).await {
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                ApiError::InvalidResponse(format!(
                    "Failed to parse login response: {}. Body was: {}",
                    e, text
                ))
                .into()
            }),
            // A rejection may still carry the structured `{ error }` body
            Err(Error::Api(ApiError::Status { status, body })) => {
                match serde_json::from_str::<LoginResponse>(&body) {
                    Ok(parsed) if parsed.error.is_some() => Ok(parsed),
                    _ => Err(ApiError::Status { status, body }.into()),
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationResult> {
        let text = self.post_json(VALIDATE_PATH, request).await?;

        serde_json::from_str(&text).map_err(|_| ApiError::InvalidResponse(text.clone()).into())
    }

    async fn trigger_expiry(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, EXPIRE_PATH);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(())
    }
}
