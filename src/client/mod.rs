//! Authority API client
//!
//! The authority owns credential verification and the token lifecycle. This
//! module defines the [`AuthorityApi`] boundary and its HTTP implementation;
//! everything else in the crate talks to the authority through the trait.

use async_trait::async_trait;

use crate::error::Result;

pub mod authority;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use authority::AuthorityClient;
#[cfg(test)]
pub use mock::{MockAuthority, MockFailure};
pub use models::{Credentials, LoginResponse, Token, ValidationRequest, ValidationResult};

/// Operations exposed by the authority
#[async_trait]
pub trait AuthorityApi: Send + Sync {
    /// Submit credentials and receive either a token or an error string
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// Ask the authority whether a presented session proof is still valid
    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationResult>;

    /// Ask the authority to schedule deletion of its issued tokens at their expiry
    async fn trigger_expiry(&self) -> Result<()>;
}
