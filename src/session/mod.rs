//! Authentication session protocol
//!
//! - [`CredentialCheck`] - exchanges credentials for a [`Token`](crate::client::Token)
//! - [`codec`] - token <-> session artifact string
//! - [`TokenValidator`](validator::TokenValidator) - asks the authority for a verdict on a decoded artifact
//! - [`RouteGuard`] - allow/deny decision for a protected operation
//!
//! None of these keep state between calls.

pub mod codec;
pub mod guard;
pub mod login;
pub mod store;
pub mod validator;

pub use guard::{Access, RouteGuard};
pub use login::CredentialCheck;
pub use store::SessionStore;
