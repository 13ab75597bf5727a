//! Authority wire models
//!
//! Request and response bodies exchanged with the authority, plus the
//! [`Token`] it issues on a successful credential check.

mod auth;
mod validation;

pub use auth::{Credentials, LoginResponse, Token};
pub use validation::{ValidationRequest, ValidationResult};
