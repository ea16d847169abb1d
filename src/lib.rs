//! Signed session tokens binding an email to a social-login identifier.
//!
//! Tokens are HS256 JWTs carrying `email`, `social_id` and `exp` claims and
//! expire 30 days after issuance. The signing secret comes from
//! `JWT_SECRET_KEY`; see [`config`] for the fallback rules.
//!
//! [`create_token`] and [`verify_token`] resolve the secret on every call.
//! Long-running services should resolve it once with
//! [`SessionTokens::from_env`] instead.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod token;

pub use config::Secret;
pub use error::{Error, Result, TokenError};
pub use token::claims::Claims;
pub use token::SessionTokens;

/// Issues a session token for `email` and `social_id`.
pub fn create_token(email: &str, social_id: &str) -> Result<String> {
    let secret = Secret::resolve()?;
    token::sign::sign_claims(&Claims::new(email, social_id), &secret)
}

/// Verifies `token` against the current environment secret.
pub fn verify_token(token: &str) -> std::result::Result<Claims, TokenError> {
    let secret = Secret::resolve().map_err(|e| {
        tracing::error!(error = %e, "cannot verify session token without a signing secret");
        TokenError::invalid()
    })?;
    token::verify::decode_claims(token, &secret)
}
