//! Session token creation, signing, and verification.
//! Used by: crate root, state, auth.

pub mod claims;
pub mod sign;
pub mod verify;

use crate::config::Secret;
use crate::error::{Result, TokenError};
use claims::Claims;

/// Issuer and verifier bound to a secret resolved once, typically at startup.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    secret: Secret,
}

impl SessionTokens {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Secret::resolve()?))
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Signs `email` and `social_id` into a token that expires in 30 days.
    pub fn create(&self, email: &str, social_id: &str) -> Result<String> {
        sign::sign_claims(&Claims::new(email, social_id), &self.secret)
    }

    pub fn verify(&self, token: &str) -> std::result::Result<Claims, TokenError> {
        verify::decode_claims(token, &self.secret)
    }
}
