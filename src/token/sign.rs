//! HS256 token signing.
//! Used by: token::SessionTokens, create_token.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::config::Secret;
use crate::error::Result;
use crate::token::claims::Claims;

pub const ALGORITHM: Algorithm = Algorithm::HS256;

pub fn sign_claims(claims: &Claims, secret: &Secret) -> Result<String> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::new(ALGORITHM), claims, &key)?)
}
