//! HS256 token verification with a pinned algorithm.
//! Used by: token::SessionTokens, verify_token, auth.

use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::config::Secret;
use crate::error::TokenError;
use crate::token::claims::Claims;
use crate::token::sign::ALGORITHM;

fn validation() -> Validation {
    // Validation::new pins the accepted algorithm list to exactly HS256;
    // the token header is never trusted to pick one.
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);
    validation
}

pub fn decode_claims(token: &str, secret: &Secret) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let data = decode::<Claims>(token, &key, &validation())?;
    Ok(data.claims)
}
