//! Bearer-token extraction for axum handlers.
//! Used by: handlers::session.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::TokenError;
use crate::state::AppState;
use crate::token::claims::Claims;

/// Claims of the caller, verified from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct SessionUser(pub Claims);

pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = TokenError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(TokenError::invalid)?;

        state.tokens.verify(token).map(SessionUser)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::http::Request;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::error::Result;
    use crate::state::build_test_state;
    use crate::token::sign::sign_claims;

    pub(crate) fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/auth/session");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        let (parts, _) = builder.body(()).expect("request").into_parts();
        parts
    }

    #[test]
    fn bearer_scheme_parsed() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer  abc "), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer   "), None);
    }

    #[tokio::test]
    async fn valid_bearer_yields_claims() -> Result<()> {
        let state = build_test_state("extractor-secret");
        let token = state.tokens.create("user@example.com", "kakao-3")?;
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
        let SessionUser(claims) = SessionUser::from_request_parts(&mut parts, &state).await?;
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.social_id, "kakao-3");
        Ok(())
    }

    #[tokio::test]
    async fn missing_header_is_invalid() {
        let state = build_test_state("extractor-secret");
        let mut parts = parts_with_auth(None);
        let result = SessionUser::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.err(), Some(TokenError::invalid()));
    }

    #[tokio::test]
    async fn wrong_scheme_is_invalid() -> Result<()> {
        let state = build_test_state("extractor-secret");
        let token = state.tokens.create("a@b.c", "s")?;
        let mut parts = parts_with_auth(Some(&format!("Token {token}")));
        let result = SessionUser::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.err(), Some(TokenError::invalid()));
        Ok(())
    }

    #[tokio::test]
    async fn expired_bearer_is_expired() -> Result<()> {
        let state = build_test_state("extractor-secret");
        let claims = Claims::issued_at("a@b.c", "s", Utc::now() - Duration::days(40));
        let token = sign_claims(&claims, state.tokens.secret())?;
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
        let result = SessionUser::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.err(), Some(TokenError::expired()));
        Ok(())
    }
}
