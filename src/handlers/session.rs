//! Current-session endpoint: echoes the verified bearer token's claims.
//! Used by: server.

use axum::Json;
use serde::Serialize;

use crate::auth::SessionUser;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub email: String,
    pub social_id: String,
    pub exp: i64,
    pub expires_at: Option<String>,
}

pub async fn session(SessionUser(claims): SessionUser) -> Json<SessionResponse> {
    let expires_at = claims.expires_at().map(|t| t.to_rfc3339());
    tracing::debug!(social_id = %claims.social_id, "session verified");
    Json(SessionResponse {
        email: claims.email,
        social_id: claims.social_id,
        exp: claims.exp,
        expires_at,
    })
}
