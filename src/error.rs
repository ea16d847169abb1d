//! Error types for session token issuance and verification.
//! Used by: config, token, auth, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const EXPIRED_MESSAGE: &str = "토큰이 만료되었습니다";
pub const INVALID_MESSAGE: &str = "유효하지 않은 토큰입니다";

/// Why a token was rejected. Callers branch on the variant; the message is
/// meant for the end user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Signature checked out but the `exp` claim is in the past.
    #[error("{message}")]
    Expired { message: String },

    /// Anything else: bad signature, malformed token, missing claims, wrong algorithm.
    #[error("{message}")]
    Invalid { message: String },
}

impl TokenError {
    pub fn expired() -> Self {
        Self::Expired { message: EXPIRED_MESSAGE.into() }
    }

    pub fn invalid() -> Self {
        Self::Invalid { message: INVALID_MESSAGE.into() }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Expired { message } | Self::Invalid { message } => message,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::Invalid { .. } => "TOKEN_INVALID",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::expired(),
            _ => Self::invalid(),
        }
    }
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message(), "code": self.code() });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] jsonwebtoken::errors::Error),

    #[error("JWT_SECRET_KEY is not set and the development default is disabled")]
    MissingSecret,

    #[error("JWT_SECRET_KEY is not valid UTF-8")]
    MalformedSecret,

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Token(e) => e.into_response(),
            Error::Encoding(_) | Error::MissingSecret | Error::MalformedSecret => {
                tracing::error!(error = %self, "session token failure");
                let body = json!({ "error": "internal error", "code": "INTERNAL" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
