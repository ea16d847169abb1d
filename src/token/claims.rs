//! Session claims: email, social login id, expiry.
//! Used by: token::sign, token::verify, handlers::session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const SESSION_TTL_DAYS: i64 = 30;

pub fn session_ttl() -> Duration {
    Duration::days(SESSION_TTL_DAYS)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
    pub social_id: String,
    /// Seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    pub fn new(email: impl Into<String>, social_id: impl Into<String>) -> Self {
        Self::issued_at(email, social_id, Utc::now())
    }

    pub fn issued_at(
        email: impl Into<String>,
        social_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            social_id: social_id.into(),
            exp: (now + session_ttl()).timestamp(),
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}
