//! Shared application state.

use std::sync::Arc;

use crate::config::Secret;
use crate::error::Result;
use crate::token::SessionTokens;

pub struct AppStateInner {
    pub tokens: SessionTokens,
}

pub type AppState = Arc<AppStateInner>;

struct StateBuilder {
    tokens: SessionTokens,
}

impl StateBuilder {
    fn build(self) -> AppState {
        if self.tokens.secret().is_default() {
            tracing::warn!("session tokens are signed with the development default secret");
        }
        Arc::new(AppStateInner { tokens: self.tokens })
    }
}

pub fn build_state() -> Result<AppState> {
    Ok(StateBuilder {
        tokens: SessionTokens::from_env()?,
    }.build())
}

pub fn build_test_state(secret: &str) -> AppState {
    StateBuilder {
        tokens: SessionTokens::new(Secret::new(secret)),
    }.build()
}
