//! Signing secret resolution from the process environment.
//! Used by: token, state, main.

use std::env::{self, VarError};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

pub const SECRET_ENV: &str = "JWT_SECRET_KEY";
pub const REQUIRE_SECRET_ENV: &str = "JWT_REQUIRE_SECRET";

/// Publicly known development fallback. Anything signed with it can be forged.
pub const DEFAULT_SECRET: &str = "default_secret";

static DEFAULT_SECRET_WARNED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Environment,
    Explicit,
    DevelopmentDefault,
}

/// HMAC key shared by issuance and verification.
#[derive(Clone)]
pub struct Secret {
    bytes: Arc<[u8]>,
    source: SecretSource,
}

impl Secret {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: Arc::from(secret.as_ref()),
            source: SecretSource::Explicit,
        }
    }

    /// Reads `JWT_SECRET_KEY`. When it is unset, falls back to [`DEFAULT_SECRET`]
    /// unless `JWT_REQUIRE_SECRET=true`, in which case resolution fails.
    pub fn resolve() -> Result<Self> {
        match env::var(SECRET_ENV) {
            Ok(value) => Ok(Self {
                bytes: Arc::from(value.into_bytes()),
                source: SecretSource::Environment,
            }),
            Err(VarError::NotUnicode(_)) => Err(Error::MalformedSecret),
            Err(VarError::NotPresent) => {
                if require_secret() {
                    return Err(Error::MissingSecret);
                }
                warn_default_secret();
                Ok(Self {
                    bytes: Arc::from(DEFAULT_SECRET.as_bytes()),
                    source: SecretSource::DevelopmentDefault,
                })
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn source(&self) -> SecretSource {
        self.source
    }

    pub fn is_default(&self) -> bool {
        self.source == SecretSource::DevelopmentDefault
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("bytes", &"***")
            .field("source", &self.source)
            .finish()
    }
}

fn require_secret() -> bool {
    env::var(REQUIRE_SECRET_ENV).map(|v| v == "true").unwrap_or(false)
}

fn warn_default_secret() {
    if !DEFAULT_SECRET_WARNED.swap(true, Ordering::Relaxed) {
        tracing::warn!(
            env = SECRET_ENV,
            "signing session tokens with the public development secret; \
             set {} or {}=true before deploying",
            SECRET_ENV,
            REQUIRE_SECRET_ENV
        );
    }
}

#[cfg(test)]
pub(crate) mod test_env {
    use std::sync::{Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that touch process environment variables.
    pub(crate) fn lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn set(secret: Option<&str>, require: Option<&str>) {
        match secret {
            Some(v) => std::env::set_var(super::SECRET_ENV, v),
            None => std::env::remove_var(super::SECRET_ENV),
        }
        match require {
            Some(v) => std::env::set_var(super::REQUIRE_SECRET_ENV, v),
            None => std::env::remove_var(super::REQUIRE_SECRET_ENV),
        }
    }
}
