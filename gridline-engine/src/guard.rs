//! Access guard for mutating actions.

use crate::error::{EngineError, EngineResult};

/// Gates mutating operations behind a verified/unverified flip-flop.
///
/// When protection is disabled the guard is permanently verified.
/// Verification does not expire; it only flips back through an explicit
/// [`AccessGuard::lock`].
#[derive(Debug, Clone)]
pub struct AccessGuard {
    enabled: bool,
    secret: String,
    verified: bool,
}

impl AccessGuard {
    /// Creates a guard. A disabled guard is always verified.
    pub fn new(enabled: bool, secret: impl Into<String>) -> Self {
        Self {
            enabled,
            secret: secret.into(),
            verified: !enabled,
        }
    }

    /// Whether protection is enabled at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether mutating actions are currently allowed.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Compares the input against the configured secret. A match flips
    /// the guard to verified; a mismatch leaves it unverified and
    /// reports an authentication failure.
    pub fn unlock(&mut self, input: &str) -> EngineResult<()> {
        if !self.enabled || self.verified {
            return Ok(());
        }
        if input == self.secret {
            self.verified = true;
            Ok(())
        } else {
            Err(EngineError::Authentication)
        }
    }

    /// Flips back to unverified. No-op when protection is disabled.
    pub fn lock(&mut self) {
        if self.enabled {
            self.verified = false;
        }
    }

    /// Errors unless mutating actions are currently allowed.
    pub fn ensure_verified(&self) -> EngineResult<()> {
        if self.verified {
            Ok(())
        } else {
            Err(EngineError::Authentication)
        }
    }
}
