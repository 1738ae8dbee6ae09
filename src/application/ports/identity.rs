// src/application/ports/identity.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Outcome reported by the external identity subsystem. The audit trail only
/// consumes the pass/fail shape and the acting username; credential storage
/// and hashing live behind this port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityOutcome {
    Success,
    InvalidUsername,
    InvalidPassword,
    Rejected(String),
}

impl IdentityOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn register(&self, username: &str, password: &str)
    -> ApplicationResult<IdentityOutcome>;

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<IdentityOutcome>;
}
