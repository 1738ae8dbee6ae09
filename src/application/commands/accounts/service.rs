// src/application/commands/accounts/service.rs
use crate::application::audit::{AuditEventRequest, AuditRecorder};
use crate::application::dto::AccountActionDto;
use crate::application::error::ApplicationResult;
use crate::application::ports::identity::IdentityProvider;
use crate::domain::audit::kind::AuditKind;
use std::sync::Arc;

/// Account flows delegate credentials to the identity port and translate its
/// pass/fail outcome into an audit entry plus a structured response. The
/// audit write happens before the response leaves, on the caller's path.
pub struct AccountCommandService {
    pub(super) identity: Arc<dyn IdentityProvider>,
    pub(super) recorder: Arc<AuditRecorder>,
}

impl AccountCommandService {
    pub fn new(identity: Arc<dyn IdentityProvider>, recorder: Arc<AuditRecorder>) -> Self {
        Self { identity, recorder }
    }

    pub async fn logout(&self, username: String) -> ApplicationResult<AccountActionDto> {
        self.recorder
            .record(AuditEventRequest {
                kind: AuditKind::Logout,
                content: "Logout successful".into(),
                action_by: username.clone(),
                local_date: None,
            })
            .await?;

        Ok(AccountActionDto::succeeded(username))
    }

    pub(super) async fn record_account_event(
        &self,
        kind: AuditKind,
        content: impl Into<String>,
        action_by: impl Into<String>,
    ) -> ApplicationResult<()> {
        self.recorder
            .record(AuditEventRequest {
                kind,
                content: content.into(),
                action_by: action_by.into(),
                local_date: None,
            })
            .await?;
        Ok(())
    }
}
