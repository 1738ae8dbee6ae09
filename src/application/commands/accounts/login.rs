// src/application/commands/accounts/login.rs
use super::AccountCommandService;
use crate::application::dto::AccountActionDto;
use crate::application::error::ApplicationResult;
use crate::application::ports::identity::IdentityOutcome;
use crate::domain::audit::kind::AuditKind;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl AccountCommandService {
    /// Both outcomes land in the trail; the response never discloses which
    /// half of the credential pair was wrong, only the audit content does.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AccountActionDto> {
        let outcome = self
            .identity
            .authenticate(&command.username, &command.password)
            .await?;

        match outcome {
            IdentityOutcome::Success => {
                self.record_account_event(AuditKind::Login, "Login successful", &command.username)
                    .await?;
                Ok(AccountActionDto::succeeded(command.username))
            }
            IdentityOutcome::InvalidUsername => {
                self.record_account_event(
                    AuditKind::Login,
                    format!("Invalid username - {}", command.username),
                    &command.username,
                )
                .await?;
                Ok(AccountActionDto::failed("Invalid username or password"))
            }
            IdentityOutcome::InvalidPassword => {
                self.record_account_event(
                    AuditKind::Login,
                    format!("Invalid password - {}", command.username),
                    &command.username,
                )
                .await?;
                Ok(AccountActionDto::failed("Invalid username or password"))
            }
            IdentityOutcome::Rejected(reason) => {
                self.record_account_event(
                    AuditKind::Login,
                    format!("Login rejected - {reason}"),
                    &command.username,
                )
                .await?;
                Ok(AccountActionDto::failed(reason))
            }
        }
    }
}
