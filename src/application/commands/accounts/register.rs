// src/application/commands/accounts/register.rs
use super::AccountCommandService;
use crate::application::dto::AccountActionDto;
use crate::application::error::ApplicationResult;
use crate::application::ports::identity::IdentityOutcome;
use crate::domain::audit::kind::AuditKind;

#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl AccountCommandService {
    pub async fn register(&self, command: RegisterCommand) -> ApplicationResult<AccountActionDto> {
        if command.password != command.confirm_password {
            return Ok(AccountActionDto::failed("Passwords do not match"));
        }

        let outcome = self
            .identity
            .register(&command.username, &command.password)
            .await?;

        match outcome {
            IdentityOutcome::Success => {
                self.record_account_event(
                    AuditKind::Register,
                    "Account created successfully",
                    &command.username,
                )
                .await?;
                Ok(AccountActionDto::succeeded(command.username))
            }
            IdentityOutcome::Rejected(reason) => {
                self.record_account_event(
                    AuditKind::Register,
                    format!("Account creation failed - {reason}"),
                    &command.username,
                )
                .await?;
                Ok(AccountActionDto::failed(format!(
                    "Account creation failed! Errors: {reason}"
                )))
            }
            IdentityOutcome::InvalidUsername | IdentityOutcome::InvalidPassword => {
                self.record_account_event(
                    AuditKind::Register,
                    format!("Account creation failed - {}", command.username),
                    &command.username,
                )
                .await?;
                Ok(AccountActionDto::failed("Account creation failed!"))
            }
        }
    }
}
