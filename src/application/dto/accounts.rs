// src/application/dto/accounts.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured pass/fail outcome of an account operation. Failures are data,
/// not errors: the caller gets the message and the operation is already in
/// the audit trail by the time this is returned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountActionDto {
    pub success: bool,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AccountActionDto {
    pub fn succeeded(username: impl Into<String>) -> Self {
        Self {
            success: true,
            username: username.into(),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            username: String::new(),
            message: Some(message.into()),
        }
    }
}
