// src/domain/audit/entity.rs
use crate::domain::audit::kind::AuditKind;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A pending audit entry. The id is assigned by the store at insert time;
/// entries are immutable once written.
#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub kind: AuditKind,
    pub content: String,
    pub action_by: String,
    pub date: DateTime<Utc>,
}

impl NewAuditLog {
    pub fn new(
        kind: AuditKind,
        content: impl Into<String>,
        action_by: impl Into<String>,
        date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let content = content.into();
        let action_by = action_by.into();

        if content.trim().is_empty() {
            return Err(DomainError::Validation("audit content is required".into()));
        }
        if action_by.trim().is_empty() {
            return Err(DomainError::Validation("action_by is required".into()));
        }

        Ok(Self {
            kind,
            content,
            action_by,
            date,
        })
    }
}

/// A stored audit entry joined with its type's display name.
#[derive(Debug, Clone)]
pub struct AuditLogRecord {
    pub audit_log_id: Uuid,
    pub audit_type_id: i32,
    pub audit_type_name: String,
    pub audit_content: String,
    pub action_by: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AuditTypeRecord {
    pub audit_type_id: i32,
    pub name: String,
}
