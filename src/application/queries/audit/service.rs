// src/application/queries/audit/service.rs
use crate::application::dto::AuditLogDto;
use crate::application::ports::time::Clock;
use crate::domain::audit::entity::AuditLogRecord;
use crate::domain::audit::repository::AuditLogRepository;
use crate::domain::audit::timestamp;
use chrono_tz::Tz;
use std::sync::Arc;

/// Read side of the audit trail: joins type names, converts stored instants
/// into the display zone and runs content through the codec where the kind
/// calls for it.
pub struct AuditQueryService {
    pub(super) repo: Arc<dyn AuditLogRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) display_tz: Tz,
}

impl AuditQueryService {
    pub fn new(repo: Arc<dyn AuditLogRepository>, clock: Arc<dyn Clock>, display_tz: Tz) -> Self {
        Self {
            repo,
            clock,
            display_tz,
        }
    }

    pub(super) fn to_dto(&self, record: AuditLogRecord) -> AuditLogDto {
        AuditLogDto {
            audit_log_id: record.audit_log_id,
            audit_type_id: record.audit_type_id,
            audit_type_name: record.audit_type_name,
            audit_content: record.audit_content,
            action_by: record.action_by,
            date: timestamp::to_display_string(record.date, self.display_tz),
        }
    }
}
