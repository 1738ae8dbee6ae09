// src/application/queries/audit/get.rs
use super::AuditQueryService;
use crate::application::dto::AuditLogDto;
use crate::application::error::ApplicationResult;
use crate::domain::audit::content::format_content;
use crate::domain::audit::kind::AuditKind;
use uuid::Uuid;

impl AuditQueryService {
    /// Single entry by id, content rendered for display: bracket-tagged
    /// product content becomes one `Key:Value` per line, account free text
    /// passes through. Unknown ids resolve to `None`, not an error.
    pub async fn get_audit_log(&self, id: Uuid) -> ApplicationResult<Option<AuditLogDto>> {
        let Some(record) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let kind = AuditKind::from_code(record.audit_type_id)?;
        let mut dto = self.to_dto(record);
        dto.audit_content = format_content(&dto.audit_content, kind);

        Ok(Some(dto))
    }
}
