// src/application/queries/audit/types.rs
use super::AuditQueryService;
use crate::application::dto::AuditTypeDto;
use crate::application::error::ApplicationResult;

impl AuditQueryService {
    /// All audit types, unfiltered. Feeds filter dropdowns.
    pub async fn get_audit_types(&self) -> ApplicationResult<Vec<AuditTypeDto>> {
        let types = self.repo.list_types().await?;
        Ok(types.into_iter().map(Into::into).collect())
    }
}
