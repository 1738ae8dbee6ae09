// src/application/queries/audit/list.rs
use super::AuditQueryService;
use crate::application::dto::{AuditLogDto, Page};
use crate::application::error::ApplicationResult;
use crate::domain::audit::repository::{AuditLogFilter, DateRange};
use chrono::NaiveDateTime;

/// Listing filters as they arrive from the transport layer. Date bounds are
/// wall-clock values stamped onto the stored timeline unchanged; incoming
/// bounds have always been treated as UTC without conversion.
#[derive(Debug, Clone, Default)]
pub struct ListAuditLogsQuery {
    pub audit_log_id: Option<String>,
    pub audit_type_id: Option<i32>,
    pub action_by: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub page: Option<i64>,
}

impl AuditQueryService {
    pub async fn list_audit_logs(
        &self,
        query: ListAuditLogsQuery,
    ) -> ApplicationResult<Page<AuditLogDto>> {
        let filter = AuditLogFilter {
            id_contains: normalize(query.audit_log_id),
            type_id: query.audit_type_id,
            action_by_contains: normalize(query.action_by),
            date_range: DateRange {
                start: query.start_date.map(|d| d.and_utc()),
                end: query.end_date.map(|d| d.and_utc()),
            },
        };

        let page = self.repo.list(&filter, query.page.unwrap_or(1)).await?;
        let items = page.items.into_iter().map(|r| self.to_dto(r)).collect();

        Ok(Page::new(items, page.current_page, page.total_pages))
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
