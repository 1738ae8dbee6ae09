// src/domain/audit/repository.rs
use crate::domain::audit::entity::{AuditLogRecord, AuditTypeRecord, NewAuditLog};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Inclusive date-range filter. Absent bounds mean unbounded; no sentinel
/// min/max constants are involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Optional, AND-combined listing filters. Matching runs against the raw
/// stored values, never against display-formatted strings.
#[derive(Debug, Clone, Default)]
pub struct AuditLogFilter {
    /// Partial case-insensitive match on the stringified log id.
    pub id_contains: Option<String>,
    /// Exact match on the audit type code.
    pub type_id: Option<i32>,
    /// Partial case-insensitive match on the acting principal.
    pub action_by_contains: Option<String>,
    pub date_range: DateRange,
}

/// A page of joined audit rows together with the clamped page number and the
/// total page count (never below 1).
#[derive(Debug, Clone)]
pub struct AuditLogPage {
    pub items: Vec<AuditLogRecord>,
    pub current_page: i64,
    pub total_pages: i64,
}

/// Append-only store for audit entries. No update or delete operations
/// exist; rows only disappear through the `audit_types` FK cascade, which is
/// never exercised operationally.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Persist a new entry and return its assigned id.
    async fn insert(&self, log: NewAuditLog) -> DomainResult<Uuid>;

    /// Filtered, date-descending listing with a fixed page size of 10.
    async fn list(&self, filter: &AuditLogFilter, page: i64) -> DomainResult<AuditLogPage>;

    /// `None` for an unknown id; read paths never error on missing rows.
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<AuditLogRecord>>;

    /// AddProduct/EditProduct entries for one product within a calendar
    /// year, ascending by date. Product membership is decided by the
    /// explicit `ProductId:<id>` content token.
    async fn find_by_product_year(
        &self,
        product_id: i32,
        year: i32,
    ) -> DomainResult<Vec<AuditLogRecord>>;

    async fn list_types(&self) -> DomainResult<Vec<AuditTypeRecord>>;
}
