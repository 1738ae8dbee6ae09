// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::application::dto::pagination::{PAGE_SIZE, clamp_page, total_pages};
use crate::domain::audit::entity::{AuditLogRecord, AuditTypeRecord, NewAuditLog};
use crate::domain::audit::kind::AuditKind;
use crate::domain::audit::repository::{AuditLogFilter, AuditLogPage, AuditLogRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    audit_log_id: Uuid,
    audit_type_id: i32,
    audit_type_name: String,
    audit_content: String,
    action_by: String,
    date: DateTime<Utc>,
}

impl From<AuditLogRow> for AuditLogRecord {
    fn from(row: AuditLogRow) -> Self {
        Self {
            audit_log_id: row.audit_log_id,
            audit_type_id: row.audit_type_id,
            audit_type_name: row.audit_type_name,
            audit_content: row.audit_content,
            action_by: row.action_by,
            date: row.date,
        }
    }
}

const JOINED_COLUMNS: &str = "l.audit_log_id, l.audit_type_id, t.name AS audit_type_name, \
                              l.audit_content, l.action_by, l.date";

const LIST_CONDITIONS: &str = "($1::text IS NULL OR l.audit_log_id::text ILIKE '%' || $1 || '%')
       AND ($2::int IS NULL OR l.audit_type_id = $2)
       AND ($3::text IS NULL OR l.action_by ILIKE '%' || $3 || '%')
       AND ($4::timestamptz IS NULL OR l.date >= $4)
       AND ($5::timestamptz IS NULL OR l.date <= $5)";

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, log: NewAuditLog) -> DomainResult<Uuid> {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO audit_logs (audit_log_id, audit_type_id, audit_content, action_by, date)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(log.kind.code())
        .bind(&log.content)
        .bind(&log.action_by)
        .bind(log.date)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(id)
    }

    async fn list(&self, filter: &AuditLogFilter, page: i64) -> DomainResult<AuditLogPage> {
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(1)
             FROM audit_logs l
             WHERE {LIST_CONDITIONS}"
        ))
        .bind(filter.id_contains.as_deref())
        .bind(filter.type_id)
        .bind(filter.action_by_contains.as_deref())
        .bind(filter.date_range.start)
        .bind(filter.date_range.end)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = total_pages(count, PAGE_SIZE);
        let current = clamp_page(Some(page), total);

        let rows = sqlx::query_as::<_, AuditLogRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM audit_logs l
             JOIN audit_types t ON t.audit_type_id = l.audit_type_id
             WHERE {LIST_CONDITIONS}
             ORDER BY l.date DESC
             LIMIT $6 OFFSET $7"
        ))
        .bind(filter.id_contains.as_deref())
        .bind(filter.type_id)
        .bind(filter.action_by_contains.as_deref())
        .bind(filter.date_range.start)
        .bind(filter.date_range.end)
        .bind(PAGE_SIZE)
        .bind((current - 1) * PAGE_SIZE)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(AuditLogPage {
            items: rows.into_iter().map(Into::into).collect(),
            current_page: current,
            total_pages: total,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<AuditLogRecord>> {
        let row = sqlx::query_as::<_, AuditLogRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM audit_logs l
             JOIN audit_types t ON t.audit_type_id = l.audit_type_id
             WHERE l.audit_log_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_product_year(
        &self,
        product_id: i32,
        year: i32,
    ) -> DomainResult<Vec<AuditLogRecord>> {
        // Membership is decided by the explicit ProductId token; the field
        // order guarantees a trailing comma after it for product events.
        // Year is taken from the stored UTC instant, not the session zone.
        let rows = sqlx::query_as::<_, AuditLogRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM audit_logs l
             JOIN audit_types t ON t.audit_type_id = l.audit_type_id
             WHERE l.audit_type_id IN ($1, $2)
               AND EXTRACT(YEAR FROM l.date AT TIME ZONE 'UTC')::int = $3
               AND l.audit_content LIKE '%ProductId:' || $4 || ',%'
             ORDER BY l.date ASC"
        ))
        .bind(AuditKind::AddProduct.code())
        .bind(AuditKind::EditProduct.code())
        .bind(year)
        .bind(product_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_types(&self) -> DomainResult<Vec<AuditTypeRecord>> {
        let rows = sqlx::query_as::<_, (i32, String)>(
            "SELECT audit_type_id, name FROM audit_types ORDER BY audit_type_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(audit_type_id, name)| AuditTypeRecord {
                audit_type_id,
                name,
            })
            .collect())
    }
}
