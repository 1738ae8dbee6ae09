// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use crate::application::dto::pagination::{PAGE_SIZE, clamp_page, total_pages};
use crate::domain::audit::content::prefix_product_id;
use crate::domain::audit::entity::NewAuditLog;
use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{
    NewProduct, Product, ProductFilter, ProductIdentity, ProductPage,
};
use crate::domain::product::repository::ProductRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    product_id: i32,
    product_no: String,
    product_name: String,
    manufacturer: String,
    batch_no: String,
    quantity: i32,
    category_id: i32,
    category_name: String,
    mfg_date: Option<DateTime<Utc>>,
    mfg_expiry_date: Option<DateTime<Utc>>,
    added_on: Option<DateTime<Utc>>,
    row_version: Option<i32>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            product_no: row.product_no,
            product_name: row.product_name,
            manufacturer: row.manufacturer,
            batch_no: row.batch_no,
            quantity: row.quantity,
            category_id: row.category_id,
            category_name: row.category_name,
            mfg_date: row.mfg_date,
            mfg_expiry_date: row.mfg_expiry_date,
            added_on: row.added_on,
            row_version: row.row_version,
        }
    }
}

const JOINED_COLUMNS: &str = "p.product_id, p.product_no, p.product_name, p.manufacturer, \
                              p.batch_no, p.quantity, p.category_id, \
                              c.category_name AS category_name, p.mfg_date, p.mfg_expiry_date, \
                              p.added_on, p.row_version";

const LIST_CONDITIONS: &str = "($1::text IS NULL OR p.product_no ILIKE '%' || $1 || '%')
       AND ($2::text IS NULL OR p.product_name ILIKE '%' || $2 || '%')
       AND ($3::text IS NULL OR p.manufacturer ILIKE '%' || $3 || '%')
       AND ($4::text IS NULL OR p.batch_no ILIKE '%' || $4 || '%')
       AND ($5::int IS NULL OR p.quantity >= $5)
       AND ($6::int IS NULL OR p.category_id = $6)
       AND ($7::timestamptz IS NULL OR p.mfg_date >= $7)
       AND ($8::timestamptz IS NULL OR p.mfg_date <= $8)
       AND ($9::timestamptz IS NULL OR p.mfg_expiry_date >= $9)
       AND ($10::timestamptz IS NULL OR p.mfg_expiry_date <= $10)";

/// Trail write that shares the caller's transaction, so the audit entry
/// commits or rolls back with the product row it describes.
async fn insert_audit_tx(
    tx: &mut Transaction<'_, Postgres>,
    audit: &NewAuditLog,
    content: &str,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO audit_logs (audit_log_id, audit_type_id, audit_content, action_by, date)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(audit.kind.code())
    .bind(content)
    .bind(&audit.action_by)
    .bind(audit.date)
    .execute(&mut **tx)
    .await?;

    Ok(id)
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list(&self, filter: &ProductFilter, page: i64) -> DomainResult<ProductPage> {
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(1) FROM products p WHERE {LIST_CONDITIONS}"
        ))
        .bind(filter.product_no.as_deref())
        .bind(filter.product_name.as_deref())
        .bind(filter.manufacturer.as_deref())
        .bind(filter.batch_no.as_deref())
        .bind(filter.quantity_at_least)
        .bind(filter.category_id)
        .bind(filter.mfg_date.start)
        .bind(filter.mfg_date.end)
        .bind(filter.mfg_expiry_date.start)
        .bind(filter.mfg_expiry_date.end)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = total_pages(count, PAGE_SIZE);
        let current = clamp_page(Some(page), total);

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM products p
             JOIN categories c ON c.category_id = p.category_id
             WHERE {LIST_CONDITIONS}
             ORDER BY p.product_id ASC
             LIMIT $11 OFFSET $12"
        ))
        .bind(filter.product_no.as_deref())
        .bind(filter.product_name.as_deref())
        .bind(filter.manufacturer.as_deref())
        .bind(filter.batch_no.as_deref())
        .bind(filter.quantity_at_least)
        .bind(filter.category_id)
        .bind(filter.mfg_date.start)
        .bind(filter.mfg_date.end)
        .bind(filter.mfg_expiry_date.start)
        .bind(filter.mfg_expiry_date.end)
        .bind(PAGE_SIZE)
        .bind((current - 1) * PAGE_SIZE)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ProductPage {
            items: rows.into_iter().map(Into::into).collect(),
            current_page: current,
            total_pages: total,
        })
    }

    async fn find_by_id(&self, product_id: i32) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM products p
             JOIN categories c ON c.category_id = p.category_id
             WHERE p.product_id = $1"
        ))
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_identity(
        &self,
        identity: &ProductIdentity,
    ) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM products p
             JOIN categories c ON c.category_id = p.category_id
             WHERE p.product_no = $1 AND p.manufacturer = $2 AND p.batch_no = $3"
        ))
        .bind(&identity.product_no)
        .bind(&identity.manufacturer)
        .bind(&identity.batch_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn insert_with_audit(
        &self,
        product: NewProduct,
        audit: NewAuditLog,
    ) -> DomainResult<(i32, Uuid)> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let product_id: i32 = sqlx::query_scalar(
            "INSERT INTO products (product_no, product_name, manufacturer, batch_no, quantity,
                                   category_id, mfg_date, mfg_expiry_date, added_on, row_version)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 1)
             RETURNING product_id",
        )
        .bind(&product.product_no)
        .bind(&product.product_name)
        .bind(&product.manufacturer)
        .bind(&product.batch_no)
        .bind(product.quantity)
        .bind(product.category_id)
        .bind(product.mfg_date)
        .bind(product.mfg_expiry_date)
        .bind(product.added_on)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let content = prefix_product_id(&audit.content, product_id);
        let audit_id = insert_audit_tx(&mut tx, &audit, &content)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok((product_id, audit_id))
    }

    async fn update_with_audit(
        &self,
        product: Product,
        audit: NewAuditLog,
    ) -> DomainResult<Uuid> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query(
            "UPDATE products
             SET product_no = $2, product_name = $3, manufacturer = $4, batch_no = $5,
                 quantity = $6, category_id = $7, mfg_date = $8, mfg_expiry_date = $9,
                 row_version = $10
             WHERE product_id = $1",
        )
        .bind(product.product_id)
        .bind(&product.product_no)
        .bind(&product.product_name)
        .bind(&product.manufacturer)
        .bind(&product.batch_no)
        .bind(product.quantity)
        .bind(product.category_id)
        .bind(product.mfg_date)
        .bind(product.mfg_expiry_date)
        .bind(product.row_version)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let audit_id = insert_audit_tx(&mut tx, &audit, &audit.content)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok(audit_id)
    }

    async fn delete_with_audit(
        &self,
        product_id: i32,
        audit: NewAuditLog,
    ) -> DomainResult<Uuid> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let audit_id = insert_audit_tx(&mut tx, &audit, &audit.content)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok(audit_id)
    }
}
