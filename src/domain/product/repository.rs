// src/domain/product/repository.rs
use crate::domain::audit::entity::NewAuditLog;
use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{
    NewProduct, Product, ProductFilter, ProductIdentity, ProductPage,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Product persistence. Mutations take the success-audit entry alongside the
/// row change and write both inside one transaction, so a committed product
/// mutation always has its trail entry and a rolled-back one never does.
/// Failure audits are independent writes issued by the command layer and do
/// not go through these methods.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self, filter: &ProductFilter, page: i64) -> DomainResult<ProductPage>;

    async fn find_by_id(&self, product_id: i32) -> DomainResult<Option<Product>>;

    async fn find_by_identity(&self, identity: &ProductIdentity)
    -> DomainResult<Option<Product>>;

    /// Insert the product and its success audit in one transaction. The
    /// audit content arrives without a `ProductId` field (the id does not
    /// exist yet); the repository prefixes `ProductId:<id>,` once the row is
    /// assigned one. Returns the new product id and the audit entry id.
    async fn insert_with_audit(
        &self,
        product: NewProduct,
        audit: NewAuditLog,
    ) -> DomainResult<(i32, Uuid)>;

    /// Apply a full-row update and its success audit in one transaction.
    async fn update_with_audit(
        &self,
        product: Product,
        audit: NewAuditLog,
    ) -> DomainResult<Uuid>;

    /// Delete the row and write its success audit in one transaction.
    async fn delete_with_audit(&self, product_id: i32, audit: NewAuditLog)
    -> DomainResult<Uuid>;
}
