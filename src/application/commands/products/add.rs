// src/application/commands/products/add.rs
use super::ProductCommandService;
use crate::application::audit::AuditEventRequest;
use crate::application::dto::ProductActionDto;
use crate::application::error::ApplicationResult;
use crate::domain::audit::content::{ProductFields, encode_product_event};
use crate::domain::audit::kind::AuditKind;
use crate::domain::product::NewProduct;
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct AddProductCommand {
    pub product_no: String,
    pub product_name: String,
    pub manufacturer: String,
    pub batch_no: String,
    pub quantity: i32,
    pub category_id: i32,
    pub mfg_date: Option<NaiveDateTime>,
    pub mfg_expiry_date: Option<NaiveDateTime>,
    /// Acting principal, carried into the audit entry.
    pub username: String,
}

impl AddProductCommand {
    fn audit_fields(&self) -> ProductFields {
        ProductFields {
            product_id: None,
            product_no: self.product_no.clone(),
            product_name: self.product_name.clone(),
            manufacturer: self.manufacturer.clone(),
            batch_no: self.batch_no.clone(),
            quantity: self.quantity,
            category_id: self.category_id,
            mfg_date: self.mfg_date,
            mfg_expiry_date: self.mfg_expiry_date,
        }
    }
}

impl ProductCommandService {
    pub async fn add_product(
        &self,
        command: AddProductCommand,
    ) -> ApplicationResult<ProductActionDto> {
        let new_product = NewProduct {
            product_no: command.product_no.clone(),
            product_name: command.product_name.clone(),
            manufacturer: command.manufacturer.clone(),
            batch_no: command.batch_no.clone(),
            quantity: command.quantity,
            category_id: command.category_id,
            mfg_date: command.mfg_date.map(|d| d.and_utc()),
            mfg_expiry_date: command.mfg_expiry_date.map(|d| d.and_utc()),
            added_on: self.recorder.storage_now(),
        };
        new_product.validate()?;

        if let Some(existing) = self.repo.find_by_identity(&new_product.identity()).await? {
            let content = encode_product_event(
                AuditKind::AddProduct.failure_tag(),
                &command.audit_fields(),
            );
            let audit_id = self
                .recorder
                .record(AuditEventRequest {
                    kind: AuditKind::AddProduct,
                    content,
                    action_by: command.username,
                    local_date: None,
                })
                .await?;

            return Ok(ProductActionDto::rejected(
                format!(
                    "Product already exists with ProductNo {}, Manufacturer {} and BatchNo {} (ProductId {}).",
                    existing.product_no, existing.manufacturer, existing.batch_no,
                    existing.product_id
                ),
                Some(audit_id),
            ));
        }

        // Content goes in without a ProductId field; the store prefixes the
        // id inside the same transaction that assigns it.
        let content = encode_product_event(
            AuditKind::AddProduct.success_tag(),
            &command.audit_fields(),
        );
        let audit = self.recorder.build_entry(AuditEventRequest {
            kind: AuditKind::AddProduct,
            content,
            action_by: command.username,
            local_date: None,
        })?;

        let (product_id, audit_id) = self.repo.insert_with_audit(new_product, audit).await?;

        Ok(ProductActionDto::succeeded(
            product_id,
            format!("{} added successfully.", command.product_name),
            audit_id,
        ))
    }
}
