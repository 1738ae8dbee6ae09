// src/application/commands/products/edit.rs
use super::ProductCommandService;
use crate::application::audit::AuditEventRequest;
use crate::application::dto::ProductActionDto;
use crate::application::error::ApplicationResult;
use crate::domain::audit::content::{ProductFields, encode_product_event};
use crate::domain::audit::kind::AuditKind;
use crate::domain::product::Product;
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct EditProductCommand {
    pub product_id: i32,
    pub product_no: String,
    pub product_name: String,
    pub manufacturer: String,
    pub batch_no: String,
    pub quantity: i32,
    pub category_id: i32,
    pub mfg_date: Option<NaiveDateTime>,
    pub mfg_expiry_date: Option<NaiveDateTime>,
    pub username: String,
}

impl EditProductCommand {
    fn audit_fields(&self) -> ProductFields {
        ProductFields {
            product_id: Some(self.product_id),
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
    pub async fn edit_product(
        &self,
        command: EditProductCommand,
    ) -> ApplicationResult<ProductActionDto> {
        let Some(existing) = self.repo.find_by_id(command.product_id).await? else {
            let content = encode_product_event(
                AuditKind::EditProduct.failure_tag(),
                &command.audit_fields(),
            );
            let audit_id = self
                .recorder
                .record(AuditEventRequest {
                    kind: AuditKind::EditProduct,
                    content,
                    action_by: command.username,
                    local_date: None,
                })
                .await?;

            return Ok(ProductActionDto::rejected(
                format!("Product {} not found.", command.product_id),
                Some(audit_id),
            ));
        };

        let content = encode_product_event(
            AuditKind::EditProduct.success_tag(),
            &command.audit_fields(),
        );
        let audit = self.recorder.build_entry(AuditEventRequest {
            kind: AuditKind::EditProduct,
            content,
            action_by: command.username,
            local_date: None,
        })?;

        let updated = Product {
            product_id: existing.product_id,
            product_no: command.product_no,
            product_name: command.product_name.clone(),
            manufacturer: command.manufacturer,
            batch_no: command.batch_no,
            quantity: command.quantity,
            category_id: command.category_id,
            category_name: existing.category_name,
            mfg_date: command.mfg_date.map(|d| d.and_utc()),
            mfg_expiry_date: command.mfg_expiry_date.map(|d| d.and_utc()),
            added_on: existing.added_on,
            row_version: Some(existing.row_version.unwrap_or(0) + 1),
        };

        let audit_id = self.repo.update_with_audit(updated, audit).await?;

        Ok(ProductActionDto::succeeded(
            command.product_id,
            format!("{} updated successfully.", command.product_name),
            audit_id,
        ))
    }
}
