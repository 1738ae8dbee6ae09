// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::application::audit::AuditEventRequest;
use crate::application::dto::ProductActionDto;
use crate::application::error::ApplicationResult;
use crate::domain::audit::content::{ProductFields, encode_product_event};
use crate::domain::audit::kind::AuditKind;
use crate::domain::product::Product;

#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub product_id: i32,
    pub username: String,
}

fn snapshot_fields(product: &Product) -> ProductFields {
    ProductFields {
        product_id: Some(product.product_id),
        product_no: product.product_no.clone(),
        product_name: product.product_name.clone(),
        manufacturer: product.manufacturer.clone(),
        batch_no: product.batch_no.clone(),
        quantity: product.quantity,
        category_id: product.category_id,
        mfg_date: product.mfg_date.map(|d| d.naive_utc()),
        mfg_expiry_date: product.mfg_expiry_date.map(|d| d.naive_utc()),
    }
}

impl ProductCommandService {
    pub async fn delete_product(
        &self,
        command: DeleteProductCommand,
    ) -> ApplicationResult<ProductActionDto> {
        let Some(product) = self.repo.find_by_id(command.product_id).await? else {
            let audit_id = self
                .recorder
                .record(AuditEventRequest {
                    kind: AuditKind::DeleteProduct,
                    content: format!(
                        "[{}]ProductId:{}",
                        AuditKind::DeleteProduct.failure_tag(),
                        command.product_id
                    ),
                    action_by: command.username,
                    local_date: None,
                })
                .await?;

            return Ok(ProductActionDto::rejected(
                format!("Product {} not found.", command.product_id),
                Some(audit_id),
            ));
        };

        // The content snapshots the row being removed; after the delete
        // commits this text is the only surviving record of it.
        let content = encode_product_event(
            AuditKind::DeleteProduct.success_tag(),
            &snapshot_fields(&product),
        );
        let audit = self.recorder.build_entry(AuditEventRequest {
            kind: AuditKind::DeleteProduct,
            content,
            action_by: command.username,
            local_date: None,
        })?;

        let audit_id = self
            .repo
            .delete_with_audit(command.product_id, audit)
            .await?;

        Ok(ProductActionDto::succeeded(
            command.product_id,
            format!("{} deleted successfully.", product.product_name),
            audit_id,
        ))
    }
}
