// src/application/dto/audit.rs
use crate::domain::audit::entity::AuditTypeRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One audit entry as handed to the transport layer: type name joined in,
/// timestamp already display-formatted. Construction happens in the audit
/// query service, which owns the time formatting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditLogDto {
    pub audit_log_id: Uuid,
    pub audit_type_id: i32,
    pub audit_type_name: String,
    pub audit_content: String,
    pub action_by: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditTypeDto {
    pub audit_type_id: i32,
    pub name: String,
}

impl From<AuditTypeRecord> for AuditTypeDto {
    fn from(record: AuditTypeRecord) -> Self {
        Self {
            audit_type_id: record.audit_type_id,
            name: record.name,
        }
    }
}

/// One point of the quantity-over-time series for a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductQuantityPointDto {
    pub quantity: i32,
    pub date: String,
}
