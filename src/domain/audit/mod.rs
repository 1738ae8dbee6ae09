pub mod content;
pub mod entity;
pub mod kind;
pub mod repository;
pub mod timestamp;

pub use entity::{AuditLogRecord, AuditTypeRecord, NewAuditLog};
pub use kind::AuditKind;
pub use repository::{AuditLogFilter, AuditLogRepository, DateRange};
