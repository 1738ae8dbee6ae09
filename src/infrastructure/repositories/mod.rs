// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_audit_log;
mod postgres_category;
mod postgres_product;

pub use error::map_sqlx;
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_product::PostgresProductRepository;
