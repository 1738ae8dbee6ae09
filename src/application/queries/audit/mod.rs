mod by_product;
mod get;
mod list;
mod service;
mod types;

pub use by_product::ProductHistoryQuery;
pub use list::ListAuditLogsQuery;
pub use service::AuditQueryService;
