// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        audit::AuditRecorder,
        commands::{
            accounts::AccountCommandService, categories::CategoryCommandService,
            products::ProductCommandService,
        },
        ports::{identity::IdentityProvider, time::Clock},
        queries::{
            audit::AuditQueryService, categories::CategoryQueryService,
            products::ProductQueryService,
        },
    },
    domain::{
        audit::repository::AuditLogRepository, category::CategoryRepository,
        product::ProductRepository,
    },
};
use chrono_tz::Tz;

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub product_commands: Arc<ProductCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub audit_queries: Arc<AuditQueryService>,
    pub product_queries: Arc<ProductQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    audit_recorder: Arc<AuditRecorder>,
}

impl ApplicationServices {
    pub fn new(
        audit_repo: Arc<dyn AuditLogRepository>,
        product_repo: Arc<dyn ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        identity: Arc<dyn IdentityProvider>,
        clock: Arc<dyn Clock>,
        display_tz: Tz,
        local_offset_hours: i64,
    ) -> Self {
        let audit_recorder = Arc::new(AuditRecorder::new(
            Arc::clone(&audit_repo),
            Arc::clone(&clock),
            display_tz,
            local_offset_hours,
        ));

        let account_commands = Arc::new(AccountCommandService::new(
            identity,
            Arc::clone(&audit_recorder),
        ));
        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_repo),
            Arc::clone(&audit_recorder),
        ));
        let category_commands = Arc::new(CategoryCommandService::new(Arc::clone(&category_repo)));

        let audit_queries = Arc::new(AuditQueryService::new(
            Arc::clone(&audit_repo),
            Arc::clone(&clock),
            display_tz,
        ));
        let product_queries = Arc::new(ProductQueryService::new(Arc::clone(&product_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(category_repo));

        Self {
            account_commands,
            product_commands,
            category_commands,
            audit_queries,
            product_queries,
            category_queries,
            audit_recorder,
        }
    }

    /// The facade collaborators call to append trail entries directly, e.g.
    /// the create endpoint exposed to other backend services.
    pub fn audit_recorder(&self) -> Arc<AuditRecorder> {
        Arc::clone(&self.audit_recorder)
    }
}
