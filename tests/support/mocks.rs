// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use stocktrail::application::ports::identity::{IdentityOutcome, IdentityProvider};
use stocktrail::application::ports::time::Clock;
use stocktrail::application::{ApplicationResult, services::ApplicationServices};
use stocktrail::domain::audit::entity::{AuditLogRecord, AuditTypeRecord, NewAuditLog};
use stocktrail::domain::audit::repository::{AuditLogFilter, AuditLogPage, AuditLogRepository};
use stocktrail::domain::errors::{DomainError, DomainResult};
use stocktrail::domain::product::{
    NewProduct, Product, ProductFilter, ProductIdentity, ProductPage, ProductRepository,
};
use uuid::Uuid;

pub const DISPLAY_TZ: chrono_tz::Tz = chrono_tz::Asia::Singapore;
pub const LOCAL_OFFSET_HOURS: i64 = 8;

/// Deterministic clock pinned to an arbitrary but fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 11, 4, 0, 0).unwrap()
}

/// In-memory audit store: captures inserts and serves pre-seeded records.
#[derive(Default)]
pub struct MockAuditRepo {
    pub inserted: Mutex<Vec<NewAuditLog>>,
    pub records: Vec<AuditLogRecord>,
    pub types: Vec<AuditTypeRecord>,
}

#[async_trait]
impl AuditLogRepository for MockAuditRepo {
    async fn insert(&self, log: NewAuditLog) -> DomainResult<Uuid> {
        self.inserted.lock().unwrap().push(log);
        Ok(Uuid::new_v4())
    }

    async fn list(&self, _filter: &AuditLogFilter, page: i64) -> DomainResult<AuditLogPage> {
        Ok(AuditLogPage {
            items: self.records.clone(),
            current_page: page.max(1),
            total_pages: 1,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<AuditLogRecord>> {
        Ok(self.records.iter().find(|r| r.audit_log_id == id).cloned())
    }

    async fn find_by_product_year(
        &self,
        _product_id: i32,
        _year: i32,
    ) -> DomainResult<Vec<AuditLogRecord>> {
        Ok(self.records.clone())
    }

    async fn list_types(&self) -> DomainResult<Vec<AuditTypeRecord>> {
        Ok(self.types.clone())
    }
}

/// In-memory product store. Seed `existing` to simulate rows already in the
/// table; combined mutations capture the audit entry they were handed.
#[derive(Default)]
pub struct MockProductRepo {
    pub existing: Vec<Product>,
    pub combined_audits: Mutex<Vec<NewAuditLog>>,
    pub next_product_id: i32,
}

#[async_trait]
impl ProductRepository for MockProductRepo {
    async fn list(&self, _filter: &ProductFilter, page: i64) -> DomainResult<ProductPage> {
        Ok(ProductPage {
            items: self.existing.clone(),
            current_page: page.max(1),
            total_pages: 1,
        })
    }

    async fn find_by_id(&self, product_id: i32) -> DomainResult<Option<Product>> {
        Ok(self
            .existing
            .iter()
            .find(|p| p.product_id == product_id)
            .cloned())
    }

    async fn find_by_identity(
        &self,
        identity: &ProductIdentity,
    ) -> DomainResult<Option<Product>> {
        Ok(self
            .existing
            .iter()
            .find(|p| {
                p.product_no == identity.product_no
                    && p.manufacturer == identity.manufacturer
                    && p.batch_no == identity.batch_no
            })
            .cloned())
    }

    async fn insert_with_audit(
        &self,
        _product: NewProduct,
        audit: NewAuditLog,
    ) -> DomainResult<(i32, Uuid)> {
        self.combined_audits.lock().unwrap().push(audit);
        Ok((self.next_product_id, Uuid::new_v4()))
    }

    async fn update_with_audit(&self, product: Product, audit: NewAuditLog) -> DomainResult<Uuid> {
        if !self.existing.iter().any(|p| p.product_id == product.product_id) {
            return Err(DomainError::NotFound("product".into()));
        }
        self.combined_audits.lock().unwrap().push(audit);
        Ok(Uuid::new_v4())
    }

    async fn delete_with_audit(&self, product_id: i32, audit: NewAuditLog) -> DomainResult<Uuid> {
        if !self.existing.iter().any(|p| p.product_id == product_id) {
            return Err(DomainError::NotFound("product".into()));
        }
        self.combined_audits.lock().unwrap().push(audit);
        Ok(Uuid::new_v4())
    }
}

/// Identity stub returning a canned outcome for every call.
pub struct StubIdentity(pub IdentityOutcome);

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn register(
        &self,
        _username: &str,
        _password: &str,
    ) -> ApplicationResult<IdentityOutcome> {
        Ok(self.0.clone())
    }

    async fn authenticate(
        &self,
        _username: &str,
        _password: &str,
    ) -> ApplicationResult<IdentityOutcome> {
        Ok(self.0.clone())
    }
}

pub fn sample_product(product_id: i32) -> Product {
    Product {
        product_id,
        product_no: "BEV-001".into(),
        product_name: "Sparkling Water".into(),
        manufacturer: "Acme".into(),
        batch_no: "B42".into(),
        quantity: 120,
        category_id: 2,
        category_name: "Beverage".into(),
        mfg_date: None,
        mfg_expiry_date: None,
        added_on: Some(fixed_instant()),
        row_version: Some(1),
    }
}

pub fn audit_record(
    id: Uuid,
    type_id: i32,
    type_name: &str,
    content: &str,
    date: DateTime<Utc>,
) -> AuditLogRecord {
    AuditLogRecord {
        audit_log_id: id,
        audit_type_id: type_id,
        audit_type_name: type_name.into(),
        audit_content: content.into(),
        action_by: "admin".into(),
        date,
    }
}

/// Wire the full service graph on top of the supplied mocks.
pub fn make_services(
    audit_repo: Arc<MockAuditRepo>,
    product_repo: Arc<MockProductRepo>,
    identity: Arc<dyn IdentityProvider>,
) -> ApplicationServices {
    ApplicationServices::new(
        audit_repo,
        product_repo,
        Arc::new(NoCategoryRepo),
        identity,
        Arc::new(FixedClock(fixed_instant())),
        DISPLAY_TZ,
        LOCAL_OFFSET_HOURS,
    )
}

/// Category store stub for tests that never touch categories.
pub struct NoCategoryRepo;

#[async_trait]
impl stocktrail::domain::category::CategoryRepository for NoCategoryRepo {
    async fn list(&self) -> DomainResult<Vec<stocktrail::domain::category::Category>> {
        Ok(vec![])
    }

    async fn insert(
        &self,
        new: stocktrail::domain::category::NewCategory,
    ) -> DomainResult<stocktrail::domain::category::Category> {
        let _ = new;
        Err(DomainError::Persistence("not implemented".into()))
    }

    async fn delete(&self, _category_id: i32) -> DomainResult<bool> {
        Ok(false)
    }
}
