// tests/integration_audit.rs
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use stocktrail::domain::audit::entity::NewAuditLog;
use stocktrail::domain::audit::kind::AuditKind;
use stocktrail::domain::audit::repository::{AuditLogFilter, AuditLogRepository, DateRange};

#[tokio::test]
async fn integration_audit_write_and_read() {
    // Run only when explicitly enabled to avoid requiring Postgres in all environments
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = stocktrail::infrastructure::database::init_pool(&database_url)
        .await
        .expect("init pool");
    stocktrail::infrastructure::database::run_migrations(&pool)
        .await
        .expect("run migrations");

    let repo_impl =
        stocktrail::infrastructure::repositories::PostgresAuditLogRepository::new(pool.clone());
    let repo: Arc<dyn AuditLogRepository> = Arc::new(repo_impl);

    let marker = format!("it-{}", uuid::Uuid::new_v4());
    let base = Utc::now();

    // insert test rows
    let mut ids = Vec::new();
    for i in 0..5i64 {
        let log = NewAuditLog::new(
            AuditKind::Login,
            format!("Login successful - {marker}-{i}"),
            marker.clone(),
            base + Duration::seconds(i),
        )
        .expect("build log");
        ids.push(repo.insert(log).await.expect("insert"));
    }

    // every inserted row is readable by id, joined with its type name
    let first = repo
        .find_by_id(ids[0])
        .await
        .expect("find_by_id")
        .expect("row exists");
    assert_eq!(first.audit_type_id, AuditKind::Login.code());
    assert_eq!(first.audit_type_name, "Login");
    assert_eq!(first.action_by, marker);

    // filtered listing: the marker principal only matches our rows,
    // descending by date
    let filter = AuditLogFilter {
        action_by_contains: Some(marker.clone()),
        ..Default::default()
    };
    let page = repo.list(&filter, 1).await.expect("list");
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(
        page.items.windows(2).all(|w| w[0].date >= w[1].date),
        "expected date-descending order"
    );

    // inclusive date bounds: a range pinned to the middle row keeps it
    let mid = base + Duration::seconds(2);
    let filter = AuditLogFilter {
        action_by_contains: Some(marker.clone()),
        date_range: DateRange {
            start: Some(mid),
            end: Some(mid),
        },
        ..Default::default()
    };
    let page = repo.list(&filter, 1).await.expect("list with range");
    assert_eq!(page.items.len(), 1);

    // a page past the end clamps to the last page instead of coming back empty
    let filter = AuditLogFilter {
        action_by_contains: Some(marker.clone()),
        ..Default::default()
    };
    let page = repo.list(&filter, 99).await.expect("list page 99");
    assert_eq!(page.current_page, 1);
    assert!(!page.items.is_empty());

    // cleanup test rows
    sqlx::query("DELETE FROM audit_logs WHERE action_by = $1")
        .bind(&marker)
        .execute(&pool)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn integration_product_history_by_year() {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = stocktrail::infrastructure::database::init_pool(&database_url)
        .await
        .expect("init pool");
    stocktrail::infrastructure::database::run_migrations(&pool)
        .await
        .expect("run migrations");

    let repo =
        stocktrail::infrastructure::repositories::PostgresAuditLogRepository::new(pool.clone());

    let marker = format!("it-{}", uuid::Uuid::new_v4());
    let now = Utc::now();
    let year = chrono::Datelike::year(&now);

    // product 990001 gets two matching entries plus decoys: a near-miss
    // product id and an excluded kind; the edit is inserted first but dated
    // later, so ordering cannot ride on insertion order
    let rows = [
        (AuditKind::EditProduct, "ProductId:990001,Quantity:25", 60),
        (AuditKind::AddProduct, "ProductId:990001,Quantity:10", 0),
        (AuditKind::AddProduct, "ProductId:9900011,Quantity:99", 30),
        (AuditKind::DeleteProduct, "ProductId:990001,Quantity:0", 90),
    ];
    for (kind, body, offset_secs) in rows {
        let content = format!("[{}]{body}", kind.success_tag());
        let log = NewAuditLog::new(
            kind,
            content,
            marker.clone(),
            now + Duration::seconds(offset_secs),
        )
        .expect("build log");
        repo.insert(log).await.expect("insert");
    }

    let records = repo
        .find_by_product_year(990001, year)
        .await
        .expect("find_by_product_year");
    assert_eq!(records.len(), 2, "expected only the Add/Edit rows for the exact id");
    assert!(records.iter().all(|r| r.audit_content.contains("ProductId:990001,")));
    assert!(
        records.windows(2).all(|w| w[0].date <= w[1].date),
        "expected date-ascending order"
    );
    assert!(records[0].audit_content.contains("Quantity:10"));
    assert!(records[1].audit_content.contains("Quantity:25"));

    let none = repo
        .find_by_product_year(990001, year - 1)
        .await
        .expect("previous year");
    assert!(none.is_empty());

    sqlx::query("DELETE FROM audit_logs WHERE action_by = $1")
        .bind(&marker)
        .execute(&pool)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn integration_product_history_year_follows_stored_utc_instant() {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = stocktrail::infrastructure::database::init_pool(&database_url)
        .await
        .expect("init pool");
    stocktrail::infrastructure::database::run_migrations(&pool)
        .await
        .expect("run migrations");

    let repo =
        stocktrail::infrastructure::repositories::PostgresAuditLogRepository::new(pool.clone());

    let marker = format!("it-{}", uuid::Uuid::new_v4());

    // Two rows a few hours apart straddling a year boundary in UTC. The
    // year filter must split them by the stored instant regardless of the
    // database session's TimeZone setting.
    let late_2024 = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 0).unwrap();
    let early_2025 = Utc.with_ymd_and_hms(2025, 1, 1, 2, 0, 0).unwrap();
    for (date, body) in [
        (late_2024, "ProductId:990003,Quantity:10"),
        (early_2025, "ProductId:990003,Quantity:20"),
    ] {
        let content = format!("[{}]{body}", AuditKind::AddProduct.success_tag());
        let log = NewAuditLog::new(AuditKind::AddProduct, content, marker.clone(), date)
            .expect("build log");
        repo.insert(log).await.expect("insert");
    }

    let in_2024 = repo
        .find_by_product_year(990003, 2024)
        .await
        .expect("year 2024");
    assert_eq!(in_2024.len(), 1);
    assert_eq!(in_2024[0].date, late_2024);

    let in_2025 = repo
        .find_by_product_year(990003, 2025)
        .await
        .expect("year 2025");
    assert_eq!(in_2025.len(), 1);
    assert_eq!(in_2025[0].date, early_2025);

    sqlx::query("DELETE FROM audit_logs WHERE action_by = $1")
        .bind(&marker)
        .execute(&pool)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn integration_removing_an_audit_type_cascades_to_its_logs() {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = stocktrail::infrastructure::database::init_pool(&database_url)
        .await
        .expect("init pool");
    stocktrail::infrastructure::database::run_migrations(&pool)
        .await
        .expect("run migrations");

    // A throwaway type outside the seeded 1..6 range, with two attached
    // entries inserted directly; the registry enum never covers it.
    let type_id = 990i32;
    sqlx::query("INSERT INTO audit_types (audit_type_id, name) VALUES ($1, 'Temporary')")
        .bind(type_id)
        .execute(&pool)
        .await
        .expect("insert type");

    for i in 0..2 {
        sqlx::query(
            "INSERT INTO audit_logs (audit_log_id, audit_type_id, audit_content, action_by, date)
             VALUES ($1, $2, $3, 'cascade-check', CURRENT_TIMESTAMP)",
        )
        .bind(uuid::Uuid::new_v4())
        .bind(type_id)
        .bind(format!("entry {i}"))
        .execute(&pool)
        .await
        .expect("insert log");
    }

    let before: i64 =
        sqlx::query_scalar("SELECT COUNT(1) FROM audit_logs WHERE audit_type_id = $1")
            .bind(type_id)
            .fetch_one(&pool)
            .await
            .expect("count before");
    assert_eq!(before, 2);

    sqlx::query("DELETE FROM audit_types WHERE audit_type_id = $1")
        .bind(type_id)
        .execute(&pool)
        .await
        .expect("delete type");

    let after: i64 =
        sqlx::query_scalar("SELECT COUNT(1) FROM audit_logs WHERE audit_type_id = $1")
            .bind(type_id)
            .fetch_one(&pool)
            .await
            .expect("count after");
    assert_eq!(after, 0, "logs must disappear with their type");
}
