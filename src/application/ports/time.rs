// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for audit timestamps. Injected so recorder and query
/// tests can pin the instant instead of sampling the system clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
