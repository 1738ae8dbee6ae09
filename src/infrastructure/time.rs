// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Production clock; every audit entry recorded without an explicit date
/// gets its instant from here.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
