// src/application/audit/recorder.rs
//
// The single write entry point for the audit trail. Every mutating flow in
// the system records through here, synchronously and on the caller's path: a
// slow or failing store is felt by the business operation, and in exchange
// the trail has no silent gaps. A failed insert propagates to the caller for
// the same reason.
use crate::application::error::ApplicationResult;
use crate::application::ports::time::Clock;
use crate::domain::audit::entity::NewAuditLog;
use crate::domain::audit::kind::AuditKind;
use crate::domain::audit::repository::AuditLogRepository;
use crate::domain::audit::timestamp;
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AuditEventRequest {
    pub kind: AuditKind,
    pub content: String,
    pub action_by: String,
    /// Wall-clock time in the display zone. `None` records "now".
    pub local_date: Option<NaiveDateTime>,
}

pub struct AuditRecorder {
    repo: Arc<dyn AuditLogRepository>,
    clock: Arc<dyn Clock>,
    display_tz: Tz,
    local_offset_hours: i64,
}

impl AuditRecorder {
    pub fn new(
        repo: Arc<dyn AuditLogRepository>,
        clock: Arc<dyn Clock>,
        display_tz: Tz,
        local_offset_hours: i64,
    ) -> Self {
        Self {
            repo,
            clock,
            display_tz,
            local_offset_hours,
        }
    }

    /// Record one event and return the new entry's id. Runs inside whatever
    /// connection the repository hands out; callers that need the entry to
    /// survive their own rollback (failure audits) invoke this after rolling
    /// back, as an independent write.
    pub async fn record(&self, request: AuditEventRequest) -> ApplicationResult<Uuid> {
        let log = self.build_entry(request)?;
        let id = self.repo.insert(log).await?;
        Ok(id)
    }

    /// Assemble the entry without persisting it. Used by flows that couple
    /// the success audit to their own transaction via the product store.
    pub fn build_entry(&self, request: AuditEventRequest) -> ApplicationResult<NewAuditLog> {
        let date = request
            .local_date
            .map_or_else(|| self.storage_now(), |local| self.storage_instant(local));

        let log = NewAuditLog::new(request.kind, request.content, request.action_by, date)?;
        Ok(log)
    }

    /// The stored instant for a caller-supplied local wall clock.
    pub fn storage_instant(&self, local: NaiveDateTime) -> DateTime<Utc> {
        timestamp::to_storage_instant(local, self.local_offset_hours)
    }

    /// The stored instant for "now".
    pub fn storage_now(&self) -> DateTime<Utc> {
        let wall = timestamp::local_wall_clock(self.clock.now(), self.display_tz);
        self.storage_instant(wall)
    }

    pub const fn display_tz(&self) -> Tz {
        self.display_tz
    }
}
