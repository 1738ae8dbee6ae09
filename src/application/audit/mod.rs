pub mod recorder;

pub use recorder::{AuditEventRequest, AuditRecorder};
