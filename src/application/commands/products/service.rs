// src/application/commands/products/service.rs
use crate::application::audit::AuditRecorder;
use crate::domain::product::ProductRepository;
use std::sync::Arc;

/// Product mutations follow one two-phase pattern: attempt the primary
/// change with its success audit inside a single transaction; when the
/// change is rejected, write a failure audit as an independent commit so the
/// rejection stays observable. The failure entry is therefore never part of
/// the atomic unit it describes.
pub struct ProductCommandService {
    pub(super) repo: Arc<dyn ProductRepository>,
    pub(super) recorder: Arc<AuditRecorder>,
}

impl ProductCommandService {
    pub fn new(repo: Arc<dyn ProductRepository>, recorder: Arc<AuditRecorder>) -> Self {
        Self { repo, recorder }
    }
}
