use std::sync::Arc;

use crate::modules::audit::core::audit_record::AuditRecord;
use crate::modules::audit::core::ports::AuditTrail;
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::ApplicationResult;

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 200;

pub struct ListAuditRecordsHandler {
    audit: Arc<dyn AuditTrail>,
}

impl ListAuditRecordsHandler {
    pub fn new(audit: Arc<dyn AuditTrail>) -> Self {
        Self { audit }
    }

    /// Newest first. The limit is clamped to 1..=200, defaulting to 50.
    pub async fn handle(
        &self,
        actor: &Identity,
        limit: Option<usize>,
    ) -> ApplicationResult<Vec<AuditRecord>> {
        actor.ensure_hr()?;
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        Ok(self.audit.recent(limit).await?)
    }
}
