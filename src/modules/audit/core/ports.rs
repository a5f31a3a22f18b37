use async_trait::async_trait;

use crate::modules::audit::core::audit_record::{AuditRecord, NewAuditRecord};
use crate::shared::core::errors::RepositoryError;

#[async_trait]
pub trait AuditTrail: Send + Sync {
    async fn record(&self, record: NewAuditRecord) -> Result<(), RepositoryError>;

    /// Newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<AuditRecord>, RepositoryError>;
}

/// Records without ever failing the caller. A lost audit line is logged, not raised.
pub async fn record_best_effort(trail: &dyn AuditTrail, record: NewAuditRecord) {
    let action = record.action.clone();
    if let Err(error) = trail.record(record).await {
        tracing::warn!(%action, %error, "audit record dropped");
    }
}
