use async_trait::async_trait;

use crate::modules::audit::core::audit_record::{AuditRecord, NewAuditRecord};
use crate::modules::audit::core::ports::AuditTrail;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory::InMemoryDatabase;

#[async_trait]
impl AuditTrail for InMemoryDatabase {
    async fn record(&self, record: NewAuditRecord) -> Result<(), RepositoryError> {
        let mut tables = self.write().await?;
        let id = tables.next_id();
        tables.audit_log.push(AuditRecord {
            id,
            actor_role: record.actor_role,
            actor_name: record.actor_name,
            action: record.action,
            entity_type: record.entity_type,
            entity_id: record.entity_id,
            at: record.at,
        });
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AuditRecord>, RepositoryError> {
        let tables = self.read().await?;
        Ok(tables.audit_log.iter().rev().take(limit).cloned().collect())
    }
}
