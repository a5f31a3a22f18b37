use async_trait::async_trait;
use rusqlite::params;

use crate::modules::audit::core::audit_record::{AuditRecord, NewAuditRecord};
use crate::modules::audit::core::ports::AuditTrail;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::sqlite::{SqliteDatabase, instant_from_millis};

#[async_trait]
impl AuditTrail for SqliteDatabase {
    async fn record(&self, record: NewAuditRecord) -> Result<(), RepositoryError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO audit_log (actor_role, actor_name, action, entity_type, entity_id, at_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.actor_role,
                    record.actor_name,
                    record.action,
                    record.entity_type,
                    record.entity_id,
                    record.at.timestamp_millis()
                ],
            )
        })
        .await?;
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AuditRecord>, RepositoryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, actor_role, actor_name, action, entity_type, entity_id, at_ms \
                 FROM audit_log ORDER BY id DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], |row| {
                Ok(AuditRecord {
                    id: row.get(0)?,
                    actor_role: row.get(1)?,
                    actor_name: row.get(2)?,
                    action: row.get(3)?,
                    entity_type: row.get(4)?,
                    entity_id: row.get(5)?,
                    at: instant_from_millis(row.get(6)?),
                })
            })?;
            rows.collect()
        })
        .await
    }
}
