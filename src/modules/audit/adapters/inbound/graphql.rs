use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::SecondsFormat;

use crate::modules::audit::core::audit_record::AuditRecord;
use crate::shell::graphql::{caller, gql_error};

#[derive(SimpleObject, Clone)]
pub struct GqlAuditRecord {
    pub id: i64,
    pub actor_role: String,
    pub actor_name: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub at: String,
}

impl From<AuditRecord> for GqlAuditRecord {
    fn from(r: AuditRecord) -> Self {
        Self {
            id: r.id,
            actor_role: r.actor_role,
            actor_name: r.actor_name,
            action: r.action,
            entity_type: r.entity_type,
            entity_id: r.entity_id,
            at: r.at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(Default)]
pub struct AuditQuery;

#[Object]
impl AuditQuery {
    async fn audit_log(
        &self,
        context: &Context<'_>,
        limit: Option<i32>,
    ) -> GqlResult<Vec<GqlAuditRecord>> {
        let (state, actor) = caller(context)?;
        let limit = limit.map(|limit| usize::try_from(limit).unwrap_or(0));
        let records = state
            .list_audit_records
            .handle(actor, limit)
            .await
            .map_err(gql_error)?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
