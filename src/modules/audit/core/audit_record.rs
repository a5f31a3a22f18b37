use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::auth::identity::Identity;

/// One line of the append-only audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub id: i64,
    pub actor_role: String,
    pub actor_name: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditRecord {
    pub actor_role: String,
    pub actor_name: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub at: DateTime<Utc>,
}

impl NewAuditRecord {
    pub fn by(
        actor: &Identity,
        action: &str,
        entity_type: &str,
        entity_id: Option<i64>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            actor_role: actor.role.as_str().to_string(),
            actor_name: actor.name.clone(),
            action: action.to_string(),
            entity_type: entity_type.to_string(),
            entity_id,
            at,
        }
    }
}
