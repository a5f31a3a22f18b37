// Request-scoped identity.
//
// Responsibilities
// - Resolve "Authorization: Bearer <token>" into an Identity on every request.
// - Reject missing, malformed, forged and expired tokens with 401.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

/// None when the request carries no credentials at all.
pub fn bearer_identity(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<Option<Identity>, ApplicationError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let token = value
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or(ApplicationError::Unauthorized)?;
    state
        .signer
        .verify(token, state.clock.now())
        .map(Some)
        .map_err(|error| {
            tracing::debug!(%error, "bearer token rejected");
            ApplicationError::Unauthorized
        })
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApplicationError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        bearer_identity(&parts.headers, state)?.ok_or(ApplicationError::Unauthorized)
    }
}
