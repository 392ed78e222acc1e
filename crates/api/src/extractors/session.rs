//! Current-session extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::sessions::SessionHandle;

/// Session resolved by the session middleware for this request.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession {
    pub id: Uuid,
    pub created: bool,
}

impl From<SessionHandle> for CurrentSession {
    fn from(handle: SessionHandle) -> Self {
        Self {
            id: handle.id,
            created: handle.created,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionHandle>()
            .copied()
            .map(CurrentSession::from)
            .ok_or_else(|| ApiError::Internal("Session middleware not installed".to_string()))
    }
}
