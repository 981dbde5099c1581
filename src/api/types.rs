//! Shared types for the HTTP layer.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::error::ApiError;
use crate::app_state::AppState;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub state: Arc<AppState>,
}

impl ApiContext {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

/// Parse a path segment as a UUID.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid ID format: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(parse_id("abc"), Err(ApiError::BadRequest(_))));
    }
}
