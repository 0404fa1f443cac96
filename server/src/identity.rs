use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use error_stack::Report;
use kernel::KernelError;
use uuid::Uuid;

use crate::error::ErrorStatus;

static USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Authentication happens upstream; the proxy
/// forwards the verified account id in `x-user-id`.
pub struct Identity(pub Uuid);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Identity {
    type Rejection = ErrorStatus;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .map(Identity)
            .ok_or_else(|| ErrorStatus::from(Report::new(KernelError::Unauthorized)))
    }
}
