use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::AuthUser;

/// Extractor that hands the gate's `AuthUser` to a handler.
/// Assumes the token gate already inserted it into request.extensions().
/// Missing means the gate is not mounted on this route, so respond 401.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AppError::MissingToken)
    }
}
