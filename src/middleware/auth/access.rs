//! Token gate: verify the access token → put AuthUser into extensions
//!
//! - Reads `Authorization: <token>` or `Authorization: Bearer <token>`.
//! - Missing/empty header → 401 "No token provided", nothing is verified.
//! - Any verification failure → 401 "Invalid token"; the cause is never surfaced.
//! - Success → `AuthUser` (decoded claims) is inserted and the next handler runs.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthUser;
use crate::error::AppError;
use crate::services::auth::TokenVerifier;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Put the token gate in front of every route already registered on `router`.
/// Uses `route_layer`, so unmatched paths still 404 instead of 401.
///
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // `from_fn_with_state` so the middleware can take the verifier through `State`
    router.route_layer(middleware::from_fn_with_state(state, require_token))
}

async fn require_token(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(req.headers(), &state.verifier)?;

    // middleware → extractor
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Decide whether the request may pass. Pure: no request mutation, no I/O, no logging.
pub fn authenticate(headers: &HeaderMap, verifier: &TokenVerifier) -> Result<AuthUser, AppError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AppError::MissingToken),
    };

    // Non visible-ASCII can never be a well-formed token.
    let value = value.to_str().map_err(|_| AppError::InvalidToken)?;

    let token = token_from_header(value);

    verifier
        .verify(token)
        .map(AuthUser::new)
        .map_err(|_| AppError::InvalidToken)
}

/// `"Bearer <token>"` → the segment after the first space (up to the next one).
/// Anything else is used verbatim.
fn token_from_header(value: &str) -> &str {
    if value.starts_with(BEARER_PREFIX) {
        value.split(' ').nth(1).unwrap_or_default()
    } else {
        value
    }
}
